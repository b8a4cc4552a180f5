use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

use crate::calendar::{weekday_headers, weekday_label, DayCell, MonthView};
use crate::state::ViewState;
use crate::types::{DisplayMode, EventCategory, SchedulerEvent};

/// Filter buttons shown above the grid; `None` is "ALL"
const FILTERS: &[(Option<EventCategory>, &str)] = &[
    (None, "ALL"),
    (Some(EventCategory::GameEvent), "ゲーム内イベント"),
    (Some(EventCategory::RealEvent), "リアルイベント"),
];

/// Render one month to a standalone HTML file
pub fn generate_html(
    events: &[SchedulerEvent],
    state: ViewState,
    week_start: Weekday,
    today: NaiveDate,
    path: &Path,
) -> Result<()> {
    let html = render_page(events, state, week_start, today);
    fs::write(path, html.into_string())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn render_page(
    events: &[SchedulerEvent],
    state: ViewState,
    week_start: Weekday,
    today: NaiveDate,
) -> Markup {
    let view = MonthView::build(events, state.month, week_start, state.category, today);
    let selected = state.selected_event(events);

    html! {
        (DOCTYPE)
        html lang="ja" class=[state.dark.then_some("dark")] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Schale Schedule" }
                style { (PreEscaped(CSS)) }
            }
            body {
                (render_header(state, today))
                main.layout {
                    section.calendar {
                        (render_filters(state))
                        (render_grid(&view, state))
                    }
                    aside.sidebar {
                        (render_detail(selected))
                        (render_pickups(&view.pickups, state))
                    }
                }
            }
        }
    }
}

fn render_header(state: ViewState, today: NaiveDate) -> Markup {
    html! {
        header.header {
            div.brand {
                div.logo { "S" }
                div {
                    h1 { "Schale" }
                    p.tagline { "SCHEDULE MANAGER" }
                }
            }
            nav.controls {
                div.month-nav {
                    a.nav-button href=(state.prev_month().href()) title="Previous month" { "‹" }
                    span.month-label #"month-label" { (state.month.label()) }
                    a.nav-button href=(state.next_month().href()) title="Next month" { "›" }
                }
                a.today-button href=(state.today(today).href()) { "TODAY" }
                a.theme-button href=(state.toggle_dark().href()) title="Toggle dark mode" {
                    @if state.dark { "☀" } @else { "☾" }
                }
            }
        }
    }
}

fn render_filters(state: ViewState) -> Markup {
    html! {
        div.filters {
            @for (category, label) in FILTERS {
                @let active = state.category == *category;
                a.filter.active[active] href=(state.set_category(*category).href()) { (label) }
            }
        }
    }
}

fn render_grid(view: &MonthView, state: ViewState) -> Markup {
    html! {
        div.weekdays {
            @for day in weekday_headers(view.week_start) {
                div.weekday.sun[day == Weekday::Sun].sat[day == Weekday::Sat] {
                    (weekday_label(day))
                }
            }
        }
        div.grid #"calendar-grid" {
            @for week in view.weeks() {
                @for cell in week {
                    (render_cell(cell, state))
                }
            }
        }
    }
}

fn render_cell(cell: &DayCell, state: ViewState) -> Markup {
    let day = cell.day;
    html! {
        div.day.outside[!day.in_month] data-date=(day.date.format("%Y-%m-%d").to_string()) {
            // Clicking empty space in a cell clears the selection
            a.day-clear href=(state.clear_selection().href()) aria-label="Clear selection" {}
            span.day-number.today[day.is_today] { (day.date.format("%-d").to_string()) }
            div.day-events {
                @for event in &cell.events {
                    @let is_selected = state.selected == Some(event.id);
                    @match event.display_mode() {
                        DisplayMode::Dot => {
                            a.event-dot.selected[is_selected]
                                href=(state.select(event.id).href())
                                data-event-id=(event.id) {
                                span class={"dot " (event.color)} {}
                                (event.title)
                            }
                        }
                        _ => {
                            @let class = if is_selected {
                                format!("event-chip {} selected", event.color)
                            } else {
                                format!("event-chip {}", event.color)
                            };
                            a class=(class)
                                href=(state.select(event.id).href())
                                data-event-id=(event.id) {
                                (event.title)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_detail(selected: Option<&SchedulerEvent>) -> Markup {
    html! {
        div.detail #"event-detail" {
            @if let Some(event) = selected {
                div.detail-head {
                    span class={"badge " (event.color)} { (event.category.as_str().to_uppercase()) }
                    h2 { (event.title) }
                    p.detail-time {
                        (event.start.format("%Y/%m/%d %H:%M").to_string())
                        " - "
                        (event.end.format("%m/%d %H:%M").to_string())
                    }
                }
                div.detail-body {
                    @if let Some(image) = &event.image_url {
                        img.detail-image src=(image) alt=(event.title);
                    } @else {
                        div.image-placeholder { "📅" }
                    }
                    p.description { (event.description) }
                    @if let (Some(url), Some(text)) = (&event.url, event.link_text()) {
                        a.detail-link href=(url) target="_blank" rel="noopener noreferrer" {
                            (text) " ↗"
                        }
                    }
                }
            } @else {
                div.empty-state {
                    div.empty-icon { "📅" }
                    p.empty-title { "イベントを選択してください" }
                    p.empty-hint {
                        "カレンダーの日付をクリックすると詳細が表示されます"
                    }
                }
            }
        }
    }
}

fn render_pickups(pickups: &[&SchedulerEvent], state: ViewState) -> Markup {
    html! {
        div.pickups #"pickup-list" {
            div.pickups-head {
                span.star { "★" }
                h3 { "今月のピックアップ" }
            }
            @if pickups.is_empty() {
                p.pickups-empty { "今月のピックアップはありません" }
            } @else {
                @for event in pickups {
                    a.pickup-card href=(state.select(event.id).href()) data-event-id=(event.id) {
                        div.pickup-badges {
                            span class={"badge " (event.color)} { (event.category.badge_label()) }
                            span.pickup-badge { "PICK UP" }
                        }
                        h4 { (event.title) }
                        p.pickup-dates {
                            (event.start.format("%m/%d").to_string())
                            " - "
                            (event.end.format("%m/%d").to_string())
                        }
                    }
                }
            }
        }
    }
}

const CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --page: #f8fafc;
    --panel: #ffffff;
    --muted-panel: #f8fafc;
    --border: #e2e8f0;
    --text: #1e293b;
    --muted: #94a3b8;
    --accent: #00aeef;
}

html.dark {
    --page: #0f172a;
    --panel: #1e293b;
    --muted-panel: #172033;
    --border: #334155;
    --text: #f1f5f9;
    --muted: #64748b;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Hiragino Sans', 'Noto Sans JP', sans-serif;
    background: var(--page);
    color: var(--text);
    min-height: 100vh;
}

a {
    color: inherit;
    text-decoration: none;
}

.header {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 12px 24px;
    background: var(--panel);
    border-bottom: 1px solid var(--border);
}

.brand {
    display: flex;
    align-items: center;
    gap: 8px;
}

.logo {
    width: 32px;
    height: 32px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--accent);
    color: #fff;
    font-weight: 700;
    font-size: 1.25em;
    border-radius: 4px;
}

h1 {
    font-size: 1.1em;
    line-height: 1.1;
}

.tagline {
    font-size: 0.7em;
    font-weight: 600;
    letter-spacing: 0.15em;
    color: var(--accent);
}

.controls {
    display: flex;
    align-items: center;
    gap: 16px;
}

.month-nav {
    display: flex;
    align-items: center;
    background: var(--muted-panel);
    border-radius: 8px;
    padding: 4px;
}

.nav-button {
    padding: 4px 12px;
    border-radius: 6px;
    font-size: 1.2em;
}

.nav-button:hover {
    background: var(--panel);
}

.month-label {
    min-width: 140px;
    text-align: center;
    font-weight: 700;
    font-size: 1.1em;
}

.today-button {
    padding: 6px 16px;
    border: 2px solid var(--accent);
    color: var(--accent);
    font-weight: 700;
    border-radius: 8px;
}

.theme-button {
    font-size: 1.2em;
    padding: 4px 8px;
}

.layout {
    max-width: 1600px;
    margin: 0 auto;
    padding: 16px;
    display: grid;
    grid-template-columns: 3fr 1fr;
    gap: 24px;
}

.calendar, .detail, .pickups {
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
}

.filters {
    display: flex;
    gap: 8px;
    padding: 12px;
    border-bottom: 1px solid var(--border);
}

.filter {
    padding: 4px 12px;
    font-size: 0.85em;
    border: 1px solid var(--border);
    border-radius: 4px;
}

.filter.active {
    background: #1e293b;
    color: #fff;
}

.weekdays, .grid {
    display: grid;
    grid-template-columns: repeat(7, 1fr);
}

.weekdays {
    border-bottom: 1px solid var(--border);
}

.weekday {
    padding: 8px 0;
    text-align: center;
    font-size: 0.75em;
    font-weight: 700;
    color: var(--muted);
}

.weekday.sun { color: #ef4444; }
.weekday.sat { color: #3b82f6; }

.grid {
    gap: 1px;
    background: var(--border);
}

.day {
    position: relative;
    min-height: 120px;
    padding: 4px;
    background: var(--panel);
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.day.outside {
    background: var(--muted-panel);
    color: var(--muted);
}

.day-clear {
    position: absolute;
    inset: 0;
    z-index: 0;
}

.day-number, .day-events {
    position: relative;
    z-index: 1;
}

.day-number {
    width: 28px;
    height: 28px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.85em;
    border-radius: 50%;
    pointer-events: none;
}

.day-number.today {
    background: #06b6d4;
    color: #fff;
}

.day-events {
    display: flex;
    flex-direction: column;
    gap: 4px;
    max-height: 100px;
    overflow-y: auto;
}

.event-chip {
    display: block;
    font-size: 0.75em;
    padding: 4px 8px;
    border-radius: 4px;
    color: #fff;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.event-dot {
    display: flex;
    align-items: center;
    gap: 4px;
    font-size: 0.75em;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.dot {
    width: 8px;
    height: 8px;
    min-width: 8px;
    border-radius: 50%;
}

.event-chip:hover, .event-dot:hover { opacity: 0.8; }

.selected {
    outline: 2px solid #94a3b8;
    outline-offset: 1px;
}

.sidebar {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.detail {
    min-height: 300px;
    border: 2px dashed var(--border);
    display: flex;
    flex-direction: column;
}

.detail-head {
    padding: 16px;
    background: var(--muted-panel);
    border-bottom: 1px solid var(--border);
}

.detail-head h2 {
    font-size: 1.1em;
    margin: 8px 0 4px;
}

.detail-time, .pickup-dates {
    font-family: ui-monospace, monospace;
    font-size: 0.75em;
    color: var(--muted);
}

.detail-body {
    padding: 16px;
    display: flex;
    flex-direction: column;
    gap: 16px;
    flex: 1;
}

.detail-image {
    width: 100%;
    border-radius: 8px;
    border: 1px solid var(--border);
}

.image-placeholder {
    height: 128px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--muted-panel);
    border-radius: 8px;
    font-size: 2em;
}

.description {
    font-size: 0.9em;
    white-space: pre-wrap;
}

.detail-link {
    margin-top: auto;
    display: block;
    text-align: center;
    padding: 8px;
    border-radius: 8px;
    background: #1e293b;
    color: #fff;
    font-weight: 700;
    font-size: 0.9em;
}

html.dark .detail-link {
    background: #fff;
    color: #0f172a;
}

.empty-state {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 32px;
    text-align: center;
    color: var(--muted);
}

.empty-icon { font-size: 2em; margin-bottom: 16px; }
.empty-title { font-weight: 700; }
.empty-hint { font-size: 0.85em; margin-top: 8px; }

.pickups {
    padding: 16px;
    flex: 1;
}

.pickups-head {
    display: flex;
    align-items: center;
    gap: 8px;
    padding-bottom: 8px;
    margin-bottom: 16px;
    border-bottom: 1px solid var(--border);
    font-size: 0.9em;
}

.star { color: #eab308; }

.pickup-card {
    display: block;
    padding: 12px;
    margin-bottom: 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--muted-panel);
}

.pickup-card:hover {
    border-color: #67e8f9;
}

.pickup-card h4 {
    font-size: 0.9em;
    margin: 4px 0;
}

.pickup-badges {
    display: flex;
    justify-content: space-between;
}

.pickup-dates { text-align: right; }

.badge {
    display: inline-block;
    padding: 2px 6px;
    border-radius: 4px;
    font-size: 0.65em;
    font-weight: 700;
    color: #fff;
}

.pickup-badge {
    padding: 0 4px;
    border: 1px solid #eab308;
    border-radius: 4px;
    color: #ca8a04;
    font-size: 0.65em;
    font-weight: 700;
}

.pickups-empty {
    text-align: center;
    padding: 16px 0;
    font-size: 0.85em;
    color: var(--muted);
}

.bg-cyan-500 { background: #06b6d4; }
.bg-pink-500 { background: #ec4899; }
.bg-gray-500 { background: #6b7280; }
.bg-blue-500 { background: #3b82f6; }
.bg-red-500 { background: #ef4444; }
.bg-green-500 { background: #22c55e; }
.bg-yellow-500 { background: #eab308; }
.bg-purple-500 { background: #a855f7; }
.bg-orange-500 { background: #f97316; }

@media (max-width: 1024px) {
    .layout {
        grid-template-columns: 1fr;
    }

    .header {
        flex-direction: column;
        gap: 12px;
    }
}
"#;
