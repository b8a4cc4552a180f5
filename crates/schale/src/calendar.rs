//! Month grid generation and event placement.
//!
//! Everything here is pure: "today" is always passed in, and event slices are
//! only borrowed, so rendering the same month twice yields the same result.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;
use crate::types::{DisplayMode, EventCategory, SchedulerEvent};

/// Years accepted in `YYYY-MM` month strings
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// A calendar month, independent of any day within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !YEAR_RANGE.contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Midnight on the first day of the month
    pub fn first_instant(&self) -> NaiveDateTime {
        self.first_day().and_time(NaiveTime::MIN)
    }

    /// Last representable instant of the month's last day
    pub fn last_instant(&self) -> NaiveDateTime {
        let end_of_day =
            NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
        self.last_day().and_time(end_of_day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month; December 9999 has no successor and stays put
    pub fn next(&self) -> Self {
        if self.month == 12 && self.year >= *YEAR_RANGE.end() {
            *self
        } else if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month; January of year 1 stays put
    pub fn prev(&self) -> Self {
        if self.month == 1 && self.year <= *YEAR_RANGE.start() {
            *self
        } else if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Header label, e.g. `2025.11`
    pub fn label(&self) -> String {
        format!("{:04}.{:02}", self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: std::ops::RangeInclusive<usize>| {
            len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(year, 4..=4) || !digits(month, 1..=2) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Parse a weekday name (`sun`, `Monday`, ...) used as the first column
pub fn parse_week_start(s: &str) -> Result<Weekday, ScheduleError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| ScheduleError::InvalidWeekStart(s.to_string()))
}

/// Upper-case three letter header label
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "SUN",
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
    }
}

/// The seven header weekdays, starting at `week_start`
pub fn weekday_headers(week_start: Weekday) -> Vec<Weekday> {
    std::iter::successors(Some(week_start), |d| Some(d.succ()))
        .take(7)
        .collect()
}

/// Number of days from `from` forward to `to` within a week (0..=6)
fn days_between(from: Weekday, to: Weekday) -> u64 {
    let from = from.num_days_from_sunday() as u64;
    let to = to.num_days_from_sunday() as u64;
    (to + 7 - from) % 7
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
}

/// Build the grid of whole weeks covering the month of `reference`.
///
/// The grid starts on `week_start` on or before the first of the month and
/// ends on the weekday before `week_start` on or after the last of the month.
pub fn calendar_grid(
    reference: NaiveDate,
    week_start: Weekday,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let month = YearMonth::from_date(reference);
    let first = month.first_day();
    let last = month.last_day();

    // Padding can only fail at the edges of chrono's range; keep the bare month there
    let grid_start = first
        .checked_sub_days(Days::new(days_between(week_start, first.weekday())))
        .unwrap_or(first);
    let grid_end = last
        .checked_add_days(Days::new(days_between(last.weekday(), week_start.pred())))
        .unwrap_or(last);

    grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .map(|date| CalendarDay {
            date,
            in_month: month.contains(date),
            is_today: date == today,
        })
        .collect()
}

/// Whether `event` should be drawn in the cell for `day`
pub fn is_active_on(event: &SchedulerEvent, day: NaiveDate) -> bool {
    match event.display_mode() {
        DisplayMode::StartOnly => day == event.start_date(),
        DisplayMode::Range | DisplayMode::EndOnly | DisplayMode::Dot => {
            event.start_date() <= day && day <= event.end_date()
        }
    }
}

/// Events active on `day`, in list order, optionally limited to one category
pub fn events_on_day(
    events: &[SchedulerEvent],
    day: NaiveDate,
    category: Option<EventCategory>,
) -> Vec<&SchedulerEvent> {
    events
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| is_active_on(e, day))
        .collect()
}

/// Pickup events with a start or end inside `month`, earliest start first
pub fn pickup_events(events: &[SchedulerEvent], month: YearMonth) -> Vec<&SchedulerEvent> {
    let from = month.first_instant();
    let to = month.last_instant();
    let within = |t: NaiveDateTime| from <= t && t <= to;

    let mut picked: Vec<&SchedulerEvent> = events
        .iter()
        .filter(|e| e.is_pickup && (within(e.start) || within(e.end)))
        .collect();
    picked.sort_by_key(|e| e.start);
    picked
}

/// A grid day together with the events drawn in it
#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    pub day: CalendarDay,
    pub events: Vec<&'a SchedulerEvent>,
}

/// Everything needed to draw one month
#[derive(Debug, Clone)]
pub struct MonthView<'a> {
    pub month: YearMonth,
    pub week_start: Weekday,
    pub cells: Vec<DayCell<'a>>,
    pub pickups: Vec<&'a SchedulerEvent>,
}

impl<'a> MonthView<'a> {
    pub fn build(
        events: &'a [SchedulerEvent],
        month: YearMonth,
        week_start: Weekday,
        category: Option<EventCategory>,
        today: NaiveDate,
    ) -> Self {
        let cells = calendar_grid(month.first_day(), week_start, today)
            .into_iter()
            .map(|day| DayCell {
                day,
                events: events_on_day(events, day.date, category),
            })
            .collect();

        Self {
            month,
            week_start,
            cells,
            pickups: pickup_events(events, month),
        }
    }

    /// Grid rows of seven cells
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_events;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn make_event(
        id: u32,
        start: NaiveDateTime,
        end: NaiveDateTime,
        mode: DisplayMode,
    ) -> SchedulerEvent {
        SchedulerEvent {
            id,
            title: format!("event {id}"),
            start,
            end,
            category: EventCategory::GameEvent,
            description: String::new(),
            url: None,
            url_text: None,
            image_url: None,
            is_pickup: false,
            color: "bg-cyan-500".to_string(),
            display_mode: Some(mode),
        }
    }

    fn all_months() -> impl Iterator<Item = YearMonth> {
        (2020..=2030).flat_map(|y| (1..=12).filter_map(move |m| YearMonth::new(y, m)))
    }

    const WEEK_STARTS: [Weekday; 2] = [Weekday::Sun, Weekday::Mon];

    // ========== YearMonth tests ==========

    #[test]
    fn test_year_month_bounds() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));

        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.last_day(), date(2025, 12, 31));
        assert_eq!(dec.first_instant(), at(2025, 12, 1, 0));
        assert!(dec.last_instant() > date(2025, 12, 31).and_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn test_year_month_navigation_wraps_years() {
        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2026, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);

        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), YearMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn test_year_month_parse_and_display() {
        let month: YearMonth = "2025-11".parse().unwrap();
        assert_eq!(month, YearMonth::new(2025, 11).unwrap());
        assert_eq!(month.to_string(), "2025-11");
        assert_eq!(month.label(), "2025.11");
        assert_eq!("2025-3".parse::<YearMonth>().unwrap().to_string(), "2025-03");
    }

    #[test]
    fn test_year_month_parse_rejects_garbage() {
        let bad_months = [
            "",
            "2025",
            "2025-13",
            "2025-00",
            "abcd-01",
            "2025/11",
            "262142-12",
            "0000-01",
            "+202-01",
            "02025-01",
            "2025-011",
        ];
        for bad in bad_months {
            assert_eq!(
                bad.parse::<YearMonth>(),
                Err(ScheduleError::InvalidMonth(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_year_month_serde_as_string() {
        let month = YearMonth::new(2025, 1).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2025-01\"");
        let back: YearMonth = serde_json::from_str("\"2025-01\"").unwrap();
        assert_eq!(back, month);
    }

    #[test]
    fn test_year_month_new_bounds() {
        assert!(YearMonth::new(1, 1).is_some());
        assert!(YearMonth::new(9999, 12).is_some());
        assert!(YearMonth::new(0, 12).is_none());
        assert!(YearMonth::new(10000, 1).is_none());
        assert!(YearMonth::new(2025, 0).is_none());
    }

    #[test]
    fn test_year_month_navigation_stops_at_range_edges() {
        let first = YearMonth::new(1, 1).unwrap();
        assert_eq!(first.prev(), first);
        assert_eq!(first.prev().to_string(), "0001-01");

        let last = YearMonth::new(9999, 12).unwrap();
        assert_eq!(last.next(), last);
        assert_eq!(last.next().first_day(), date(9999, 12, 1));
    }

    #[test]
    fn test_grid_at_range_edges_does_not_panic() {
        for month in [YearMonth::new(1, 1).unwrap(), YearMonth::new(9999, 12).unwrap()] {
            let grid = calendar_grid(month.first_day(), Weekday::Sun, date(2025, 1, 1));
            assert_eq!(grid.len() % 7, 0, "{month}");
            assert!(grid.iter().any(|d| d.date == month.last_day()));
        }
    }

    // ========== weekday tests ==========

    #[test]
    fn test_parse_week_start() {
        assert_eq!(parse_week_start("sun"), Ok(Weekday::Sun));
        assert_eq!(parse_week_start("Monday"), Ok(Weekday::Mon));
        assert_eq!(
            parse_week_start("someday"),
            Err(ScheduleError::InvalidWeekStart("someday".to_string()))
        );
    }

    #[test]
    fn test_weekday_headers_rotate() {
        let labels: Vec<_> = weekday_headers(Weekday::Sun).into_iter().map(weekday_label).collect();
        assert_eq!(labels, ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"]);

        let labels: Vec<_> = weekday_headers(Weekday::Mon).into_iter().map(weekday_label).collect();
        assert_eq!(labels, ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"]);
    }

    // ========== grid tests ==========

    #[test]
    fn test_grid_november_2025() {
        // 2025-11-01 is a Saturday, 2025-11-30 a Sunday
        let grid = calendar_grid(date(2025, 11, 15), Weekday::Sun, date(2025, 11, 20));

        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].date, date(2025, 10, 26));
        assert!(!grid[0].in_month);
        assert_eq!(grid[6].date, date(2025, 11, 1));
        assert!(grid[6].in_month);
        assert_eq!(grid[41].date, date(2025, 12, 6));
        assert_eq!(grid.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_grid_february_without_padding() {
        // 2026-02-01 is a Sunday and February 2026 has 28 days
        let grid = calendar_grid(date(2026, 2, 10), Weekday::Sun, date(2000, 1, 1));
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|d| d.in_month));
        assert!(grid.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_grid_monday_start() {
        let grid = calendar_grid(date(2025, 11, 1), Weekday::Mon, date(2025, 11, 1));
        assert_eq!(grid[0].date, date(2025, 10, 27));
        assert_eq!(grid[0].date.weekday(), Weekday::Mon);
        assert_eq!(grid.last().unwrap().date, date(2025, 11, 30));
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_grid_whole_weeks_covering_month() {
        for week_start in WEEK_STARTS {
            for month in all_months() {
                let grid = calendar_grid(month.first_day(), week_start, month.first_day());

                assert_eq!(grid.len() % 7, 0, "{month}");
                assert!((28..=42).contains(&grid.len()), "{month}");
                assert_eq!(grid[0].date.weekday(), week_start);
                assert_eq!(grid.last().unwrap().date.weekday(), week_start.pred());
                assert!(grid.iter().any(|d| d.date == month.first_day()));
                assert!(grid.iter().any(|d| d.date == month.last_day()));

                let in_month: Vec<_> = grid.iter().filter(|d| d.in_month).map(|d| d.date).collect();
                let expected: Vec<_> = month
                    .first_day()
                    .iter_days()
                    .take_while(|d| *d <= month.last_day())
                    .collect();
                assert_eq!(in_month, expected, "{month}");

                for pair in grid.windows(2) {
                    assert_eq!(Some(pair[1].date), pair[0].date.succ_opt());
                }
            }
        }
    }

    #[test]
    fn test_grid_ignores_day_within_month() {
        let a = calendar_grid(date(2025, 11, 1), Weekday::Sun, date(2025, 1, 1));
        let b = calendar_grid(date(2025, 11, 30), Weekday::Sun, date(2025, 1, 1));
        assert_eq!(a, b);
    }

    // ========== event placement tests ==========

    #[test]
    fn test_start_only_appears_once_across_months() {
        // Starts on the last day of the month, visible in the next month's leading days too
        let event = make_event(1, at(2025, 11, 30, 9), at(2025, 12, 2, 18), DisplayMode::StartOnly);
        let events = vec![event];

        for month in [YearMonth::new(2025, 11).unwrap(), YearMonth::new(2025, 12).unwrap()] {
            let grid = calendar_grid(month.first_day(), Weekday::Sun, date(2025, 1, 1));
            let hits: Vec<_> = grid
                .iter()
                .filter(|d| !events_on_day(&events, d.date, None).is_empty())
                .map(|d| d.date)
                .collect();
            assert_eq!(hits, vec![date(2025, 11, 30)], "{month}");
        }
    }

    #[test]
    fn test_range_covers_every_day_inclusive() {
        let event = make_event(1, at(2025, 11, 26, 11), at(2025, 12, 3, 3), DisplayMode::Range);
        let events = vec![event.clone()];
        let grid = calendar_grid(date(2025, 11, 1), Weekday::Sun, date(2025, 1, 1));

        for day in &grid {
            let expected = day.date >= date(2025, 11, 26) && day.date <= date(2025, 12, 3);
            let shown = !events_on_day(&events, day.date, None).is_empty();
            assert_eq!(shown, expected, "{}", day.date);
        }
        // Day granularity: the start day counts even though the event begins at 11:00
        assert!(is_active_on(&event, date(2025, 11, 26)));
        assert!(is_active_on(&event, date(2025, 12, 3)));
        assert!(!is_active_on(&event, date(2025, 12, 4)));
    }

    #[test]
    fn test_end_only_and_dot_use_range_membership() {
        for mode in [DisplayMode::EndOnly, DisplayMode::Dot] {
            let event = make_event(1, at(2025, 3, 1, 0), at(2025, 3, 3, 0), mode);
            assert!(is_active_on(&event, date(2025, 3, 1)));
            assert!(is_active_on(&event, date(2025, 3, 2)));
            assert!(is_active_on(&event, date(2025, 3, 3)));
            assert!(!is_active_on(&event, date(2025, 2, 28)));
        }
    }

    #[test]
    fn test_events_on_day_keep_list_order() {
        let events = vec![
            make_event(30, at(2025, 5, 5, 12), at(2025, 5, 5, 13), DisplayMode::Range),
            make_event(10, at(2025, 5, 1, 0), at(2025, 5, 9, 0), DisplayMode::Range),
            make_event(20, at(2025, 5, 5, 8), at(2025, 5, 5, 9), DisplayMode::Dot),
        ];

        let ids: Vec<u32> = events_on_day(&events, date(2025, 5, 5), None)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_events_on_day_category_filter() {
        let events = builtin_events().unwrap();
        let day = date(2025, 12, 3);

        assert_eq!(events_on_day(&events, day, None).len(), 2);
        let game: Vec<u32> = events_on_day(&events, day, Some(EventCategory::GameEvent))
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(game, vec![1]);
        assert!(events_on_day(&events, day, Some(EventCategory::RealEvent)).is_empty());
    }

    #[test]
    fn test_placement_does_not_mutate_input() {
        let events = builtin_events().unwrap();
        let before = events.clone();
        let dec = YearMonth::new(2025, 12).unwrap();
        let _ = MonthView::build(&events, dec, Weekday::Sun, None, date(2025, 12, 1));
        assert_eq!(events, before);
    }

    // ========== pickup tests ==========

    #[test]
    fn test_pickup_sorted_by_start() {
        let mut late = make_event(1, at(2025, 6, 20, 0), at(2025, 6, 21, 0), DisplayMode::Range);
        let mut early = make_event(2, at(2025, 5, 28, 0), at(2025, 6, 2, 0), DisplayMode::Range);
        let mut not_pickup =
            make_event(3, at(2025, 6, 1, 0), at(2025, 6, 2, 0), DisplayMode::Range);
        late.is_pickup = true;
        early.is_pickup = true;
        not_pickup.is_pickup = false;
        let events = vec![late, not_pickup, early];

        let ids: Vec<u32> = pickup_events(&events, YearMonth::new(2025, 6).unwrap())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_pickup_builtin_months() {
        let events = builtin_events().unwrap();

        let nov: Vec<u32> = pickup_events(&events, YearMonth::new(2025, 11).unwrap())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(nov, vec![1]);

        let dec: Vec<u32> = pickup_events(&events, YearMonth::new(2025, 12).unwrap())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(dec, vec![1]);

        let jan: Vec<u32> = pickup_events(&events, YearMonth::new(2025, 1).unwrap())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(jan, vec![2]);
    }

    #[test]
    fn test_pickup_empty_month() {
        let events = builtin_events().unwrap();
        assert!(pickup_events(&events, YearMonth::new(2025, 7).unwrap()).is_empty());
        assert!(pickup_events(&[], YearMonth::new(2025, 11).unwrap()).is_empty());
    }

    #[test]
    fn test_pickup_spanning_event_not_included() {
        // Neither endpoint falls inside June
        let mut event = make_event(1, at(2025, 5, 1, 0), at(2025, 7, 31, 0), DisplayMode::Range);
        event.is_pickup = true;
        assert!(pickup_events(&[event], YearMonth::new(2025, 6).unwrap()).is_empty());
    }

    #[test]
    fn test_pickup_boundaries_inclusive() {
        let mut first = make_event(1, at(2025, 6, 1, 0), at(2025, 6, 1, 0), DisplayMode::Range);
        let june_end = date(2025, 6, 30).and_hms_opt(23, 59, 59).unwrap();
        let mut last = make_event(2, at(2025, 5, 1, 0), june_end, DisplayMode::Range);
        first.is_pickup = true;
        last.is_pickup = true;

        let events = [first, last];
        let picked = pickup_events(&events, YearMonth::new(2025, 6).unwrap());
        assert_eq!(picked.len(), 2);
    }

    // ========== month view tests ==========

    #[test]
    fn test_month_view_round_trip_is_identical() {
        let events = builtin_events().unwrap();
        let today = date(2025, 11, 20);
        let nov = YearMonth::new(2025, 11).unwrap();

        let first = MonthView::build(&events, nov, Weekday::Sun, None, today);
        let away = MonthView::build(&events, nov.next(), Weekday::Sun, None, today);
        let back = MonthView::build(&events, away.month.prev(), Weekday::Sun, None, today);

        let days = |v: &MonthView| v.cells.iter().map(|c| c.day).collect::<Vec<_>>();
        let ids = |v: &MonthView| {
            v.cells
                .iter()
                .map(|c| c.events.iter().map(|e| e.id).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        };
        let pickups = |v: &MonthView| v.pickups.iter().map(|e| e.id).collect::<Vec<_>>();

        assert_eq!(days(&first), days(&back));
        assert_eq!(ids(&first), ids(&back));
        assert_eq!(pickups(&first), pickups(&back));
    }

    #[test]
    fn test_month_view_weeks() {
        let events = builtin_events().unwrap();
        let nov = YearMonth::new(2025, 11).unwrap();
        let view = MonthView::build(&events, nov, Weekday::Sun, None, date(2025, 11, 1));

        let weeks: Vec<_> = view.weeks().collect();
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.len() == 7));
    }
}
