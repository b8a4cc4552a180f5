use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use notify_debouncer_mini::{
    new_debouncer,
    notify::{RecommendedWatcher, RecursiveMode},
    DebounceEventResult, Debouncer,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::calendar::{calendar_grid, events_on_day, pickup_events, YearMonth};
use crate::config::Settings;
use crate::data;
use crate::error::ScheduleError;
use crate::html;
use crate::state::{ViewQuery, ViewState};
use crate::types::SchedulerEvent;

/// Application state shared across requests
pub struct AppState {
    pub events: RwLock<Vec<SchedulerEvent>>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(events: Vec<SchedulerEvent>, settings: Settings) -> Self {
        Self {
            events: RwLock::new(events),
            settings,
        }
    }

    /// Re-read the events source, keeping the current list on failure
    pub async fn reload(&self) -> anyhow::Result<usize> {
        let new_events = data::load_or_builtin(self.settings.events_file.as_deref())?;
        let mut events = self.events.write().await;
        let old_count = events.len();
        *events = new_events;
        info!(
            count = events.len(),
            change = events.len() as i64 - old_count as i64,
            "Events reloaded"
        );
        Ok(events.len())
    }
}

/// Build the router; split out so tests can drive it without a socket
pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = state.settings.public_dir.clone();

    Router::new()
        .route("/", get(index_handler))
        .route("/api/events", get(events_handler))
        .route("/api/calendar", get(calendar_handler))
        .route("/api/pickup", get(pickup_handler))
        .route("/api/refresh", get(refresh_handler))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}

/// Start the web server, watching the events file if one is configured
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let events = data::load_or_builtin(settings.events_file.as_deref())?;
    info!(count = events.len(), "Loaded events");

    let port = settings.port;
    let state = Arc::new(AppState::new(events, settings));

    // Dropping the debouncer stops the watch, so hold it for the server's lifetime
    let _watcher = match state.settings.events_file.clone() {
        Some(path) => Some(start_file_watcher(state.clone(), path)?),
        None => None,
    };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch the directory holding the events file and reload when it changes
fn start_file_watcher(
    state: Arc<AppState>,
    events_file: PathBuf,
) -> anyhow::Result<Debouncer<RecommendedWatcher>> {
    let watch_dir = match events_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = events_file.file_name().map(|n| n.to_os_string());

    let (tx, mut rx) = tokio::sync::mpsc::channel(10);

    let mut debouncer = new_debouncer(Duration::from_secs(2), move |result: DebounceEventResult| {
        match result {
            Ok(events) => {
                let touched = events
                    .iter()
                    .any(|e| e.path.file_name().map(|n| n.to_os_string()) == file_name);
                if touched {
                    let _ = tx.blocking_send(());
                }
            }
            Err(e) => warn!(error = %e, "File watch error"),
        }
    })?;

    debouncer
        .watcher()
        .watch(&watch_dir, RecursiveMode::NonRecursive)?;
    info!(dir = %watch_dir.display(), "Watching for event changes");

    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            debug!("Detected change in events file");
            if let Err(e) = state.reload().await {
                warn!(error = %e, "Failed to reload events, keeping previous list");
            }
        }
    });

    Ok(debouncer)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Serve the calendar page for the state in the query string
async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let today = today();
    let view = ViewState::from_query(&query, today);
    let events = state.events.read().await;
    let markup = html::render_page(&events, view, state.settings.week_start, today);
    Html(markup.into_string())
}

/// Return all events as JSON
async fn events_handler(State(state): State<Arc<AppState>>) -> Json<Vec<SchedulerEvent>> {
    let events = state.events.read().await;
    Json(events.clone())
}

#[derive(Debug, Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

impl MonthQuery {
    fn resolve(&self, today: NaiveDate) -> Result<YearMonth, (StatusCode, String)> {
        match &self.month {
            Some(m) => m
                .parse()
                .map_err(|e: ScheduleError| (StatusCode::BAD_REQUEST, e.to_string())),
            None => Ok(YearMonth::from_date(today)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarDayResponse {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub event_ids: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub month: YearMonth,
    pub days: Vec<CalendarDayResponse>,
}

/// Grid days for a month with the ids of events drawn on each
async fn calendar_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CalendarResponse>, (StatusCode, String)> {
    let today = today();
    let month = query.resolve(today)?;
    let events = state.events.read().await;

    let days = calendar_grid(month.first_day(), state.settings.week_start, today)
        .into_iter()
        .map(|day| CalendarDayResponse {
            date: day.date,
            in_month: day.in_month,
            is_today: day.is_today,
            event_ids: events_on_day(&events, day.date, None)
                .iter()
                .map(|e| e.id)
                .collect(),
        })
        .collect();

    Ok(Json(CalendarResponse { month, days }))
}

/// Pickup events for a month
async fn pickup_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<SchedulerEvent>>, (StatusCode, String)> {
    let month = query.resolve(today())?;
    let events = state.events.read().await;
    let pickups = pickup_events(&events, month).into_iter().cloned().collect();
    Ok(Json(pickups))
}

/// Reload events from disk (manual trigger)
async fn refresh_handler(State(state): State<Arc<AppState>>) -> &'static str {
    info!("Manual refresh triggered");

    match state.reload().await {
        Ok(_) => "OK",
        Err(e) => {
            warn!(error = %e, "Refresh failed");
            "ERROR"
        }
    }
}
