//! What the page is currently showing.
//!
//! The state lives entirely in the URL: every link on the page is the
//! current state with one transition applied.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::calendar::YearMonth;
use crate::data::find_event;
use crate::types::{EventCategory, SchedulerEvent};

/// Raw query parameters, kept as strings so bad values degrade to defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub month: Option<String>,
    pub event: Option<String>,
    pub category: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub month: YearMonth,
    pub selected: Option<u32>,
    pub category: Option<EventCategory>,
    pub dark: bool,
}

impl ViewState {
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            selected: None,
            category: None,
            dark: false,
        }
    }

    /// Build state from query parameters, falling back to today's month
    pub fn from_query(query: &ViewQuery, today: NaiveDate) -> Self {
        let month = query
            .month
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or_else(|| YearMonth::from_date(today));

        Self {
            month,
            selected: query.event.as_deref().and_then(|id| id.trim().parse().ok()),
            category: query.category.as_deref().and_then(|c| c.parse().ok()),
            dark: query.theme.as_deref() == Some("dark"),
        }
    }

    pub fn select(self, id: u32) -> Self {
        Self {
            selected: Some(id),
            ..self
        }
    }

    pub fn clear_selection(self) -> Self {
        Self {
            selected: None,
            ..self
        }
    }

    pub fn next_month(self) -> Self {
        Self {
            month: self.month.next(),
            ..self
        }
    }

    pub fn prev_month(self) -> Self {
        Self {
            month: self.month.prev(),
            ..self
        }
    }

    /// Jump to the month containing `today`
    pub fn today(self, today: NaiveDate) -> Self {
        Self {
            month: YearMonth::from_date(today),
            ..self
        }
    }

    pub fn toggle_dark(self) -> Self {
        Self {
            dark: !self.dark,
            ..self
        }
    }

    pub fn set_category(self, category: Option<EventCategory>) -> Self {
        Self { category, ..self }
    }

    /// The selected event, if the id still refers to one
    pub fn selected_event<'a>(&self, events: &'a [SchedulerEvent]) -> Option<&'a SchedulerEvent> {
        self.selected.and_then(|id| find_event(events, id))
    }

    /// Relative URL that reproduces this state
    pub fn href(&self) -> String {
        let mut params = vec![format!("month={}", self.month)];
        if let Some(id) = self.selected {
            params.push(format!("event={id}"));
        }
        if let Some(category) = self.category {
            params.push(format!("category={category}"));
        }
        if self.dark {
            params.push("theme=dark".to_string());
        }
        format!("?{}", params.join("&"))
    }
}
