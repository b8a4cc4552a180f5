use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Link text used when an event has a URL but no explicit label
pub const DEFAULT_LINK_TEXT: &str = "詳細を見る";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    GameEvent,
    RealEvent,
    Goods,
    Maintenance,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::GameEvent,
        EventCategory::RealEvent,
        EventCategory::Goods,
        EventCategory::Maintenance,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::GameEvent => "game_event",
            EventCategory::RealEvent => "real_event",
            EventCategory::Goods => "goods",
            EventCategory::Maintenance => "maintenance",
            EventCategory::Other => "other",
        }
    }

    /// Short badge label shown on pickup cards
    pub fn badge_label(&self) -> &'static str {
        match self {
            EventCategory::GameEvent => "ゲーム内",
            _ => "イベント",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScheduleError::UnknownCategory(s.to_string()))
    }
}

/// How an event is drawn on the calendar grid
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Range,
    StartOnly,
    EndOnly,
    Dot,
}

/// A single schedule entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerEvent {
    pub id: u32,

    pub title: String,

    /// Local start time, e.g. `2025-11-26T11:00:00`
    pub start: NaiveDateTime,

    pub end: NaiveDateTime,

    pub category: EventCategory,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_text: Option<String>,

    /// Path served from the public directory (e.g. `/images/banner.png`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub is_pickup: bool,

    /// Color class name such as `bg-cyan-500`
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
}

impl SchedulerEvent {
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode.unwrap_or_default()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Text for the external link button, or None when there is no link
    pub fn link_text(&self) -> Option<&str> {
        self.url.as_ref()?;
        Some(
            self.url_text
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_LINK_TEXT),
        )
    }
}
