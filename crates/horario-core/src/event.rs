//! Calendar event data model.
//!
//! An `Event` is a titled time interval with optional metadata. Course
//! events carry a total-hours target and a difficulty level; the tagged
//! `EventKind` keeps "totalHours without isCourse"-style combinations
//! unrepresentable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A recurrence rule attached to an event.
///
/// Stored and round-tripped only; expansion into occurrences is out of
/// scope for the analyzers, which see each event as a single interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrencePattern {
    pub frequency: Frequency,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// 0=Sun ... 6=Sat
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<u8>,
}

/// What kind of event this is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventKind {
    /// An ordinary calendar entry.
    Plain,
    /// A multi-session study commitment with a total-hours target.
    Course {
        total_hours: f64,
        difficulty: Difficulty,
    },
}

impl EventKind {
    /// Whether this is a course event.
    pub fn is_course(&self) -> bool {
        matches!(self, EventKind::Course { .. })
    }

    fn plain() -> Self {
        EventKind::Plain
    }
}

/// A calendar event: the base unit the store and analyzers operate on.
///
/// Callers are expected to supply `end > start`; the store does not
/// validate intervals, but the course analyzer does validate its own
/// date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrencePattern>,
    #[serde(default = "EventKind::plain")]
    pub kind: EventKind,
}

impl Event {
    /// Create a plain event with a fresh identifier.
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            start,
            end,
            description: None,
            location: None,
            color: None,
            recurrence: None,
            kind: EventKind::Plain,
        }
    }

    /// Create a course event with a fresh identifier.
    pub fn new_course(
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        total_hours: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            kind: EventKind::Course {
                total_hours,
                difficulty,
            },
            ..Self::new(title, start, end)
        }
    }

    /// Set an explicit identifier (builder style).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the display color (builder style).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Event duration in whole-and-fractional hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Event duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
