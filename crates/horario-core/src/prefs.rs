//! User preferences.
//!
//! Process-wide configuration read by the analyzers:
//! - Start-of-week and working-hours window
//! - Notification defaults
//! - Optional study preferences (preferred days, daily cap, times of day)
//!
//! Preferences are a read-only input to the analyzers; the settings layer
//! mutates them wholesale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day label used in study preferences and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl fmt::Display for TimeOfDay {
    // Recommendation text is rendered with Spanish labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeOfDay::Morning => "mañana",
            TimeOfDay::Afternoon => "tarde",
            TimeOfDay::Evening => "noche",
        };
        write!(f, "{label}")
    }
}

/// Daily window considered active for scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(default = "default_work_start")]
    pub start: u32,
    #[serde(default = "default_work_end")]
    pub end: u32,
    /// 0=Sun ... 6=Sat
    #[serde(default = "default_weekdays")]
    pub days_of_week: Vec<u8>,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: default_work_start(),
            end: default_work_end(),
            days_of_week: default_weekdays(),
        }
    }
}

/// Notification defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPrefs {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Reminder offsets in minutes before an event.
    #[serde(default = "default_reminders")]
    pub reminder_defaults: Vec<u32>,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_defaults: default_reminders(),
        }
    }
}

/// Study-specific preferences consumed by the course analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPreferences {
    /// Preferred study weekdays, 0=Sun ... 6=Sat.
    pub preferred_days: Vec<u8>,
    /// Hard cap on study hours per day.
    pub max_daily_hours: u32,
    pub preferred_times: Vec<TimeOfDay>,
}

/// Process-wide user preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// First day of the week for view layout, 0=Sun ... 6=Sat.
    #[serde(default = "default_start_of_week")]
    pub start_of_week: u8,
    #[serde(default)]
    pub working_hours: WorkingHours,
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study: Option<StudyPreferences>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            start_of_week: default_start_of_week(),
            working_hours: WorkingHours::default(),
            notifications: NotificationPrefs::default(),
            study: None,
        }
    }
}

fn default_work_start() -> u32 {
    9
}

fn default_work_end() -> u32 {
    17
}

fn default_weekdays() -> Vec<u8> {
    vec![1, 2, 3, 4, 5] // Mon-Fri
}

fn default_reminders() -> Vec<u32> {
    vec![15, 30, 60, 1440]
}

fn default_start_of_week() -> u8 {
    1 // Monday
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.start_of_week, 1);
        assert_eq!(prefs.working_hours.start, 9);
        assert_eq!(prefs.working_hours.end, 17);
        assert_eq!(prefs.working_hours.days_of_week, vec![1, 2, 3, 4, 5]);
        assert!(prefs.notifications.enabled);
        assert!(prefs.study.is_none());
    }

    #[test]
    fn test_time_of_day_labels() {
        assert_eq!(TimeOfDay::Morning.to_string(), "mañana");
        assert_eq!(TimeOfDay::Afternoon.to_string(), "tarde");
        assert_eq!(TimeOfDay::Evening.to_string(), "noche");
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let prefs: UserPreferences = toml::from_str("start_of_week = 0").unwrap();
        assert_eq!(prefs.start_of_week, 0);
        assert_eq!(prefs.working_hours.start, 9);
        assert_eq!(prefs.notifications.reminder_defaults, vec![15, 30, 60, 1440]);
    }
}
