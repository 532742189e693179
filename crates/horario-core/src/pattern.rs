//! Time-pattern analysis for productivity recommendations.
//!
//! Derives "when should I schedule focused work" suggestions from the
//! distribution of existing events across weekdays and hours, weighted by a
//! fixed table of reference productivity blocks. The analyzer is a pure
//! projection: it never touches the store and recomputes from scratch on
//! every call.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A reference productivity block: static calibration data standing in for
/// a learned model of when the user does their best work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlock {
    pub date: DateTime<Utc>,
    pub start_hour: u32,
    pub end_hour: u32,
    /// 0-10 scale
    pub productivity: u32,
    pub focus: u32,
    pub energy: u32,
}

/// A heuristically derived suggestion for a focused time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecommendation {
    pub date: DateTime<Utc>,
    pub start_hour: u32,
    pub end_hour: u32,
    /// 0.0 to 1.0
    pub confidence: f64,
    pub reason: String,
    /// Set when the slot was suggested for a specific course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

/// The built-in reference blocks: two for today (09-11 and 15-17) and one
/// for yesterday (10-12). Only blocks with productivity above 7 mark hours
/// as productive.
fn reference_blocks(today: DateTime<Utc>) -> Vec<TimeBlock> {
    vec![
        TimeBlock {
            date: today,
            start_hour: 9,
            end_hour: 11,
            productivity: 9,
            focus: 8,
            energy: 9,
        },
        TimeBlock {
            date: today,
            start_hour: 15,
            end_hour: 17,
            productivity: 7,
            focus: 8,
            energy: 6,
        },
        TimeBlock {
            date: today - Duration::days(1),
            start_hour: 10,
            end_hour: 12,
            productivity: 8,
            focus: 9,
            energy: 8,
        },
    ]
}

/// First calendar day at or after `from` whose weekday index (0=Sun ...
/// 6=Sat) equals `weekday`. Keeps the time-of-day of `from`. Indices are
/// reduced modulo 7, so the scan always terminates within a week.
pub fn next_occurrence(from: DateTime<Utc>, weekday: u32) -> DateTime<Utc> {
    let weekday = weekday % 7;
    let mut date = from;
    while date.weekday().num_days_from_sunday() != weekday {
        date += Duration::days(1);
    }
    date
}

/// Analyze event timing patterns and produce one or two slot
/// recommendations.
///
/// The first recommendation targets the busiest weekday and the first hour
/// window whose productive ratio exceeds 0.7 (default 09:00-11:00 when no
/// hour qualifies); it is suppressed when an existing event already sits in
/// that window on the target date. The second recommendation is always
/// emitted: two weekdays later, 14:00-16:00, lower confidence, and no
/// conflict check. The asymmetry between the two is load-bearing for
/// downstream consumers; do not even it out.
///
/// `today` anchors the weekday projection; pass `Utc::now()` outside tests.
pub fn analyze_time_patterns(events: &[Event], today: DateTime<Utc>) -> Vec<TimeRecommendation> {
    let blocks = reference_blocks(today);

    let mut day_counts = [0u32; 7];
    let mut hour_counts = [0u32; 24];
    let mut hour_productive = [0u32; 24];

    for event in events {
        let day = event.start.weekday().num_days_from_sunday() as usize;
        let hour = event.start.hour();

        day_counts[day] += 1;
        hour_counts[hour as usize] += 1;

        let productive = blocks
            .iter()
            .any(|b| hour >= b.start_hour && hour < b.end_hour && b.productivity > 7);
        if productive {
            hour_productive[hour as usize] += 1;
        }
    }

    // Busiest weekday; ties resolve to the lowest index.
    let mut best_day = 0u32;
    for (day, &count) in day_counts.iter().enumerate() {
        if count > day_counts[best_day as usize] {
            best_day = day as u32;
        }
    }

    // First hour whose productive ratio clears 0.7 opens the window.
    let mut window_start = 9u32;
    let mut window_end = 11u32;
    for hour in 0..24u32 {
        let total = hour_counts[hour as usize];
        if total > 0 && f64::from(hour_productive[hour as usize]) / f64::from(total) > 0.7 {
            window_start = hour;
            window_end = (hour + 2).min(23);
            break;
        }
    }

    let mut recommendations = Vec::new();

    let productive_date = next_occurrence(today, best_day);
    let occupied = events.iter().any(|event| {
        event.start.date_naive() == productive_date.date_naive()
            && event.start.hour() >= window_start
            && event.start.hour() < window_end
    });

    if !occupied {
        recommendations.push(TimeRecommendation {
            date: productive_date,
            start_hour: window_start,
            end_hour: window_end,
            confidence: 0.85,
            reason: format!(
                "You're most productive on {}s between {}:00 and {}:00",
                productive_date.format("%A"),
                window_start,
                window_end
            ),
            course_id: None,
        });
    }

    let alternative_day = (best_day + 2) % 7;
    recommendations.push(TimeRecommendation {
        date: next_occurrence(today, alternative_day),
        start_hour: 14,
        end_hour: 16,
        confidence: 0.7,
        reason: "Based on your focus patterns, this time slot may be good for deep work"
            .to_string(),
        course_id: None,
    });

    recommendations
}
