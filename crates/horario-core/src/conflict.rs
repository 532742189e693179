//! Overlap checking and alternative-slot suggestions.
//!
//! The overlap rule is a three-clause check with asymmetric boundary
//! behavior: a query starting exactly at an event's end does not conflict,
//! but a query ending exactly at an event's end does. Downstream
//! recommendation output depends on this, so the rule must not be
//! "cleaned up".

use chrono::{DateTime, Duration, Utc};

use crate::event::Event;

/// True iff the query interval [start, end) intersects any stored event
/// under the rule:
/// - query start inside [event start, event end), or
/// - query end inside (event start, event end], or
/// - query fully contains the event.
pub fn has_overlap(events: &[Event], start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    events.iter().any(|event| {
        (start >= event.start && start < event.end)
            || (end > event.start && end <= event.end)
            || (start <= event.start && end >= event.end)
    })
}

/// Suggest alternative start times for a candidate event that collides with
/// the existing schedule.
///
/// Returns an empty list when the candidate does not conflict with anything.
/// Otherwise returns up to three starts, in fixed order:
/// 1. same day at 09:00
/// 2. same day at 14:00
/// 3. next day at the candidate's own time
///
/// Each slot keeps the candidate's duration and is only included when it is
/// free per [`has_overlap`].
pub fn detect_conflicts(events: &[Event], candidate: &Event) -> Vec<DateTime<Utc>> {
    let conflicts = has_overlap(events, candidate.start, candidate.end);
    if !conflicts {
        return Vec::new();
    }

    let duration = candidate.end - candidate.start;
    let base = candidate.start.date_naive();

    let mut suggestions = Vec::new();

    let morning = base
        .and_hms_opt(9, 0, 0)
        .map(|dt| dt.and_utc())
        .filter(|&slot| !has_overlap(events, slot, slot + duration));
    if let Some(slot) = morning {
        suggestions.push(slot);
    }

    let afternoon = base
        .and_hms_opt(14, 0, 0)
        .map(|dt| dt.and_utc())
        .filter(|&slot| !has_overlap(events, slot, slot + duration));
    if let Some(slot) = afternoon {
        suggestions.push(slot);
    }

    let next_day = candidate.start + Duration::days(1);
    if !has_overlap(events, next_day, next_day + duration) {
        suggestions.push(next_day);
    }

    suggestions
}
