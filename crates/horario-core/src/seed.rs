//! Seed data generator.
//!
//! Stands in for a real persistence layer at startup: produces a plausible
//! spread of calendar events around today so the analyzers have something
//! to chew on. Deterministic for a given seed (Pcg64), which keeps demo
//! output and tests stable.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::event::Event;

const TITLES: &[&str] = &[
    "Team Meeting",
    "Project Review",
    "Client Call",
    "Lunch Break",
    "Doctor Appointment",
    "Gym Session",
    "Coffee with Alex",
    "Presentation Prep",
    "Weekly Standup",
    "Dentist Appointment",
    "Budget Planning",
    "Code Review",
    "UI Design Workshop",
    "Marketing Strategy",
    "Team Building",
];

const LOCATIONS: &[&str] = &[
    "Meeting Room A",
    "Office",
    "Zoom Call",
    "Downtown Cafe",
    "Medical Center",
    "Home Office",
    "Conference Room",
    "Google Meet",
];

const COLORS: &[&str] = &[
    "#3B82F6", "#10B981", "#F97316", "#8B5CF6", "#EF4444", "#F59E0B",
];

/// Generate `count` random events within ±15 days of `today`, starting on
/// the hour between 08:00 and 18:00 and lasting one or two hours.
pub fn generate_mock_events(count: usize, seed: u64, today: DateTime<Utc>) -> Vec<Event> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let base = today
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(today);

    (0..count)
        .map(|index| {
            let day_offset = rng.gen_range(-15..15i64);
            let start_hour = rng.gen_range(8..18i64);
            let duration = if rng.gen_bool(0.3) { 2 } else { 1 };

            let start = base + Duration::days(day_offset) + Duration::hours(start_hour);
            let mut event = Event::new(
                TITLES[rng.gen_range(0..TITLES.len())],
                start,
                start + Duration::hours(duration),
            )
            .with_id(format!("event-{index}"))
            .with_color(COLORS[rng.gen_range(0..COLORS.len())]);

            if rng.gen_bool(0.7) {
                event.location = Some(LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_string());
            }

            event
        })
        .collect()
}
