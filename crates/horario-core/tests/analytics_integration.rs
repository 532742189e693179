//! Integration tests for the store + analyzer workflow.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use horario_core::{
    analyze_time_patterns, detect_conflicts, generate_mock_events, has_overlap, Event, EventStore,
};

// 2024-03-04 is a Monday.
fn today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap()
}

fn event_on(day: u32, hour: u32, title: &str) -> Event {
    let start = Utc.with_ymd_and_hms(2024, 2, day, hour, 0, 0).unwrap();
    Event::new(title, start, start + Duration::hours(1))
}

#[test]
fn test_mutation_then_reanalysis_workflow() {
    // Two past Tuesdays dominate the weekday histogram.
    let mut store = EventStore::with_events(vec![
        event_on(6, 13, "Weekly Standup"),
        event_on(13, 13, "Weekly Standup"),
    ]);

    let recs = analyze_time_patterns(store.events(), today());
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].date.weekday().num_days_from_sunday(), 2);
    assert_eq!(recs[0].confidence, 0.85);
    assert_eq!(recs[1].confidence, 0.7);

    // Outvote Tuesday with three Thursday events and recompute from scratch.
    store.add(event_on(1, 13, "Review"));
    store.add(event_on(8, 13, "Review"));
    store.add(event_on(15, 13, "Review"));

    let recs = analyze_time_patterns(store.events(), today());
    assert_eq!(recs[0].date.weekday().num_days_from_sunday(), 4);

    // Removing them restores the previous analysis (pure projection).
    let ids: Vec<String> = store
        .events()
        .iter()
        .filter(|e| e.title == "Review")
        .map(|e| e.id.clone())
        .collect();
    for id in ids {
        assert!(store.remove(&id));
    }

    let recs = analyze_time_patterns(store.events(), today());
    assert_eq!(recs[0].date.weekday().num_days_from_sunday(), 2);
}

#[test]
fn test_conflict_suggestions_against_store() {
    let mut store = EventStore::new();
    let start = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
    store.add(Event::new("Client Call", start, start + Duration::hours(1)));

    // Candidate collides head-on; all three fallback slots are free.
    let candidate = Event::new(
        "Planning",
        start + Duration::minutes(30),
        start + Duration::minutes(90),
    );
    let suggestions = detect_conflicts(store.events(), &candidate);

    assert_eq!(suggestions.len(), 3);
    let duration = candidate.end - candidate.start;
    for slot in &suggestions {
        assert!(!has_overlap(store.events(), *slot, *slot + duration));
    }

    // Booking the morning slot knocks it out of the next run.
    let morning = suggestions[0];
    store.add(Event::new("Gym Session", morning, morning + duration));
    let suggestions = detect_conflicts(store.events(), &candidate);
    assert_eq!(suggestions.len(), 2);
    assert!(!suggestions.contains(&morning));
}

#[test]
fn test_seeded_calendar_always_yields_recommendations() {
    // Whatever the seed produces, analysis must return one or two entries
    // with the fixed confidence levels.
    for seed in 0..10 {
        let events = generate_mock_events(20, seed, today());
        let recs = analyze_time_patterns(&events, today());

        assert!(!recs.is_empty() && recs.len() <= 2);
        assert_eq!(recs.last().unwrap().confidence, 0.7);
        if recs.len() == 2 {
            assert_eq!(recs[0].confidence, 0.85);
        }
        for rec in &recs {
            assert!(rec.start_hour < 24 && rec.end_hour < 24);
            assert!(rec.date >= today());
        }
    }
}
