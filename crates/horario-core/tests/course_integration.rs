//! Integration tests for the course planning workflow: preferences file ->
//! analyzer -> milestone events in the store.

use chrono::{DateTime, Duration, TimeZone, Utc};
use horario_core::{
    analyze_course_schedule, config, generate_study_milestones, has_overlap, Difficulty, Event,
    EventStore, StudyPreferences, TimeOfDay, UserPreferences,
};

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn test_course_plan_from_saved_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let prefs = UserPreferences {
        study: Some(StudyPreferences {
            preferred_days: vec![1, 3, 5],
            max_daily_hours: 2,
            preferred_times: vec![TimeOfDay::Afternoon, TimeOfDay::Evening],
        }),
        ..UserPreferences::default()
    };
    config::save_preferences_to(&prefs, &path).unwrap();
    let loaded = config::load_preferences_from(&path).unwrap();

    // 30 hours over 6 weeks -> 5 weekly -> ceil(5/2) = 3 days: all three
    // preferred days, in preference order with an empty calendar.
    let rec = analyze_course_schedule(
        30.0,
        date(2024, 1, 1),
        date(2024, 2, 12),
        &loaded,
        &[],
        date(2024, 3, 4),
    )
    .unwrap();

    assert_eq!(rec.weekly_hours, 5);
    assert_eq!(rec.recommended_days, vec!["lunes", "miércoles", "viernes"]);
    assert_eq!(
        rec.recommended_times,
        vec![TimeOfDay::Afternoon, TimeOfDay::Evening]
    );
    assert!(rec.reason.contains("tarde o noche"));
}

#[test]
fn test_milestones_populate_the_store() {
    let mut store = EventStore::new();
    let course_start = date(2024, 1, 8);

    let course = Event::new_course(
        "Rust avanzado",
        course_start,
        course_start + Duration::hours(2),
        40.0,
        Difficulty::Advanced,
    );
    store.add(course);

    let rec = analyze_course_schedule(
        40.0,
        course_start,
        course_start + Duration::weeks(9),
        &UserPreferences::default(),
        store.events(),
        date(2024, 3, 4),
    )
    .unwrap();

    for milestone in generate_study_milestones(course_start, 40.0, rec.weekly_hours).unwrap() {
        store.add(milestone);
    }

    // One course event plus ceil(40/5) = 8 milestones.
    assert_eq!(store.len(), 9);
    assert!(store.get("milestone-1").is_some());
    assert!(store.get("milestone-8").is_some());
    assert!(store.get("milestone-9").is_none());

    // Milestones tile the study period back to back.
    let m3 = store.get("milestone-3").unwrap();
    let m4 = store.get("milestone-4").unwrap();
    assert_eq!(m3.end, m4.start);

    // Week-long milestones blanket the calendar, so any slot inside the
    // study period now reads as busy.
    let slot = course_start + Duration::weeks(2) + Duration::hours(10);
    assert!(has_overlap(store.events(), slot, slot + Duration::hours(1)));
}

#[test]
fn test_existing_load_reorders_study_days() {
    // Pile five hours onto Wednesday; it should drop behind Mon/Tue/Thu.
    let wednesday = Utc.with_ymd_and_hms(2024, 3, 6, 9, 0, 0).unwrap();
    let events = vec![
        Event::new("UI Design Workshop", wednesday, wednesday + Duration::hours(3)),
        Event::new("Budget Planning", wednesday + Duration::hours(4), wednesday + Duration::hours(6)),
    ];

    let rec = analyze_course_schedule(
        40.0,
        date(2024, 1, 1),
        date(2024, 3, 1),
        &UserPreferences::default(),
        &events,
        date(2024, 3, 4),
    )
    .unwrap();

    assert_eq!(rec.recommended_days, vec!["lunes", "martes", "jueves"]);
}
