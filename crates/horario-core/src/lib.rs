//! # Horario Core Library
//!
//! Core business logic for Horario, a study-calendar with heuristic slot
//! recommendations. The CLI binary is a thin presentation layer over this
//! library; any GUI would sit on the same surface.
//!
//! ## Architecture
//!
//! - **EventStore**: in-memory ordered event list, the single owner of all
//!   events (add / update-by-id / delete-by-id / list)
//! - **Conflict detection**: pure interval-overlap checks plus fixed-order
//!   alternative-slot suggestions
//! - **Analyzers**: stateless pure functions that recompute from the full
//!   event list on every call — time-pattern analysis for productivity
//!   slots, course-schedule analysis for spreading study hours
//! - **Config**: TOML-backed user preferences; events are never persisted
//!
//! ## Key Components
//!
//! - [`EventStore`]: event ownership and mutation
//! - [`analyze_time_patterns`]: productivity slot recommendations
//! - [`analyze_course_schedule`]: weekly study plan for a course
//! - [`detect_conflicts`]: alternative starts for a colliding event

pub mod config;
pub mod conflict;
pub mod course;
pub mod error;
pub mod event;
pub mod pattern;
pub mod prefs;
pub mod seed;
pub mod store;

pub use conflict::{detect_conflicts, has_overlap};
pub use course::{analyze_course_schedule, generate_study_milestones, CourseRecommendation};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use event::{Difficulty, Event, EventKind, Frequency, RecurrencePattern};
pub use pattern::{analyze_time_patterns, next_occurrence, TimeBlock, TimeRecommendation};
pub use prefs::{NotificationPrefs, StudyPreferences, TimeOfDay, UserPreferences, WorkingHours};
pub use seed::generate_mock_events;
pub use store::EventStore;
