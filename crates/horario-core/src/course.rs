//! Course schedule analysis.
//!
//! Distributes a course's total hours across weeks and days, preferring the
//! user's study days with the lightest existing load. Also generates weekly
//! milestone events for tracking progress against the plan.
//!
//! Unlike the rest of the crate, this analyzer validates its inputs: a
//! non-positive date span or hour count would otherwise divide by zero, so
//! it fails fast with a [`ValidationError`] instead of producing NaN-shaped
//! recommendations.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::event::Event;
use crate::pattern::next_occurrence;
use crate::prefs::{TimeOfDay, UserPreferences};

const SECONDS_PER_WEEK: f64 = 7.0 * 24.0 * 3600.0;

/// A weekly study plan for a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    /// Hours per week needed to finish within the course span.
    pub weekly_hours: u32,
    /// Localized weekday names, lightest existing load first.
    pub recommended_days: Vec<String>,
    pub recommended_times: Vec<TimeOfDay>,
    pub estimated_completion: DateTime<Utc>,
    pub reason: String,
}

/// Spanish weekday name, as used in recommendation text.
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "domingo",
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        _ => "diciembre",
    }
}

/// Completion dates render as "d de MMMM de yyyy".
fn format_date_es(date: DateTime<Utc>) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Plan how to spread `total_hours` of study between `start` and `end`.
///
/// Preferred study days default to Mon-Fri and the daily cap to 2 hours
/// when the user has no study preferences. Days are ranked by existing
/// event load (stable sort, ties keep preference order) and the lightest
/// `ceil(weekly / max_daily)` days are recommended. Weekday names are
/// projected from `today`, not from the course start; recommendation text
/// depends on this anchoring.
///
/// # Errors
///
/// Returns a validation error when `end <= start`, `total_hours` is not a
/// positive finite number, or the preferences carry a zero daily cap.
pub fn analyze_course_schedule(
    total_hours: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    prefs: &UserPreferences,
    events: &[Event],
    today: DateTime<Utc>,
) -> Result<CourseRecommendation> {
    if end <= start {
        return Err(ValidationError::InvalidTimeRange { start, end }.into());
    }
    if !total_hours.is_finite() || total_hours <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "total_hours".to_string(),
            message: format!("must be a positive number of hours, got {total_hours}"),
        }
        .into());
    }

    let total_weeks = ((end - start).num_seconds() as f64 / SECONDS_PER_WEEK).ceil() as u32;
    let weekly_hours = (total_hours / f64::from(total_weeks)).ceil() as u32;

    let (preferred_days, max_daily_hours, preferred_times) = match &prefs.study {
        Some(study) => (
            study.preferred_days.clone(),
            study.max_daily_hours,
            if study.preferred_times.is_empty() {
                vec![TimeOfDay::Morning]
            } else {
                study.preferred_times.clone()
            },
        ),
        None => (vec![1, 2, 3, 4, 5], 2, vec![TimeOfDay::Morning]),
    };
    if max_daily_hours == 0 {
        return Err(ValidationError::InvalidValue {
            field: "max_daily_hours".to_string(),
            message: "daily study cap must be at least 1 hour".to_string(),
        }
        .into());
    }
    if let Some(&bad) = preferred_days.iter().find(|&&d| d > 6) {
        return Err(ValidationError::InvalidValue {
            field: "preferred_days".to_string(),
            message: format!("weekday index must be 0-6, got {bad}"),
        }
        .into());
    }

    // Existing load per weekday, in hours.
    let mut day_load = [0.0f64; 7];
    for event in events {
        let day = event.start.weekday().num_days_from_sunday() as usize;
        day_load[day] += event.duration_hours();
    }

    let mut ranked_days = preferred_days;
    ranked_days.sort_by(|&a, &b| day_load[a as usize].total_cmp(&day_load[b as usize]));

    let day_count = weekly_hours.div_ceil(max_daily_hours) as usize;
    let recommended_days: Vec<String> = ranked_days
        .iter()
        .take(day_count)
        .map(|&day| {
            let date = next_occurrence(today, u32::from(day));
            weekday_name(date.weekday()).to_string()
        })
        .collect();

    let estimated_weeks = (total_hours / f64::from(weekly_hours)).ceil() as i64;
    let estimated_completion = start + Duration::weeks(estimated_weeks);

    let reason = format!(
        "Para completar el curso de {} horas en {} semanas, te recomendamos dedicar \
         {} horas por semana. Los mejores días para estudiar son {} durante la {}. \
         Con este ritmo, terminarías el curso el {}.",
        total_hours,
        total_weeks,
        weekly_hours,
        recommended_days.join(", "),
        preferred_times
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" o "),
        format_date_es(estimated_completion),
    );

    Ok(CourseRecommendation {
        weekly_hours,
        recommended_days,
        recommended_times: preferred_times,
        estimated_completion,
        reason,
    })
}

/// Generate one week-long milestone event per study week.
///
/// # Errors
///
/// Returns a validation error when `weekly_hours` is zero or `total_hours`
/// is not positive.
pub fn generate_study_milestones(
    start: DateTime<Utc>,
    total_hours: f64,
    weekly_hours: u32,
) -> Result<Vec<Event>> {
    if weekly_hours == 0 {
        return Err(ValidationError::InvalidValue {
            field: "weekly_hours".to_string(),
            message: "weekly hours must be at least 1".to_string(),
        }
        .into());
    }
    if !total_hours.is_finite() || total_hours <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "total_hours".to_string(),
            message: format!("must be a positive number of hours, got {total_hours}"),
        }
        .into());
    }

    let total_weeks = (total_hours / f64::from(weekly_hours)).ceil() as i64;
    let milestones = (1..=total_weeks)
        .map(|week| {
            let mut event = Event::new(
                format!("Milestone Semana {week}"),
                start + Duration::weeks(week - 1),
                start + Duration::weeks(week),
            )
            .with_id(format!("milestone-{week}"))
            .with_color("#10B981");
            event.description = Some(format!(
                "Objetivo: Completar {weekly_hours} horas de estudio"
            ));
            event
        })
        .collect();

    Ok(milestones)
}
