//! Shared helpers for CLI commands: event-list loading and date parsing.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use horario_core::{generate_mock_events, Event};

/// Where a command gets its event list from: a JSON file, or the seed
/// generator when no file is given (there is no durable event store).
#[derive(Args, Debug)]
pub struct EventSource {
    /// JSON file with an array of events
    #[arg(long, value_name = "FILE")]
    pub events: Option<PathBuf>,
    /// Number of seeded events when no file is given
    #[arg(long, default_value_t = 20)]
    pub count: usize,
    /// Seed for the generated event list
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl EventSource {
    pub fn load(&self) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
        match &self.events {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            None => Ok(generate_mock_events(self.count, self.seed, Utc::now())),
        }
    }
}

/// Parse an instant from RFC 3339 ("2024-03-04T09:00:00Z") or a bare date
/// ("2024-03-04", taken as midnight UTC).
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("cannot parse '{value}' as a date or RFC 3339 timestamp"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("cannot build midnight for '{value}'"))?;
    Ok(midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instant_rfc3339() {
        let dt = parse_instant("2024-03-04T09:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-04T09:30:00+00:00");
    }

    #[test]
    fn test_parse_instant_bare_date() {
        let dt = parse_instant("2024-03-04").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-04T00:00:00+00:00");
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(parse_instant("not-a-date").is_err());
    }
}
