use clap::Subcommand;
use horario_core::{detect_conflicts, Event, EventStore};

use crate::common::{parse_instant, EventSource};

#[derive(Subcommand)]
pub enum EventAction {
    /// List events as pretty JSON
    List {
        #[command(flatten)]
        source: EventSource,
    },
    /// Check a candidate slot for conflicts and print alternative starts
    Check {
        /// Candidate title (cosmetic, shown in output)
        #[arg(long, default_value = "New event")]
        title: String,
        /// Candidate start (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Candidate end (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        end: String,
        #[command(flatten)]
        source: EventSource,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EventAction::List { source } => {
            let store = EventStore::with_events(source.load()?);
            println!("{}", serde_json::to_string_pretty(store.events())?);
        }
        EventAction::Check {
            title,
            start,
            end,
            source,
        } => {
            let start = parse_instant(&start)?;
            let end = parse_instant(&end)?;
            if end <= start {
                return Err(format!("end ({end}) must be after start ({start})").into());
            }

            let store = EventStore::with_events(source.load()?);
            let candidate = Event::new(title, start, end);
            let suggestions = detect_conflicts(store.events(), &candidate);

            if suggestions.is_empty() {
                println!("'{}' fits: no conflicts found", candidate.title);
            } else {
                println!(
                    "'{}' conflicts with the existing schedule; free alternatives:",
                    candidate.title
                );
                for slot in suggestions {
                    println!("  {}", slot.to_rfc3339());
                }
            }
        }
    }
    Ok(())
}
