use chrono::Utc;
use clap::Args;
use horario_core::analyze_time_patterns;

use crate::common::EventSource;

#[derive(Args)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub source: EventSource,
    /// Print raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let events = args.source.load()?;
    let recommendations = analyze_time_patterns(&events, Utc::now());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    for rec in &recommendations {
        println!(
            "{} {:02}:00-{:02}:00  (confidence {:.0}%)",
            rec.date.format("%Y-%m-%d %A"),
            rec.start_hour,
            rec.end_hour,
            rec.confidence * 100.0
        );
        println!("    {}", rec.reason);
    }
    Ok(())
}
