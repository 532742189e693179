use chrono::Utc;
use clap::Subcommand;
use horario_core::{analyze_course_schedule, config, generate_study_milestones};

use crate::common::{parse_instant, EventSource};

#[derive(Subcommand)]
pub enum CourseAction {
    /// Build a weekly study plan for a course
    Plan {
        /// Total course hours
        #[arg(long)]
        hours: f64,
        /// Course start (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Course end (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        end: String,
        #[command(flatten)]
        source: EventSource,
        /// Print raw JSON instead of the reason text
        #[arg(long)]
        json: bool,
    },
    /// Print weekly milestone events for a plan as JSON
    Milestones {
        /// Total course hours
        #[arg(long)]
        hours: f64,
        /// Weekly study hours
        #[arg(long)]
        weekly: u32,
        /// Course start (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        start: String,
    },
}

pub fn run(action: CourseAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CourseAction::Plan {
            hours,
            start,
            end,
            source,
            json,
        } => {
            let prefs = config::load_preferences()?;
            let events = source.load()?;
            let recommendation = analyze_course_schedule(
                hours,
                parse_instant(&start)?,
                parse_instant(&end)?,
                &prefs,
                &events,
                Utc::now(),
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&recommendation)?);
            } else {
                println!("{}", recommendation.reason);
            }
        }
        CourseAction::Milestones {
            hours,
            weekly,
            start,
        } => {
            let milestones = generate_study_milestones(parse_instant(&start)?, hours, weekly)?;
            println!("{}", serde_json::to_string_pretty(&milestones)?);
        }
    }
    Ok(())
}
