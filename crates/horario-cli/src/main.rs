use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "horario-cli", version, about = "Horario CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Event list inspection and conflict checking
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Productivity slot recommendations
    Suggest {
        #[command(flatten)]
        args: commands::suggest::SuggestArgs,
    },
    /// Course study planning
    Course {
        #[command(subcommand)]
        action: commands::course::CourseAction,
    },
    /// Preferences management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Event { action } => commands::event::run(action),
        Commands::Suggest { args } => commands::suggest::run(args),
        Commands::Course { action } => commands::course::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
