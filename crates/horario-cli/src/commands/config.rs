use clap::Subcommand;
use horario_core::config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current preferences as TOML
    Show,
    /// Print the preferences file path
    Path,
    /// Write the current (or default) preferences back to disk
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let prefs = config::load_preferences()?;
            print!("{}", toml::to_string_pretty(&prefs)?);
        }
        ConfigAction::Path => {
            println!("{}", config::preferences_path()?.display());
        }
        ConfigAction::Init => {
            let prefs = config::load_preferences()?;
            config::save_preferences(&prefs)?;
            println!("wrote {}", config::preferences_path()?.display());
        }
    }
    Ok(())
}
