use clap::Subcommand;
use eyebreak_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a single config value
    Get {
        /// Dot-separated key, e.g. timer.work_secs
        key: String,
    },
    /// Set a config value and persist it
    Set {
        key: String,
        value: String,
    },
    /// Print the full configuration as JSON
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
