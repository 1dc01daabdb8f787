use anyhow::{bail, Result};
use clap::Subcommand;
use open_in_editor::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Set a configuration value (e.g. editor.command "code --wait"); an empty value unsets it
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let path = Config::path()?;
    match action {
        ConfigAction::Show => {
            let config = Config::load_from(&path)?;
            if !path.exists() {
                eprintln!("# {} does not exist, showing defaults", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists; pass --force to overwrite it", path.display());
            }
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set_value(&key, &value)?;
            config.save_to(&path)?;
            if value.is_empty() {
                println!("Unset {key}");
            } else {
                println!("Set {key} = {value}");
            }
        }
        ConfigAction::Get { key } => {
            let config = Config::load_from(&path)?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}
