use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::editors::EditorKind;

impl Config {
    /// `~/.config/open-in-editor/config.toml`
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("open-in-editor").join("config.toml"))
    }

    /// Load the user config, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed config files.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed config files.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to the user config path.
    ///
    /// # Errors
    ///
    /// Fails when the file or its directory cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails when the file or its directory cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails on unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "editor.name" => Ok(self.editor.name.clone().unwrap_or_default()),
            "editor.command" => Ok(self.editor.command.clone().unwrap_or_default()),
            "editor.pattern" => Ok(self.editor.pattern.clone().unwrap_or_default()),
            "offset.line" => Ok(self.offset.line.to_string()),
            "offset.column" => Ok(self.offset.column.to_string()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails on unknown keys, unknown editor names and non-numeric offsets.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let optional = || {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };
        match key {
            "editor.name" => {
                if !value.is_empty() && value.parse::<EditorKind>().is_err() {
                    anyhow::bail!("Wrong value for `editor` option: {value}");
                }
                self.editor.name = optional();
            }
            "editor.command" => self.editor.command = optional(),
            "editor.pattern" => self.editor.pattern = optional(),
            "offset.line" => {
                self.offset.line = value
                    .parse::<u32>()
                    .with_context(|| format!("Invalid line offset: {value}"))?;
            }
            "offset.column" => {
                self.offset.column = value
                    .parse::<u32>()
                    .with_context(|| format!("Invalid column offset: {value}"))?;
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
