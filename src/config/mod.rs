//! User configuration file.

mod ops;

use serde::{Deserialize, Serialize};

use crate::opener::Options;

/// Persistent defaults for the CLI, stored as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which editor or command to use
    pub editor: EditorConfig,
    /// Numbering base of incoming file specs
    pub offset: OffsetConfig,
}

/// `[editor]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Registry identifier, e.g. "code"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw command template, e.g. "subl" or "code --wait"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Argument pattern for `command`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// `[offset]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetConfig {
    /// First line number
    pub line: u32,
    /// First column number
    pub column: u32,
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Config {
    /// Options equivalent to this config, before CLI flags are applied.
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            editor: self.editor.name.clone(),
            cmd: self.editor.command.clone(),
            line: Some(self.offset.line),
            column: Some(self.offset.column),
            pattern: self.editor.pattern.clone(),
            ..Options::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.offset.line, 1);
    }

    #[test]
    fn test_parse_partial_file() {
        let config: Config = toml::from_str(
            r#"
[editor]
command = "code --wait"

[offset]
line = 0
"#,
        )
        .unwrap();
        assert_eq!(config.editor.command.as_deref(), Some("code --wait"));
        assert_eq!(config.editor.name, None);
        assert_eq!(config.offset.line, 0);
        assert_eq!(config.offset.column, 1);
    }

    #[test]
    fn test_to_options() {
        let mut config = Config::default();
        config.editor.name = Some("sublime".into());
        let options = config.to_options();
        assert_eq!(options.editor.as_deref(), Some("sublime"));
        assert_eq!(options.cmd, None);
        assert_eq!(options.line, Some(1));
    }
}
