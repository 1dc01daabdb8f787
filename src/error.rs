//! Error type shared by the library.

use std::path::PathBuf;

use thiserror::Error;

use crate::platform::Platform;

/// Errors reported while configuring, detecting or launching an editor.
///
/// The `Display` text is the message printed to the user. The type is
/// `Clone` so a memoized detection failure can be returned to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    /// Neither an editor nor a command was given or found in the environment
    #[error("Editor is not specified")]
    EditorNotSpecified,

    /// The `editor` option names an editor missing from the registry
    #[error("Wrong value for `editor` option: {0}")]
    UnknownEditor(String),

    /// Every detection candidate failed
    #[error("Not detected")]
    NotDetected,

    /// The editor only supports other platforms
    #[error("\"Open in {editor}\" is not implemented for your platform ({platform})")]
    UnsupportedPlatform {
        /// Display name of the editor
        editor: &'static str,
        /// Platform the process runs on
        platform: Platform,
    },

    /// `open` was called with an empty file spec
    #[error("File is not specified")]
    FileNotSpecified,

    /// A command probe has no arguments to run it with
    #[error("No args to check command: {0}")]
    NoProbeArgs(String),

    /// A path probe pointed at nothing
    #[error("Path does not exist: {}", .0.display())]
    PathMissing(PathBuf),

    /// A command probe ran but printed something other than the editor banner
    #[error("`{command}` output does not start with {expected:?}")]
    UnexpectedOutput {
        /// Probe command line
        command: String,
        /// Expected stdout prefix
        expected: String,
    },

    /// A child process could not be started
    #[error("Failed to spawn `{command}`: {message}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying OS error
        message: String,
    },

    /// A child process exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    Exited {
        /// Command line that was run
        command: String,
        /// Exit status as reported by the OS
        status: String,
    },

    /// The formatted command line was blank
    #[error("Empty command")]
    EmptyCommand,
}

impl OpenError {
    pub(crate) fn spawn(command: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T, E = OpenError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            OpenError::UnknownEditor("nano".into()).to_string(),
            "Wrong value for `editor` option: nano"
        );
        assert_eq!(OpenError::NotDetected.to_string(), "Not detected");
        assert_eq!(
            OpenError::PathMissing(PathBuf::from("/nope")).to_string(),
            "Path does not exist: /nope"
        );
        assert_eq!(
            OpenError::UnsupportedPlatform {
                editor: "Vim",
                platform: Platform::Linux,
            }
            .to_string(),
            "\"Open in Vim\" is not implemented for your platform (linux)"
        );
    }
}
