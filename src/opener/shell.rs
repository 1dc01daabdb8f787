use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::process::Command;
use tracing::info;

use crate::error::{OpenError, Result};

/// Directories GUI-launched processes often miss from `PATH`.
const EXTRA_PATHS: [&str; 3] = ["/usr/local/bin", "/opt/homebrew/bin", "/opt/homebrew/sbin"];

/// `PATH` with the Homebrew and `/usr/local` bin directories put in front.
#[must_use]
pub fn augmented_path() -> OsString {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut parts: Vec<PathBuf> = if cfg!(windows) {
        Vec::new()
    } else {
        EXTRA_PATHS.iter().map(PathBuf::from).collect()
    };
    for p in std::env::split_paths(&current) {
        if !p.as_os_str().is_empty() && !parts.contains(&p) {
            parts.push(p);
        }
    }
    std::env::join_paths(parts).unwrap_or(current)
}

/// Launches a finished command line.
pub trait Launcher: Send + Sync {
    /// Run `command` to completion.
    fn launch<'a>(&'a self, command: &'a str) -> BoxFuture<'a, Result<()>>;
}

/// [`Launcher`] that hands the command line to the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    fn launch<'a>(&'a self, command: &'a str) -> BoxFuture<'a, Result<()>> {
        run_shell_command(command).boxed()
    }
}

// `/S` makes cmd.exe strip exactly the outer quotes. The line is passed raw
// because the argument encoder's `\"` is not an escape to cmd.exe.
#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/S", "/C"]).raw_arg(format!("\"{command}\""));
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

/// Run `command` through the shell and wait for it to exit.
///
/// # Errors
///
/// Fails when the command is blank, the shell cannot start, or it exits
/// unsuccessfully.
pub async fn run_shell_command(command: &str) -> Result<()> {
    if command.trim().is_empty() {
        return Err(OpenError::EmptyCommand);
    }
    info!(command, "launching editor");
    let status = shell(command)
        .env("PATH", augmented_path())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| OpenError::spawn(command, &e))?;
    if status.success() {
        Ok(())
    } else {
        Err(OpenError::Exited {
            command: command.to_string(),
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_augmented_path_keeps_existing_entries() {
        let path = augmented_path();
        let entries: Vec<PathBuf> = std::env::split_paths(&path).collect();
        if let Some(current) = std::env::var_os("PATH") {
            for p in std::env::split_paths(&current).filter(|p| !p.as_os_str().is_empty()) {
                assert!(entries.contains(&p), "{}", p.display());
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_augmented_path_prepends_homebrew() {
        let path = augmented_path();
        let first = std::env::split_paths(&path).next().unwrap();
        assert_eq!(first, PathBuf::from("/usr/local/bin"));
    }

    #[tokio::test]
    async fn test_empty_command() {
        assert_eq!(run_shell_command("  ").await, Err(OpenError::EmptyCommand));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command() {
        run_shell_command("true").await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_reports_exit() {
        let err = run_shell_command("exit 3").await.unwrap_err();
        assert!(matches!(err, OpenError::Exited { ref command, .. } if command == "exit 3"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_quoted_executable_in_directory_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("My Editor");
        std::fs::create_dir(&bin).unwrap();
        let script = bin.join("edit.sh");
        let body = "#!/bin/sh\n[ \"$1\" = \"a b.rs:1:1\" ] || exit 9\nexit 4\n";
        std::fs::write(&script, body).unwrap();

        let command = format!("sh \"{}\" \"a b.rs:1:1\"", script.display());
        let err = run_shell_command(&command).await.unwrap_err();
        assert!(matches!(err, OpenError::Exited { ref status, .. } if status.contains('4')));
    }

    #[cfg(windows)]
    #[tokio::test]
    async fn test_quoted_executable_in_directory_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("My Editor");
        std::fs::create_dir(&bin).unwrap();
        let script = bin.join("edit.cmd");
        let body = "@if not \"%~3\"==\"a b.rs:1:1\" exit /b 9\r\n@exit /b 4\r\n";
        std::fs::write(&script, body).unwrap();

        let command = format!("\"{}\" -r -g \"a b.rs:1:1\"", script.display());
        let err = run_shell_command(&command).await.unwrap_err();
        assert!(matches!(err, OpenError::Exited { ref status, .. } if status.contains('4')));
    }
}
