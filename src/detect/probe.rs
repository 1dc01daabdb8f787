use std::path::PathBuf;
use std::process::Stdio;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::{OpenError, Result};
use crate::opener::augmented_path;

/// One detection candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Run `program args` and require stdout to start with `expect`
    Command {
        /// Command name looked up on `PATH`
        program: String,
        /// Whitespace-separated arguments, e.g. `-h`
        args: String,
        /// Required stdout prefix, usually the editor's display name
        expect: String,
    },
    /// Require a file to exist
    Path(PathBuf),
}

impl Probe {
    /// The value a successful probe resolves to: the command or the path.
    #[must_use]
    pub fn target(&self) -> String {
        match self {
            Self::Command { program, .. } => program.clone(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

/// Runs probes against the operating system.
pub trait Prober: Send + Sync {
    /// Run `probe`, resolving to [`Probe::target`] on success.
    fn probe<'a>(&'a self, probe: &'a Probe) -> BoxFuture<'a, Result<String>>;
}

/// [`Prober`] that spawns real processes and checks the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProber;

impl Prober for SystemProber {
    fn probe<'a>(&'a self, probe: &'a Probe) -> BoxFuture<'a, Result<String>> {
        async move {
            let outcome = match probe {
                Probe::Command {
                    program,
                    args,
                    expect,
                } => probe_command(program, args, expect).await,
                Probe::Path(path) => probe_path(path).await,
            };
            debug!(?probe, ok = outcome.is_ok(), "probe finished");
            outcome
        }
        .boxed()
    }
}

async fn probe_command(program: &str, args: &str, expect: &str) -> Result<String> {
    let command = format!("{program} {args}");
    if args.trim().is_empty() {
        return Err(OpenError::NoProbeArgs(program.to_string()));
    }
    let resolved = match which::which_in(program, Some(augmented_path()), ".") {
        Ok(path) => path,
        Err(e) => {
            return Err(OpenError::Spawn {
                command,
                message: e.to_string(),
            });
        }
    };

    let output = Command::new(&resolved)
        .args(args.split_whitespace())
        .env("PATH", augmented_path())
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|e| OpenError::spawn(command.clone(), &e))?;

    if !output.status.success() {
        return Err(OpenError::Exited {
            command,
            status: output.status.to_string(),
        });
    }
    if !output.stdout.starts_with(expect.as_bytes()) {
        return Err(OpenError::UnexpectedOutput {
            command,
            expected: expect.to_string(),
        });
    }
    Ok(program.to_string())
}

async fn probe_path(path: &std::path::Path) -> Result<String> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(path.display().to_string()),
        _ => Err(OpenError::PathMissing(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_path_probe_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("subl");
        std::fs::write(&file, "").unwrap();

        let got = SystemProber.probe(&Probe::Path(file.clone())).await.unwrap();
        assert_eq!(got, file.display().to_string());
    }

    #[tokio::test]
    async fn test_path_probe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing");

        let got = SystemProber.probe(&Probe::Path(file.clone())).await;
        assert_eq!(got, Err(OpenError::PathMissing(file)));
    }

    #[tokio::test]
    async fn test_command_probe_without_args() {
        let probe = Probe::Command {
            program: "atom".into(),
            args: String::new(),
            expect: "Atom Editor".into(),
        };
        let got = SystemProber.probe(&probe).await;
        assert_eq!(got, Err(OpenError::NoProbeArgs("atom".into())));
    }

    #[tokio::test]
    async fn test_command_probe_unknown_program() {
        let probe = Probe::Command {
            program: "definitely-not-an-editor-3f9a".into(),
            args: "-h".into(),
            expect: "Nope".into(),
        };
        let got = SystemProber.probe(&probe).await;
        assert!(matches!(got, Err(OpenError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_probe_checks_output_prefix() {
        let matching = Probe::Command {
            program: "echo".into(),
            args: "Sublime Text build 4169".into(),
            expect: "Sublime Text".into(),
        };
        assert_eq!(SystemProber.probe(&matching).await.unwrap(), "echo");

        let other = Probe::Command {
            program: "echo".into(),
            args: "usage: subl".into(),
            expect: "Sublime Text".into(),
        };
        assert!(matches!(
            SystemProber.probe(&other).await,
            Err(OpenError::UnexpectedOutput { .. })
        ));
    }
}
