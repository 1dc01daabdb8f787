//! Binding an editor choice to a launch operation.

mod configure;
mod shell;

pub use configure::{configure, Environment, Options};
pub use shell::{augmented_path, run_shell_command, Launcher, ShellLauncher};

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::detect::Prober;
use crate::editors::Editor;
use crate::error::{OpenError, Result};
use crate::location::FileLocation;
use crate::template::{command_line, Head, Settings};

/// What an [`Opener`] launches.
pub enum Target<'r> {
    /// A user command template with its argument layout
    Command {
        /// Command template, used verbatim
        cmd: String,
        /// Argument layout
        settings: Settings,
    },
    /// A registry editor, detected on first use
    Editor(&'r Editor),
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command { cmd, settings } => f
                .debug_struct("Command")
                .field("cmd", cmd)
                .field("pattern", &settings.pattern)
                .finish(),
            Self::Editor(editor) => f.debug_tuple("Editor").field(&editor.kind()).finish(),
        }
    }
}

/// A configured editor, ready to open file specs.
pub struct Opener<'r> {
    target: Target<'r>,
    line_offset: u32,
    column_offset: u32,
    project_path: String,
    prober: Arc<dyn Prober>,
    launcher: Arc<dyn Launcher>,
}

impl fmt::Debug for Opener<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opener")
            .field("target", &self.target)
            .field("line_offset", &self.line_offset)
            .field("column_offset", &self.column_offset)
            .field("project_path", &self.project_path)
            .finish_non_exhaustive()
    }
}

impl<'r> Opener<'r> {
    /// What will be launched.
    #[must_use]
    pub const fn target(&self) -> &Target<'r> {
        &self.target
    }

    /// Value substituted for `{projectPath}`.
    #[must_use]
    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    /// Use `prober` for editor detection instead of the real system.
    #[must_use]
    pub fn with_prober(mut self, prober: Arc<dyn Prober>) -> Self {
        self.prober = prober;
        self
    }

    /// Use `launcher` to run the final command instead of the shell.
    #[must_use]
    pub fn with_launcher(mut self, launcher: Arc<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    /// Override `{projectPath}`.
    #[must_use]
    pub fn with_project_path(mut self, project_path: impl Into<String>) -> Self {
        self.project_path = project_path.into();
        self
    }

    /// Format the shell command for `spec` (`path[:line[:column]]`) without running it.
    ///
    /// # Errors
    ///
    /// [`OpenError::FileNotSpecified`] for an empty spec, or the detection
    /// error of a registry editor.
    pub async fn command_line(&self, spec: &str) -> Result<String> {
        if spec.trim().is_empty() {
            return Err(OpenError::FileNotSpecified);
        }
        let location = FileLocation::parse(spec).shifted(self.line_offset, self.column_offset);

        let command = match &self.target {
            Target::Command { cmd, settings } => {
                command_line(Head::Template(cmd), settings, &location, &self.project_path)
            }
            Target::Editor(editor) => {
                let launcher = editor.detect(self.prober.as_ref()).await?;
                command_line(
                    Head::Executable(&launcher),
                    editor.settings(),
                    &location,
                    &self.project_path,
                )
            }
        };
        debug!(%location, command = %command, "formatted");
        Ok(command)
    }

    /// Open `spec` and wait for the launching command to exit.
    ///
    /// Returns the command line that was run.
    ///
    /// # Errors
    ///
    /// Everything [`Opener::command_line`] reports, plus launch failures.
    pub async fn open(&self, spec: &str) -> Result<String> {
        let command = self.command_line(spec).await?;
        self.launcher.launch(&command).await?;
        Ok(command)
    }
}
