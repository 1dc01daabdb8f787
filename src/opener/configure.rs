use std::sync::Arc;

use tracing::debug;

use crate::detect::SystemProber;
use crate::editors::Registry;
use crate::error::{OpenError, Result};
use crate::template::Settings;

use super::{Opener, ShellLauncher, Target};

/// Caller-supplied options for [`configure`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Registry identifier, e.g. `code`
    pub editor: Option<String>,
    /// Raw command template, e.g. `subl` or `code --wait`
    pub cmd: Option<String>,
    /// First line number of incoming file specs; 1 when unset
    pub line: Option<u32>,
    /// First column number of incoming file specs; 1 when unset
    pub column: Option<u32>,
    /// Pattern for `cmd`
    pub pattern: Option<String>,
    /// Use the rendered pattern as the whole command
    pub pattern_only: Option<bool>,
    /// Quote filenames with `\"`
    pub escape_quotes: Option<bool>,
}

impl Options {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(pattern) = &self.pattern {
            settings.pattern.clone_from(pattern);
        }
        if let Some(pattern_only) = self.pattern_only {
            settings.pattern_only = pattern_only;
        }
        if let Some(escape_quotes) = self.escape_quotes {
            settings.escape_quotes = escape_quotes;
        }
        if self.line.is_some() {
            settings.line = self.line;
        }
        if self.column.is_some() {
            settings.column = self.column;
        }
    }
}

/// The environment variables [`configure`] reads. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `OPEN_FILE`: an editor identifier or a command
    pub open_file: Option<String>,
    /// `VISUAL`
    pub visual: Option<String>,
    /// `EDITOR`
    pub editor: Option<String>,
    /// `PROJECT_PATH`
    pub project_path: Option<String>,
    /// `PWD`
    pub pwd: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Environment {
    /// Read the variables from this process.
    #[must_use]
    pub fn capture() -> Self {
        let var = |name: &str| non_empty(std::env::var(name).ok());
        Self {
            open_file: var("OPEN_FILE"),
            visual: var("VISUAL"),
            editor: var("EDITOR"),
            project_path: var("PROJECT_PATH"),
            pwd: var("PWD"),
        }
    }

    /// `PROJECT_PATH`, else `PWD`, else the current directory.
    #[must_use]
    pub fn project_path(&self) -> String {
        non_empty(self.project_path.clone())
            .or_else(|| non_empty(self.pwd.clone()))
            .or_else(|| {
                std::env::current_dir()
                    .ok()
                    .map(|dir| dir.display().to_string())
            })
            .unwrap_or_else(|| ".".to_string())
    }
}

/// Resolve which editor or command to use and bind it into an [`Opener`].
///
/// Precedence: `options.editor` / `options.cmd`, then `OPEN_FILE` (as an
/// editor identifier, otherwise as a command), then `VISUAL`, then `EDITOR`.
///
/// # Errors
///
/// [`OpenError::UnknownEditor`] for an identifier missing from `registry`,
/// [`OpenError::EditorNotSpecified`] when nothing resolves.
pub fn configure<'r>(
    options: &Options,
    env: &Environment,
    registry: &'r Registry,
) -> Result<Opener<'r>> {
    let mut editor = non_empty(options.editor.clone());
    let mut cmd = non_empty(options.cmd.clone());

    if editor.is_none() && cmd.is_none() {
        let open_file = non_empty(env.open_file.clone());
        match open_file {
            Some(id) if registry.get(&id).is_some() => editor = Some(id),
            other => {
                cmd = other
                    .or_else(|| non_empty(env.visual.clone()))
                    .or_else(|| non_empty(env.editor.clone()));
            }
        }
    }

    let descriptor = match editor.as_deref() {
        Some(id) => Some(
            registry
                .get(id)
                .ok_or_else(|| OpenError::UnknownEditor(id.to_string()))?,
        ),
        None => None,
    };

    let target = match (cmd, descriptor) {
        (Some(cmd), descriptor) => {
            let mut settings = descriptor.map(|e| e.settings().clone()).unwrap_or_default();
            options.apply_to(&mut settings);
            Target::Command { cmd, settings }
        }
        (None, Some(editor)) => Target::Editor(editor),
        (None, None) => return Err(OpenError::EditorNotSpecified),
    };
    debug!(?target, "configured");

    Ok(Opener {
        target,
        line_offset: options.line.unwrap_or(1),
        column_offset: options.column.unwrap_or(1),
        project_path: env.project_path(),
        prober: Arc::new(SystemProber),
        launcher: Arc::new(ShellLauncher),
    })
}
