//! Command-line templating.
//!
//! A pattern is a string with `{filename}`, `{line}`, `{column}` and
//! `{projectPath}` placeholders. Rendering substitutes the numeric and project
//! placeholders first, then replaces the first `{filename}` together with
//! the unquoted, non-whitespace text that follows it (e.g. `:{line}:{column}`
//! after substitution) by a single shell-quoted argument. The project path is
//! quoted the same way, so patterns must not wrap `{projectPath}` in quotes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::location::FileLocation;

/// Appended to any pattern that lacks a `{filename}` placeholder.
pub const DEFAULT_PATTERN: &str = "{filename}:{line}:{column}";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(projectPath|line|column)\}").expect("placeholder pattern is valid")
});

// Quotes end the suffix so a pattern nested in a quoted script stays balanced.
static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{filename\}([^\s"']*)"#).expect("filename pattern is valid")
});

/// How one editor (or a user command) wants its arguments laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Argument pattern; empty means [`DEFAULT_PATTERN`]
    pub pattern: String,
    /// The rendered pattern is the whole command; the executable is not prepended
    pub pattern_only: bool,
    /// Quote the filename with `\"` so it survives inside another double-quoted string
    pub escape_quotes: bool,
    /// Added to the zero-based line before substitution; 1 when unset
    pub line: Option<u32>,
    /// Added to the zero-based column before substitution; 1 when unset
    pub column: Option<u32>,
}

impl Settings {
    /// Settings with just a pattern.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Settings for a terminal editor whose pattern is a complete command.
    #[must_use]
    pub fn standalone(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            pattern_only: true,
            escape_quotes: true,
            ..Self::default()
        }
    }
}

/// What goes in front of the rendered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Head<'a> {
    /// A detected executable path or command name; gets quoted
    Executable(&'a str),
    /// A user-supplied command template; used verbatim
    Template(&'a str),
}

/// Characters still special to the shell inside double quotes.
#[cfg(not(windows))]
const SHELL_SPECIAL: &[char] = &['\\', '"', '$', '`'];
#[cfg(windows)]
const SHELL_SPECIAL: &[char] = &['\\', '"'];

fn escape(value: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Shell-quote `value` as one double-quoted argument.
///
/// With `escape_quotes` the quoted argument is escaped once more for the
/// AppleScript string of [`in_terminal`], and single quotes are closed and
/// reopened for the `osascript -e '…'` around it.
#[must_use]
pub fn quote(value: &str, escape_quotes: bool) -> String {
    let quoted = format!("\"{}\"", escape(value, SHELL_SPECIAL));
    if escape_quotes {
        escape(&quoted, &['\\', '"']).replace('\'', r"'\''")
    } else {
        quoted
    }
}

/// Join `suffix` onto `base` with one space, dropping trailing whitespace.
#[must_use]
pub fn append(base: &str, suffix: &str) -> String {
    let base = base.trim_end();
    if base.is_empty() {
        suffix.to_string()
    } else {
        format!("{base} {suffix}")
    }
}

/// Wrap a terminal-editor command so Terminal.app runs it in the project directory.
#[must_use]
pub fn in_terminal(command: &str) -> String {
    let script = format!(
        "tell application \"Terminal\" to do script \"cd {{projectPath}}; {command}\""
    );
    format!("osascript -e '{script}'")
}

/// Substitute every placeholder of `settings.pattern` for `location`.
///
/// `location` is zero-based; `settings.line`/`settings.column` (default 1)
/// are added back before substitution.
#[must_use]
pub fn render(settings: &Settings, location: &FileLocation, project_path: &str) -> String {
    let line = location.line.saturating_add(settings.line.unwrap_or(1));
    let column = location.column.saturating_add(settings.column.unwrap_or(1));

    let pattern: Cow<'_, str> = if settings.pattern.contains("{filename}") {
        Cow::Borrowed(settings.pattern.as_str())
    } else {
        Cow::Owned(append(&settings.pattern, DEFAULT_PATTERN))
    };

    let substituted = PLACEHOLDER_RE.replace_all(&pattern, |caps: &Captures<'_>| {
        match &caps[1] {
            "projectPath" => quote(project_path, settings.escape_quotes),
            "line" => line.to_string(),
            _ => column.to_string(),
        }
    });

    FILENAME_RE
        .replace(&substituted, |caps: &Captures<'_>| {
            quote(
                &format!("{}{}", location.filename, &caps[1]),
                settings.escape_quotes,
            )
        })
        .into_owned()
}

/// Build the full shell command line for `head` opening `location`.
#[must_use]
pub fn command_line(
    head: Head<'_>,
    settings: &Settings,
    location: &FileLocation,
    project_path: &str,
) -> String {
    let rendered = render(settings, location, project_path);
    if settings.pattern_only {
        return rendered;
    }
    match head {
        Head::Executable(exe) => append(&quote(exe, false), &rendered),
        Head::Template(cmd) => append(cmd, &rendered),
    }
}
