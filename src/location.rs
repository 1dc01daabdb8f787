//! `path:line:column` file specs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Up to four trailing `:N` groups are split off the path.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)((?::\d+){0,4})$").expect("location pattern is valid")
});

/// A file plus the position to place the cursor at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    /// Path exactly as given, minus the position suffix
    pub filename: String,
    /// Line number, 0 when absent
    pub line: u32,
    /// Column number, 0 when absent
    pub column: u32,
}

impl FileLocation {
    /// Parse `path`, `path:line` or `path:line:column`.
    ///
    /// Any groups past the column are accepted and ignored. A colon not
    /// followed by digits stays part of the filename.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let Some(caps) = LOCATION_RE.captures(spec) else {
            return Self {
                filename: spec.to_string(),
                line: 0,
                column: 0,
            };
        };
        let mut numbers = caps[2].split(':').skip(1).map(parse_number);
        Self {
            filename: caps[1].to_string(),
            line: numbers.next().unwrap_or(0),
            column: numbers.next().unwrap_or(0),
        }
    }

    /// Move the position from `line_offset`/`column_offset`-based numbering to
    /// zero-based, clamping at zero.
    #[must_use]
    pub fn shifted(&self, line_offset: u32, column_offset: u32) -> Self {
        Self {
            filename: self.filename.clone(),
            line: self.line.saturating_sub(line_offset),
            column: self.column.saturating_sub(column_offset),
        }
    }
}

// The regex only lets digits through, so the sole failure is overflow.
fn parse_number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(filename: &str, line: u32, column: u32) -> FileLocation {
        FileLocation {
            filename: filename.into(),
            line,
            column,
        }
    }

    #[test]
    fn test_parse_line_and_column() {
        assert_eq!(FileLocation::parse("a/b.txt:5:3"), loc("a/b.txt", 5, 3));
    }

    #[test]
    fn test_parse_bare_path() {
        assert_eq!(FileLocation::parse("a/b.txt"), loc("a/b.txt", 0, 0));
    }

    #[test]
    fn test_parse_line_only() {
        assert_eq!(FileLocation::parse("src/main.rs:42"), loc("src/main.rs", 42, 0));
    }

    #[test]
    fn test_parse_extra_groups_ignored() {
        assert_eq!(FileLocation::parse("x.rs:1:2:3:4"), loc("x.rs", 1, 2));
    }

    #[test]
    fn test_parse_more_than_four_groups_stay_in_filename() {
        assert_eq!(FileLocation::parse("x.rs:9:1:2:3:4"), loc("x.rs:9", 1, 2));
    }

    #[test]
    fn test_parse_windows_drive_letter() {
        assert_eq!(
            FileLocation::parse("C:/src/app.ts:10:2"),
            loc("C:/src/app.ts", 10, 2)
        );
    }

    #[test]
    fn test_parse_colon_without_digits() {
        assert_eq!(FileLocation::parse("notes:todo.md"), loc("notes:todo.md", 0, 0));
    }

    #[test]
    fn test_parse_only_suffix_is_a_filename() {
        assert_eq!(FileLocation::parse(":5"), loc(":5", 0, 0));
    }

    #[test]
    fn test_parse_overflowing_line_saturates() {
        assert_eq!(
            FileLocation::parse("f.rs:99999999999"),
            loc("f.rs", u32::MAX, 0)
        );
    }

    #[test]
    fn test_shifted_clamps_at_zero() {
        let shifted = loc("f.rs", 5, 0).shifted(1, 1);
        assert_eq!(shifted, loc("f.rs", 4, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(loc("f.rs", 3, 7).to_string(), "f.rs:3:7");
    }
}
