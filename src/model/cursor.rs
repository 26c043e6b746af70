//! Navigation cursor

use super::{ActiveSource, SourceKind};

/// How the selected file is rendered in single-file mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DisplayMode {
    /// Unified diff with the configured context
    #[default]
    Diff,
    /// Unified diff with expanded context
    Context,
    /// Whole file at the revision
    FullFile,
    /// Blame annotations at the revision
    Blame,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Diff,
        DisplayMode::Context,
        DisplayMode::FullFile,
        DisplayMode::Blame,
    ];

    /// Next mode in the `c` cycle
    pub fn next(self) -> Self {
        match self {
            Self::Diff => Self::Context,
            Self::Context => Self::FullFile,
            Self::FullFile => Self::Blame,
            Self::Blame => Self::Diff,
        }
    }

    /// Tab label in the diff header
    pub fn label(self) -> &'static str {
        match self {
            Self::Diff => "diff",
            Self::Context => "ctx",
            Self::FullFile => "full",
            Self::Blame => "blame",
        }
    }

    /// Whether the content is a unified diff that gets annotated
    pub fn is_diff(self) -> bool {
        matches!(self, Self::Diff | Self::Context)
    }
}

/// Cursor state across source, display mode and single-file mode.
///
/// The position inside the active source lives on the [`CommitSource`]
/// itself; see `App::current_source`.
///
/// [`CommitSource`]: super::CommitSource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub active: ActiveSource,
    pub display_mode: DisplayMode,
    pub single_file: bool,
    pub selected_path: String,
}

impl Cursor {
    pub fn source_kind(&self) -> SourceKind {
        self.active.kind()
    }

    /// Display mode that applies to content loads (always diff while browsing)
    pub fn effective_mode(&self) -> DisplayMode {
        if self.single_file {
            self.display_mode
        } else {
            DisplayMode::Diff
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mode_cycle_visits_all_modes() {
        let mut mode = DisplayMode::Diff;
        let mut seen = vec![mode];
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, DisplayMode::ALL.to_vec());
        assert_eq!(mode.next(), DisplayMode::Diff);
    }

    #[test]
    fn effective_mode_is_diff_outside_single_file() {
        let cursor = Cursor {
            display_mode: DisplayMode::Blame,
            ..Cursor::default()
        };
        assert_eq!(cursor.effective_mode(), DisplayMode::Diff);
    }
}
