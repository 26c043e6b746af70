//! git-specific constants
//!
//! Centralized definitions for git command names, flags and output formats.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const SHOW: &str = "show";
    pub const DIFF: &str = "diff";
    pub const BLAME: &str = "blame";
    pub const DIFF_TREE: &str = "diff-tree";
    pub const STATUS: &str = "status";
    pub const LS_TREE: &str = "ls-tree";
    pub const LS_FILES: &str = "ls-files";
    pub const REV_PARSE: &str = "rev-parse";
    pub const REV_LIST: &str = "rev-list";
}

/// git flags
pub mod flags {
    /// Global: never spawn a pager
    pub const NO_PAGER: &str = "--no-pager";
    /// Keep escapes in diff payloads for the annotator
    pub const COLOR_ALWAYS: &str = "--color=always";
    /// Keep list output parseable whatever the user's color config
    pub const NO_COLOR: &str = "--no-color";
    pub const FOLLOW: &str = "--follow";
    pub const WALK_REFLOGS: &str = "-g";
    pub const PICKAXE: &str = "-S";
    pub const MAX_COUNT: &str = "-n";
    pub const NO_INDEX: &str = "--no-index";
    pub const NO_COMMIT_ID: &str = "--no-commit-id";
    pub const NAME_STATUS: &str = "--name-status";
    pub const NAME_ONLY: &str = "--name-only";
    pub const NUMSTAT: &str = "--numstat";
    pub const RECURSIVE: &str = "-r";
    /// Make diff-tree list the files of a root commit
    pub const ROOT: &str = "--root";
    pub const PORCELAIN: &str = "--porcelain";
    pub const SHOW_TOPLEVEL: &str = "--show-toplevel";
    pub const PARENTS: &str = "--parents";
    pub const PATH_SEPARATOR: &str = "--";
}

/// `--format` strings for list queries
pub mod formats {
    /// `<short hash> <subject>`
    pub const ONELINE: &str = "--format=%h %s";
    /// `<short hash> <selector>: <reflog subject>`
    pub const REFLOG: &str = "--format=%h %gd: %gs";
}

/// Special values
pub mod special {
    /// Symbolic reference for the checked-out commit
    pub const HEAD: &str = "HEAD";
    /// Left side of the diff for untracked files
    pub const DEV_NULL: &str = "/dev/null";
    /// Exit status of `git diff --no-index` when the files differ
    pub const DIFF_FOUND_EXIT_CODE: i32 = 1;
}

/// Error detection patterns in git stderr
pub mod errors {
    pub const NOT_A_REPO: &str = "not a git repository";
    /// `git log` on a branch without commits
    pub const NO_COMMITS_YET: &str = "does not have any commits yet";
}
