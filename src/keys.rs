//! Keybinding definitions for revscope
//!
//! All keybindings are defined here so input handling, the status bar and
//! the help panel stay in agreement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (always quits)
pub fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit, or step back out of the file tree / single-file mode
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Cycle panel focus
pub const TAB: KeyCode = KeyCode::Tab;

/// Deactivate source, leave single-file mode, or return to the latest commit
pub const ESC: KeyCode = KeyCode::Esc;

/// Focus the commit list (or the file tree when it is open)
pub const FOCUS_COMMITS: KeyCode = KeyCode::Char('1');

/// Focus the file list
pub const FOCUS_FILES: KeyCode = KeyCode::Char('2');

/// Focus the diff pane
pub const FOCUS_DIFF: KeyCode = KeyCode::Char('3');

/// Show the next newer commit of the active source
pub const NEWER: KeyCode = KeyCode::Char(']');

/// Show the next older commit of the active source
pub const OLDER: KeyCode = KeyCode::Char('[');

/// Show/hide the commit description above the hunks
pub const TOGGLE_DESCRIPTION: KeyCode = KeyCode::Char('z');

/// Open/close the file tree (browsing mode)
pub const TOGGLE_TREE: KeyCode = KeyCode::Char('t');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key opens the selection (Space or Enter)
pub fn is_open(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Enter)
}

// =============================================================================
// Input keys (search and filter input)
// =============================================================================

/// Submit input
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// File list keys
// =============================================================================

/// Start filtering the file list
pub const FILTER: KeyCode = KeyCode::Char('/');

// =============================================================================
// File tree keys
// =============================================================================

/// Expand directory
pub const EXPAND: KeyCode = KeyCode::Char('l');

/// Collapse directory (or the parent of a file)
pub const COLLAPSE: KeyCode = KeyCode::Char('h');

// =============================================================================
// Single-file mode keys
// =============================================================================

/// Cycle display mode: diff → ctx → full → blame
pub const CYCLE_MODE: KeyCode = KeyCode::Char('c');

/// Toggle the reflog source
pub const REFLOG: KeyCode = KeyCode::Char('r');

/// Toggle the pickaxe (content search) source
pub const PICKAXE: KeyCode = KeyCode::Char('s');

// =============================================================================
// Diff pane keys
// =============================================================================

/// Scroll half page down
pub const HALF_PAGE_DOWN: KeyCode = KeyCode::Char('d');

/// Scroll half page up
pub const HALF_PAGE_UP: KeyCode = KeyCode::Char('u');

/// Jump to next hunk
pub const NEXT_HUNK: KeyCode = KeyCode::Char('n');

/// Jump to previous hunk
pub const PREV_HUNK: KeyCode = KeyCode::Char('N');

// =============================================================================
// Help panel entries
// =============================================================================

/// A key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / close tree / leave file mode",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
    KeyBindEntry {
        key: "?",
        description: "Toggle this help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Cycle panel focus",
    },
    KeyBindEntry {
        key: "1/2/3",
        description: "Focus commits / files / diff",
    },
    KeyBindEntry {
        key: "]/[",
        description: "Newer / older commit",
    },
    KeyBindEntry {
        key: "z",
        description: "Toggle commit description",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back out one level / latest commit",
    },
];

pub const BROWSE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
    KeyBindEntry {
        key: "Space",
        description: "Open file history (file list)",
    },
    KeyBindEntry {
        key: "/",
        description: "Filter files",
    },
    KeyBindEntry {
        key: "t",
        description: "Toggle file tree",
    },
];

pub const FILE_MODE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "c",
        description: "Cycle view: diff/ctx/full/blame",
    },
    KeyBindEntry {
        key: "r",
        description: "Toggle reflog source",
    },
    KeyBindEntry {
        key: "s",
        description: "Toggle content search (pickaxe)",
    },
];

pub const DIFF_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll down/up",
    },
    KeyBindEntry {
        key: "d/u",
        description: "Half page down/up",
    },
    KeyBindEntry {
        key: "n/N",
        description: "Next/previous hunk",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Top/bottom",
    },
];

pub const TREE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Open file / toggle directory",
    },
    KeyBindEntry {
        key: "h/l",
        description: "Collapse/expand",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint for status bar display
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const COMMITS_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Space",
        label: "File",
        color: Color::Green,
    },
    KeyHint {
        key: "]/[",
        label: "Commits",
        color: Color::Magenta,
    },
    KeyHint {
        key: "/",
        label: "Filter",
        color: Color::Yellow,
    },
    KeyHint {
        key: "t",
        label: "Tree",
        color: Color::Blue,
    },
    KeyHint {
        key: "n/N",
        label: "Hunks",
        color: Color::Magenta,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

pub const FILE_MODE_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "c",
        label: "View",
        color: Color::Yellow,
    },
    KeyHint {
        key: "r",
        label: "Reflog",
        color: Color::Blue,
    },
    KeyHint {
        key: "s",
        label: "Search",
        color: Color::Blue,
    },
    KeyHint {
        key: "]/[",
        label: "History",
        color: Color::Magenta,
    },
    KeyHint {
        key: "n/N",
        label: "Hunks",
        color: Color::Magenta,
    },
    KeyHint {
        key: "z",
        label: "Info",
        color: Color::Cyan,
    },
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Red,
    },
];

pub const TREE_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Navigate",
        color: Color::Blue,
    },
    KeyHint {
        key: "Enter",
        label: "Open",
        color: Color::Green,
    },
    KeyHint {
        key: "h/l",
        label: "Fold",
        color: Color::Yellow,
    },
    KeyHint {
        key: "t",
        label: "Close",
        color: Color::Red,
    },
];

pub const INPUT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        label: "Confirm",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Cancel",
        color: Color::Red,
    },
];
