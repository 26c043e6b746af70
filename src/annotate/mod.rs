//! Diff annotation
//!
//! Turns raw unified-diff text (possibly colored by git) into line-numbered,
//! word-highlighted text plus the offsets of its hunk headers.
//!
//! The transform is pure: the same input always yields byte-identical output,
//! and no input makes it fail. Lines it cannot interpret are passed through
//! with blank line numbers.

mod highlight;

pub use highlight::changed_region;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use highlight::PendingBlock;

/// Hunk header: `@@ -<old>[,<len>] +<new>[,<len>] @@`
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@\s+-(\d+)(?:,\d+)?\s+\+(\d+)(?:,\d+)?\s+@@")
        .expect("Invalid hunk header regex")
});

/// SGR color escape sequences as emitted by `git --color=always`
static ANSI_ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid ANSI escape regex"));

/// Annotated diff ready for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPayload {
    /// Rendered text, lines joined with `\n`
    pub text: String,
    /// Ascending line indices of hunk headers within `text`
    pub hunk_offsets: Vec<usize>,
}

impl DiffPayload {
    /// Payload shown as-is: no gutter, no hunks (full file, blame, messages)
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hunk_offsets: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.text.split('\n').count()
        }
    }
}

/// Remove color escape sequences
pub fn strip_ansi(line: &str) -> Cow<'_, str> {
    ANSI_ESCAPE_REGEX.replace_all(line, "")
}

/// Parse old/new start numbers from an escape-free hunk header line
fn parse_hunk_header(stripped: &str) -> Option<(u32, u32)> {
    let caps = HUNK_HEADER_REGEX.captures(stripped)?;
    let old = caps.get(1)?.as_str().parse().ok()?;
    let new = caps.get(2)?.as_str().parse().ok()?;
    Some((old, new))
}

/// Drop everything before the first hunk header (commit header, `diff --git`,
/// index and `---`/`+++` lines). Text without a hunk header is kept whole.
pub fn strip_header(text: &str) -> &str {
    let mut offset = 0;
    for line in text.split('\n') {
        if parse_hunk_header(&strip_ansi(line)).is_some() {
            return &text[offset..];
        }
        offset += line.len() + 1;
    }
    text
}

/// Annotate a raw unified diff.
///
/// When `show_header` is false, lines before the first hunk header are
/// dropped. A single trailing newline is not treated as a blank line.
pub fn annotate(raw: &str, show_header: bool) -> DiffPayload {
    let body = raw.strip_suffix('\n').unwrap_or(raw);
    if body.is_empty() {
        return DiffPayload::default();
    }
    let body = if show_header { body } else { strip_header(body) };

    let mut annotator = Annotator::default();
    for line in body.split('\n') {
        annotator.push(line);
    }
    annotator.finish()
}

/// Line-by-line annotation state
#[derive(Debug, Default)]
struct Annotator {
    lines: Vec<String>,
    hunk_offsets: Vec<usize>,
    old_line: u32,
    new_line: u32,
    in_hunk: bool,
    block: PendingBlock,
}

impl Annotator {
    fn push(&mut self, line: &str) {
        let stripped = strip_ansi(line);

        if let Some((old, new)) = parse_hunk_header(&stripped) {
            self.flush();
            self.old_line = old;
            self.new_line = new;
            self.in_hunk = true;
            self.hunk_offsets.push(self.lines.len());
            self.emit_metadata(line);
            return;
        }

        // Malformed headers and the start of the next file's header end the hunk
        if stripped.starts_with("@@") || stripped.starts_with("diff ") {
            self.flush();
            self.in_hunk = false;
            self.emit_metadata(line);
            return;
        }

        if !self.in_hunk {
            self.emit_metadata(line);
            return;
        }

        match stripped.chars().next() {
            Some('-') => {
                if self.block.has_additions() {
                    self.flush();
                }
                self.block
                    .push_deletion(self.old_line, stripped.into_owned());
                self.old_line = self.old_line.saturating_add(1);
            }
            Some('+') => {
                self.block.push_addition(self.new_line, stripped.into_owned());
                self.new_line = self.new_line.saturating_add(1);
            }
            // "\ No newline at end of file" belongs to no side
            Some('\\') => {
                self.flush();
                self.emit_metadata(line);
            }
            _ => {
                self.flush();
                self.lines.push(format!(
                    "{:4} {:4} │ {}",
                    self.old_line, self.new_line, line
                ));
                self.old_line = self.old_line.saturating_add(1);
                self.new_line = self.new_line.saturating_add(1);
            }
        }
    }

    fn emit_metadata(&mut self, line: &str) {
        self.lines.push(format!("{:4} {:4} │ {}", "", "", line));
    }

    fn flush(&mut self) {
        if !self.block.is_empty() {
            self.block.drain_into(&mut self.lines);
        }
    }

    fn finish(mut self) -> DiffPayload {
        self.flush();
        DiffPayload {
            text: self.lines.join("\n"),
            hunk_offsets: self.hunk_offsets,
        }
    }
}

/// Smallest hunk offset strictly after `current`
pub fn next_hunk(current: usize, hunk_offsets: &[usize]) -> Option<usize> {
    hunk_offsets.iter().copied().find(|&offset| offset > current)
}

/// Largest hunk offset strictly before `current`
pub fn prev_hunk(current: usize, hunk_offsets: &[usize]) -> Option<usize> {
    hunk_offsets
        .iter()
        .rev()
        .copied()
        .find(|&offset| offset < current)
}
