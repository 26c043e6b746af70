//! Intraline highlighting for paired deletion/addition lines

use std::ops::Range;

/// ANSI foreground code for deleted lines
pub(crate) const RED: &str = "31";
/// ANSI foreground code for added lines
pub(crate) const GREEN: &str = "32";

const RESET: &str = "\x1b[0m";
const REVERSE_ON: &str = "\x1b[7m";
const REVERSE_OFF: &str = "\x1b[27m";

/// Character range of `this` that differs from `other`.
///
/// Uses the longest common prefix and then the longest common suffix of what
/// remains of the shorter string. Returns `None` when nothing in `this`
/// differs (identical text, or `this` is covered by prefix and suffix).
pub fn changed_region(this: &str, other: &str) -> Option<Range<usize>> {
    let this: Vec<char> = this.chars().collect();
    let other: Vec<char> = other.chars().collect();
    let shorter = this.len().min(other.len());

    let prefix = this
        .iter()
        .zip(&other)
        .take_while(|(a, b)| a == b)
        .count();

    let suffix = this
        .iter()
        .rev()
        .zip(other.iter().rev())
        .take(shorter - prefix)
        .take_while(|(a, b)| a == b)
        .count();

    let end = this.len() - suffix;
    (prefix < end).then_some(prefix..end)
}

/// Render `this` in `color`, with the region that differs from `other` in
/// reverse video.
pub(crate) fn highlight_change(this: &str, other: &str, color: &str) -> String {
    let Some(region) = changed_region(this, other) else {
        return format!("\x1b[{color}m{this}{RESET}");
    };

    let chars: Vec<char> = this.chars().collect();
    let prefix: String = chars[..region.start].iter().collect();
    let changed: String = chars[region.clone()].iter().collect();
    let suffix: String = chars[region.end..].iter().collect();

    format!("\x1b[{color}m{prefix}{REVERSE_ON}{changed}{REVERSE_OFF}{suffix}{RESET}")
}

/// One buffered `-`/`+` line: its number on the relevant side and the text
/// with escapes stripped (marker included).
#[derive(Debug)]
struct Buffered {
    number: u32,
    text: String,
}

/// A run of deletions followed by additions, waiting to be paired
#[derive(Debug, Default)]
pub(crate) struct PendingBlock {
    deletions: Vec<Buffered>,
    additions: Vec<Buffered>,
}

impl PendingBlock {
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.additions.is_empty()
    }

    pub fn has_additions(&self) -> bool {
        !self.additions.is_empty()
    }

    pub fn push_deletion(&mut self, number: u32, text: String) {
        self.deletions.push(Buffered { number, text });
    }

    pub fn push_addition(&mut self, number: u32, text: String) {
        self.additions.push(Buffered { number, text });
    }

    /// Emit all deletions, then all additions, and clear the block.
    ///
    /// Deletion `i` is paired with addition `i` for `i < min(counts)`; paired
    /// lines get intraline highlighting, the remainder is colored uniformly.
    pub fn drain_into(&mut self, out: &mut Vec<String>) {
        let pairs = self.deletions.len().min(self.additions.len());

        for (i, line) in self.deletions.iter().enumerate() {
            let rendered = if i < pairs {
                let body = highlight_change(
                    marker_stripped(&line.text),
                    marker_stripped(&self.additions[i].text),
                    RED,
                );
                format!(
                    "\x1b[{RED}m{:4}{RESET} {:4} │ \x1b[{RED}m-{RESET}{body}",
                    line.number, ""
                )
            } else {
                format!(
                    "\x1b[{RED}m{:4}{RESET} {:4} │ \x1b[{RED}m{}{RESET}",
                    line.number, "", line.text
                )
            };
            out.push(rendered);
        }

        for (i, line) in self.additions.iter().enumerate() {
            let rendered = if i < pairs {
                let body = highlight_change(
                    marker_stripped(&line.text),
                    marker_stripped(&self.deletions[i].text),
                    GREEN,
                );
                format!(
                    "{:4} \x1b[{GREEN}m{:4}{RESET} │ \x1b[{GREEN}m+{RESET}{body}",
                    "", line.number
                )
            } else {
                format!(
                    "{:4} \x1b[{GREEN}m{:4}{RESET} │ \x1b[{GREEN}m{}{RESET}",
                    "", line.number, line.text
                )
            };
            out.push(rendered);
        }

        self.deletions.clear();
        self.additions.clear();
    }
}

/// Drop the leading `-`/`+` marker (always a single ASCII byte here)
fn marker_stripped(text: &str) -> &str {
    text.get(1..).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_region_for_single_char_substitution() {
        assert_eq!(changed_region("foo", "fog"), Some(2..3));
        assert_eq!(changed_region("fog", "foo"), Some(2..3));
    }

    #[test]
    fn identical_text_has_no_region() {
        assert_eq!(changed_region("same line", "same line"), None);
        assert_eq!(changed_region("", ""), None);
    }

    #[test]
    fn pure_insertion_highlights_only_the_longer_side() {
        // "abc" -> "abXc": prefix "ab", suffix "c"
        assert_eq!(changed_region("abXc", "abc"), Some(2..3));
        assert_eq!(changed_region("abc", "abXc"), None);
    }

    #[test]
    fn suffix_never_overlaps_prefix() {
        // "aa" vs "aaa": prefix 2, suffix bounded to 0
        assert_eq!(changed_region("aaa", "aa"), Some(2..3));
        assert_eq!(changed_region("aa", "aaa"), None);
    }

    #[test]
    fn region_counts_characters_not_bytes() {
        assert_eq!(changed_region("héllo", "hällo"), Some(1..2));
    }

    #[test]
    fn highlight_wraps_middle_in_reverse_video() {
        assert_eq!(
            highlight_change("foo", "fog", RED),
            "\x1b[31mfo\x1b[7mo\x1b[27m\x1b[0m"
        );
    }

    #[test]
    fn highlight_without_change_is_plain_colored() {
        assert_eq!(highlight_change("same", "same", GREEN), "\x1b[32msame\x1b[0m");
    }

    #[test]
    fn drain_pairs_lines_and_colors_remainder() {
        let mut block = PendingBlock::default();
        block.push_deletion(10, "-foo".into());
        block.push_deletion(11, "-bar".into());
        block.push_addition(10, "+fog".into());

        let mut out = Vec::new();
        block.drain_into(&mut out);

        assert_eq!(out.len(), 3);
        assert_eq!(
            out[0],
            "\x1b[31m  10\x1b[0m      │ \x1b[31m-\x1b[0m\x1b[31mfo\x1b[7mo\x1b[27m\x1b[0m"
        );
        assert_eq!(out[1], "\x1b[31m  11\x1b[0m      │ \x1b[31m-bar\x1b[0m");
        assert_eq!(
            out[2],
            "     \x1b[32m  10\x1b[0m │ \x1b[32m+\x1b[0m\x1b[32mfo\x1b[7mg\x1b[27m\x1b[0m"
        );
        assert!(block.is_empty());
    }
}
