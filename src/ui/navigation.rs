//! Shared navigation helpers for list-based views
//!
//! Pure functions computing selection and scroll state; each view applies
//! the results to its own fields.

/// Move selection down by one, clamped to `max_index`.
pub fn select_next(selected: usize, max_index: usize) -> usize {
    selected.saturating_add(1).min(max_index)
}

/// Move selection up by one, stopping at 0.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Scroll offset that keeps `selected` inside a window of `visible_count` rows.
///
/// A zero-height window leaves the offset unchanged.
pub fn adjust_scroll(selected: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + visible_count {
        selected + 1 - visible_count
    } else {
        scroll_offset
    }
}

/// Largest scroll offset that still fills a window of `visible` rows
pub fn max_scroll(total: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    total.saturating_sub(visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_next_clamps() {
        assert_eq!(select_next(0, 2), 1);
        assert_eq!(select_next(2, 2), 2);
        assert_eq!(select_next(0, 0), 0);
    }

    #[test]
    fn select_prev_stops_at_zero() {
        assert_eq!(select_prev(3), 2);
        assert_eq!(select_prev(0), 0);
    }

    #[test]
    fn adjust_scroll_follows_selection() {
        // window [0, 5): selecting 7 scrolls so that 7 is the last row
        assert_eq!(adjust_scroll(7, 0, 5), 3);
        // moving above the window scrolls up to it
        assert_eq!(adjust_scroll(1, 3, 5), 1);
        // inside the window nothing moves
        assert_eq!(adjust_scroll(4, 2, 5), 2);
        assert_eq!(adjust_scroll(9, 4, 0), 4);
    }

    #[test]
    fn max_scroll_never_underflows() {
        assert_eq!(max_scroll(100, 20), 80);
        assert_eq!(max_scroll(5, 20), 0);
        assert_eq!(max_scroll(5, 0), 0);
    }
}
