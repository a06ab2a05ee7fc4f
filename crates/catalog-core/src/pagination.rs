//! Pagination Utilities
//!
//! Helper functions for rendering page number controls.

/// Show every page up to this many
const MAX_PAGES_SHOWN: u32 = 7;
/// Pages shown on each side of the current one
const SIBLINGS: u32 = 2;
/// Pages in the leading/trailing run when only one side is collapsed
const EDGE_RUN: u32 = 5;

/// One slot of the page number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Build the page number strip for `current` out of `total` pages.
///
/// Short ranges are shown in full. Longer ranges keep the first and last page
/// as anchors with a window of two pages around `current`, collapsing each
/// gap into a single ellipsis.
pub fn page_window(current: u32, total: u32) -> Vec<PageToken> {
    if total <= MAX_PAGES_SHOWN {
        return (1..=total).map(PageToken::Page).collect();
    }

    let left = current.saturating_sub(SIBLINGS).max(1);
    let right = current.saturating_add(SIBLINGS).min(total);

    let left_dots = left > 2;
    let right_dots = right < total - 1;

    let mut tokens = Vec::with_capacity(MAX_PAGES_SHOWN as usize + 2);
    match (left_dots, right_dots) {
        (false, true) => {
            tokens.extend((1..=EDGE_RUN).map(PageToken::Page));
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total));
        }
        (true, false) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis);
            tokens.extend((total - (EDGE_RUN - 1)..=total).map(PageToken::Page));
        }
        (true, true) => {
            tokens.push(PageToken::Page(1));
            tokens.push(PageToken::Ellipsis);
            tokens.extend((left..=right).map(PageToken::Page));
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total));
        }
        (false, false) => {
            tokens.extend((1..=total).map(PageToken::Page));
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_short_range_shows_all() {
        assert_eq!(page_window(3, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
        assert_eq!(page_window(1, 7).len(), 7);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            page_window(10, 20),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            page_window(2, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(page_window(1, 42)[..5], [Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(19, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            page_window(20, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_current_beyond_total() {
        // A huge ?page= is clamped to u32::MAX by the URL parser
        assert_eq!(
            page_window(u32::MAX, 42),
            vec![Page(1), Ellipsis, Page(38), Page(39), Page(40), Page(41), Page(42)]
        );
        assert_eq!(page_window(u32::MAX, 5).len(), 5);
    }

    #[test]
    fn test_at_most_one_ellipsis_per_side() {
        for total in 8..40 {
            for current in 1..=total {
                let tokens = page_window(current, total);
                let dots = tokens.iter().filter(|t| **t == Ellipsis).count();
                assert!(dots <= 2, "current={} total={}", current, total);
                assert_eq!(tokens.first(), Some(&Page(1)));
                assert_eq!(tokens.last(), Some(&Page(total)));
            }
        }
    }
}
