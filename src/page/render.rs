//! Plain-text rendering of a page set with gap markers.

use crate::error::PaginationError;
use crate::page::params::PageParams;
use crate::page::window::PageSet;

/// Token emitted wherever consecutive visible pages are not adjacent.
pub const GAP_TOKEN: &str = "...";

/// One display token of a rendered bar, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarToken {
    /// A visible page number.
    Page(i64),
    /// A gap marker covering one or more skipped pages.
    Gap,
}

impl PageSet {
    /// The display tokens for this set, in render order.
    ///
    /// A gap sits between consecutive runs, before the first run when it
    /// starts after page 1, and after the last run when it ends before the
    /// final page. The edge gaps are only reachable with zero boundary
    /// pages, since any boundary pins the first and last page into the set.
    #[must_use]
    pub fn tokens(&self) -> Vec<BarToken> {
        let mut tokens = Vec::new();

        if self.runs().first().is_some_and(|run| run.start > 1) {
            tokens.push(BarToken::Gap);
        }

        for (i, run) in self.runs().iter().enumerate() {
            if i > 0 {
                tokens.push(BarToken::Gap);
            }
            tokens.extend(run.pages().map(BarToken::Page));
        }

        if self
            .runs()
            .last()
            .is_some_and(|run| run.end < self.total_pages())
        {
            tokens.push(BarToken::Gap);
        }

        tokens
    }

    /// Render the set as a space-separated bar with `...` gap markers.
    #[must_use]
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .tokens()
            .iter()
            .map(|token| match token {
                BarToken::Page(page) => page.to_string(),
                BarToken::Gap => GAP_TOKEN.to_string(),
            })
            .collect();

        rendered.join(" ")
    }
}

/// Validate the four parameters, compute the page set, and render it.
///
/// The one-call form of the crate: pure and stateless, so identical
/// arguments always yield an identical string.
pub fn paginate(
    current_page: i64,
    total_pages: i64,
    boundaries: i64,
    around: i64,
) -> Result<String, PaginationError> {
    let params = PageParams::new(current_page, total_pages, boundaries, around)?;
    Ok(PageSet::compute(&params).render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_between_disjoint_runs() {
        assert_eq!(paginate(2, 10, 3, 1).unwrap(), "1 2 3 ... 8 9 10");
    }

    #[test]
    fn test_overlapping_window_renders_without_gap() {
        assert_eq!(paginate(6, 10, 1, 3).unwrap(), "1 ... 3 4 5 6 7 8 9 10");
    }

    #[test]
    fn test_zero_boundaries_adds_edge_gaps() {
        assert_eq!(paginate(6, 10, 0, 3).unwrap(), "... 3 4 5 6 7 8 9 ...");
        assert_eq!(paginate(4, 5, 0, 0).unwrap(), "... 4 ...");
    }

    #[test]
    fn test_around_zero_with_boundary() {
        assert_eq!(paginate(4, 5, 1, 0).unwrap(), "1 ... 4 5");
    }

    #[test]
    fn test_single_page_total() {
        assert_eq!(paginate(1, 1, 0, 0).unwrap(), "1");
    }

    #[test]
    fn test_clamped_boundaries_render_full_sequence() {
        assert_eq!(paginate(2, 10, 100, 0).unwrap(), "1 2 3 4 5 6 7 8 9 10");
    }

    #[test]
    fn test_no_surrounding_whitespace() {
        let bar = paginate(4, 5, 0, 0).unwrap();
        assert_eq!(bar, bar.trim());
    }

    #[test]
    fn test_token_sequence_order() {
        let params = PageParams::new(2, 10, 3, 1).unwrap();
        let tokens = PageSet::compute(&params).tokens();
        assert_eq!(
            tokens,
            vec![
                BarToken::Page(1),
                BarToken::Page(2),
                BarToken::Page(3),
                BarToken::Gap,
                BarToken::Page(8),
                BarToken::Page(9),
                BarToken::Page(10),
            ]
        );
    }

    #[test]
    fn test_validation_error_propagates() {
        assert_eq!(
            paginate(0, 10, 1, 1),
            Err(PaginationError::InvalidCurrentPage {
                current_page: 0,
                total_pages: 10
            })
        );
    }
}
