//! Page set construction: union of the boundary runs and the around-window.
//!
//! The set is kept as inclusive runs rather than individual pages, so the
//! cost of computing it depends only on how many runs overlap, never on the
//! magnitude of `total_pages`.

use serde::Serialize;

use crate::page::params::PageParams;

/// An inclusive run of consecutive page numbers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageRun {
    /// First page in the run.
    pub start: i64,
    /// Last page in the run, `>= start`.
    pub end: i64,
}

impl PageRun {
    const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Iterate the pages in this run in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

/// The visible pages for one pagination display.
///
/// Stored as disjoint runs in strictly ascending order; consecutive runs are
/// always separated by at least one skipped page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageSet {
    current_page: i64,
    total_pages: i64,
    runs: Vec<PageRun>,
}

impl PageSet {
    /// Compute the visible page set for validated parameters.
    ///
    /// Builds the leading-boundary, around-window, and trailing-boundary
    /// runs, sorts them, and coalesces overlapping or exactly-adjacent runs.
    /// The around-window always contains `current_page`, so the set is never
    /// empty.
    #[must_use]
    pub fn compute(params: &PageParams) -> Self {
        let mut candidates = Vec::with_capacity(3);

        if params.boundaries > 0 {
            candidates.push(PageRun::new(1, params.boundaries));
        }

        // Window endpoints saturate into [1, total_pages]; around itself is
        // never clamped or rejected.
        let window_start = params.current_page.saturating_sub(params.around).max(1);
        let window_end = params
            .current_page
            .saturating_add(params.around)
            .min(params.total_pages);
        candidates.push(PageRun::new(window_start, window_end));

        if params.boundaries > 0 {
            candidates.push(PageRun::new(
                params.total_pages - params.boundaries + 1,
                params.total_pages,
            ));
        }

        candidates.sort_unstable_by_key(|run| run.start);

        let mut runs: Vec<PageRun> = Vec::with_capacity(candidates.len());
        for run in candidates {
            match runs.last_mut() {
                // Exactly-adjacent runs coalesce too, so a surviving gap
                // always skips at least one page.
                Some(prev) if run.start <= prev.end.saturating_add(1) => {
                    prev.end = prev.end.max(run.end);
                }
                _ => runs.push(run),
            }
        }

        Self {
            current_page: params.current_page,
            total_pages: params.total_pages,
            runs,
        }
    }

    /// The disjoint, ascending runs of visible pages.
    #[must_use]
    pub fn runs(&self) -> &[PageRun] {
        &self.runs
    }

    /// The page currently being viewed.
    #[must_use]
    pub const fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Total number of pages in the sequence.
    #[must_use]
    pub const fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Iterate every visible page in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = i64> + '_ {
        self.runs.iter().flat_map(PageRun::pages)
    }
}
