//! Pagination parameter validation and clamping.

use serde::Serialize;

use crate::error::PaginationError;

/// Validated pagination parameters.
///
/// Construction runs the full validation sequence, so a live value always
/// satisfies `total_pages >= 1`, `1 <= current_page <= total_pages`,
/// `0 <= boundaries <= total_pages`, and `around >= 0`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageParams {
    /// Page currently being viewed, 1-based.
    pub current_page: i64,
    /// Total number of pages, at least 1.
    pub total_pages: i64,
    /// Pages always shown at each end of the sequence (stored post-clamp).
    pub boundaries: i64,
    /// Window radius around the current page.
    pub around: i64,
}

impl PageParams {
    /// Validate the four parameters, clamping `boundaries` to `total_pages`.
    ///
    /// Checks run in a fixed order so the first failing parameter determines
    /// the error: `total_pages`, then `current_page`, `boundaries`, `around`.
    pub fn new(
        current_page: i64,
        total_pages: i64,
        boundaries: i64,
        around: i64,
    ) -> Result<Self, PaginationError> {
        if total_pages < 1 {
            return Err(PaginationError::InvalidTotalPages(total_pages));
        }
        if !(1..=total_pages).contains(&current_page) {
            return Err(PaginationError::InvalidCurrentPage {
                current_page,
                total_pages,
            });
        }
        if boundaries < 0 {
            return Err(PaginationError::InvalidBoundaries(boundaries));
        }
        if around < 0 {
            return Err(PaginationError::InvalidAround(around));
        }

        Ok(Self {
            current_page,
            total_pages,
            // Keeps the trailing-boundary start's lower bound at page 1
            boundaries: boundaries.min(total_pages),
            around,
        })
    }

    /// Parse and validate raw string parameters.
    ///
    /// All four values are type-checked before any range validation runs, so
    /// a float or non-numeric argument always reports
    /// [`PaginationError::InvalidType`].
    pub fn from_raw(
        current_page: &str,
        total_pages: &str,
        boundaries: &str,
        around: &str,
    ) -> Result<Self, PaginationError> {
        let current_page = parse_page_int("current_page", current_page)?;
        let total_pages = parse_page_int("total_pages", total_pages)?;
        let boundaries = parse_page_int("boundaries", boundaries)?;
        let around = parse_page_int("around", around)?;
        Self::new(current_page, total_pages, boundaries, around)
    }
}

/// Parse a raw integer argument, trimming surrounding whitespace.
fn parse_page_int(param: &'static str, raw: &str) -> Result<i64, PaginationError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| PaginationError::InvalidType {
            param,
            raw: trimmed.to_string(),
        })
}
