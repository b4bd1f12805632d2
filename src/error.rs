//! Validation errors for pagination parameters.

use std::fmt;

/// A pagination parameter rejected during validation.
///
/// Checks run in a fixed order (type, `total_pages`, `current_page`,
/// `boundaries`, `around`), so exactly one variant is ever reported for a
/// given input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// A raw parameter value is not an integer.
    InvalidType {
        /// Name of the offending parameter.
        param: &'static str,
        /// The raw value that failed to parse.
        raw: String,
    },
    /// `total_pages` is below 1.
    InvalidTotalPages(i64),
    /// `current_page` lies outside `[1, total_pages]`.
    InvalidCurrentPage {
        /// The rejected page number.
        current_page: i64,
        /// Upper bound it was checked against.
        total_pages: i64,
    },
    /// `boundaries` is negative.
    InvalidBoundaries(i64),
    /// `around` is negative.
    InvalidAround(i64),
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { param, raw } => {
                write!(f, "parameter '{param}' must be an integer, got '{raw}'")
            }
            Self::InvalidTotalPages(total_pages) => {
                write!(f, "invalid total_pages value: {total_pages} (must be at least 1)")
            }
            Self::InvalidCurrentPage {
                current_page,
                total_pages,
            } => {
                write!(
                    f,
                    "invalid current_page value: {current_page} (must be within 1..={total_pages})"
                )
            }
            Self::InvalidBoundaries(boundaries) => {
                write!(f, "invalid boundaries value: {boundaries} (must be non-negative)")
            }
            Self::InvalidAround(around) => {
                write!(f, "invalid around value: {around} (must be non-negative)")
            }
        }
    }
}

impl std::error::Error for PaginationError {}
