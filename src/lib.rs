//! Pagebar - Compact pagination bar formatter
//!
//! Computes which page numbers to show for a pagination control: a fixed
//! count of boundary pages at each end, a window around the current page,
//! and `...` markers wherever runs of pages are skipped.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod page;

// Re-export commonly used types
pub use cli::render_colored;
pub use config::BarConfig;
pub use error::PaginationError;
pub use page::params::PageParams;
pub use page::render::{paginate, BarToken, GAP_TOKEN};
pub use page::window::{PageRun, PageSet};
