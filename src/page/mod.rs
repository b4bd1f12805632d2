//! Page set computation and rendering
//!
//! Validates the four pagination parameters, builds the union of the
//! boundary runs and the around-window, and renders it with gap markers.

pub mod params;
pub mod render;
pub mod window;

pub use params::PageParams;
pub use render::{paginate, BarToken, GAP_TOKEN};
pub use window::{PageRun, PageSet};
