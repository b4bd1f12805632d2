//! CLI output formatting
//!
//! Terminal styling for rendered page bars.

pub mod display;

pub use display::render_colored;
