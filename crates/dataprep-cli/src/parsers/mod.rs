//! Parsing functions for CLI arguments.

mod color;
mod filter;

pub use color::parse_color;
pub use filter::parse_filter;
