//! Per-image pixel transforms
//!
//! Pure functions used by the batch drivers: exact-color recolor,
//! black/white inversion, and rotation onto a solid fill.

mod invert;
mod recolor;
mod rotate;


pub use invert::{invert_black_white, invert_colors, INVERSION_MARKER};
pub use recolor::{recolor_exact, replace_exact, to_luma};
pub use rotate::{rotate_with_fill, rotate_with_rgba_fill, top_left_fill};
