//! Black/white inversion
//!
//! Only pixels that are exactly black or exactly white change. Everything in
//! between (anti-aliased edges, greys) passes through untouched, so this is
//! not a general `255 - v` inversion.

use image::{DynamicImage, GrayImage, RgbaImage};

use super::recolor::{replace_exact, to_luma};
use crate::models::Color;

/// Temporary color that holds former-black pixels while white becomes black.
pub const INVERSION_MARKER: Color = Color::new(255, 0, 0);

/// Swap exact black and exact white in place.
///
/// Black is parked on [`INVERSION_MARKER`] first so the white-to-black pass
/// cannot catch it. Pixels that already carry the marker color end up white.
pub fn invert_black_white(image: &mut RgbaImage) {
    replace_exact(image, Color::BLACK, INVERSION_MARKER);
    replace_exact(image, Color::WHITE, Color::BLACK);
    replace_exact(image, INVERSION_MARKER, Color::WHITE);
}

/// Swap black and white and return single-channel luma.
///
/// After normalization most of an image is background; inverting makes that
/// background zero.
pub fn invert_colors(image: &DynamicImage) -> GrayImage {
    let mut rgba = image.to_rgba8();
    invert_black_white(&mut rgba);
    to_luma(&rgba)
}
