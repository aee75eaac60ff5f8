//! Exact-match pixel recoloring

use image::{DynamicImage, GrayImage, Luma, RgbaImage};

use crate::models::{luma_601, Color};

/// Replace every pixel whose RGB equals `target` with `replacement`, in place.
///
/// Alpha is left alone. Returns the number of pixels that changed.
pub fn replace_exact(image: &mut RgbaImage, target: Color, replacement: Color) -> usize {
    let mut replaced = 0;
    for pixel in image.pixels_mut() {
        if target.matches(&pixel.0) {
            pixel.0[0] = replacement.r;
            pixel.0[1] = replacement.g;
            pixel.0[2] = replacement.b;
            replaced += 1;
        }
    }
    replaced
}

/// Recolor exact `target` pixels to `replacement` and return single-channel luma.
///
/// Typically used to turn a grey matte (127, 127, 127) white before inversion.
/// Near-miss shades are not touched.
pub fn recolor_exact(image: &DynamicImage, target: Color, replacement: Color) -> GrayImage {
    let mut rgba = image.to_rgba8();
    replace_exact(&mut rgba, target, replacement);
    to_luma(&rgba)
}

/// Convert RGBA to 8-bit luma (ITU-R 601-2), ignoring alpha.
pub fn to_luma(rgba: &RgbaImage) -> GrayImage {
    let (width, height) = rgba.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let [r, g, b, _] = rgba.get_pixel(x, y).0;
        Luma([luma_601(r, g, b)])
    })
}
