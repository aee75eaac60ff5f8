//! Rotation onto a solid fill
//!
//! The image is rotated counter-clockwise about its center without growing the
//! canvas. A mask of the same size is rotated alongside it and used to blend
//! the rotated content onto a background filled with the caller's color, so
//! the corners exposed by the rotation show the fill instead of black.

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Pixel, Rgb, Rgba};

use crate::models::{Color, MaskMode, RotationFilter};

/// Trig terms smaller than this are snapped to zero so right-angle rotations
/// land exactly on pixel centers.
const TRIG_SNAP_EPSILON: f64 = 1e-12;

/// Fully opaque mask value
const OPAQUE: u8 = 255;

/// How a bilinear sample treats neighbors that fall outside the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    /// Reuse the nearest edge pixel (image content)
    Clamp,
    /// Contribute zero (mask coverage)
    Transparent,
}

/// Inverse mapping from output pixels to continuous source coordinates
#[derive(Debug, Clone, Copy)]
struct Rotation {
    cos: f64,
    sin: f64,
    cx: f64,
    cy: f64,
}

impl Rotation {
    fn new(angle_degrees: f64, width: u32, height: u32) -> Self {
        let snap = |v: f64| if v.abs() < TRIG_SNAP_EPSILON { 0.0 } else { v };
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self {
            cos: snap(cos),
            sin: snap(sin),
            cx: width as f64 / 2.0,
            cy: height as f64 / 2.0,
        }
    }

    /// Source point sampled by the center of output pixel (x, y).
    ///
    /// Image rows grow downward, so a visually counter-clockwise rotation of
    /// the content reads the source through the matrix below.
    #[inline]
    fn source_point(&self, x: u32, y: u32) -> (f64, f64) {
        let dx = x as f64 + 0.5 - self.cx;
        let dy = y as f64 + 0.5 - self.cy;
        (
            self.cos * dx - self.sin * dy + self.cx,
            self.sin * dx + self.cos * dy + self.cy,
        )
    }
}

/// Rotate `image` by `angle_degrees` (counter-clockwise) and fill exposed
/// corners with `fill`.
///
/// Output has the same size and pixel layout as the input; content rotated
/// past the border is clipped. Luma8, Rgb8 and Rgba8 images keep their layout,
/// any other layout is rotated as Rgba8. The fill is converted to the pixel
/// type (luma for grey, opaque alpha for RGBA).
///
/// Nearest sampling uses a binary mask; bilinear sampling uses a soft
/// coverage mask so rotated edges blend into the fill. A zero angle returns
/// the input pixels unchanged for both.
pub fn rotate_with_fill(
    image: &DynamicImage,
    angle_degrees: f64,
    fill: Color,
    filter: RotationFilter,
) -> Result<DynamicImage, String> {
    rotate_with_rgba_fill(
        image,
        angle_degrees,
        Rgba([fill.r, fill.g, fill.b, OPAQUE]),
        filter,
    )
}

/// Same as [`rotate_with_fill`] with an explicit fill alpha.
///
/// The alpha only reaches images that carry an alpha channel; grey and RGB
/// images use the fill's color alone.
pub fn rotate_with_rgba_fill(
    image: &DynamicImage,
    angle_degrees: f64,
    fill: Rgba<u8>,
    filter: RotationFilter,
) -> Result<DynamicImage, String> {
    if !angle_degrees.is_finite() {
        return Err(format!("Rotation angle must be finite, got {}", angle_degrees));
    }

    let Rgba([r, g, b, _]) = fill;
    let mask_mode = MaskMode::for_filter(filter);
    let rotated = match image {
        DynamicImage::ImageLuma8(buffer) => DynamicImage::ImageLuma8(rotate_buffer(
            buffer,
            angle_degrees,
            Luma([Color::new(r, g, b).luma()]),
            filter,
            mask_mode,
        )),
        DynamicImage::ImageRgb8(buffer) => DynamicImage::ImageRgb8(rotate_buffer(
            buffer,
            angle_degrees,
            Rgb([r, g, b]),
            filter,
            mask_mode,
        )),
        DynamicImage::ImageRgba8(buffer) => DynamicImage::ImageRgba8(rotate_buffer(
            buffer,
            angle_degrees,
            fill,
            filter,
            mask_mode,
        )),
        other => DynamicImage::ImageRgba8(rotate_buffer(
            &other.to_rgba8(),
            angle_degrees,
            fill,
            filter,
            mask_mode,
        )),
    };

    Ok(rotated)
}

/// Rotate a buffer and composite it onto a solid `fill` canvas.
fn rotate_buffer<P>(
    source: &ImageBuffer<P, Vec<u8>>,
    angle_degrees: f64,
    fill: P,
    filter: RotationFilter,
    mask_mode: MaskMode,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = source.dimensions();
    let mut canvas = ImageBuffer::from_pixel(width, height, fill);
    if width == 0 || height == 0 {
        return canvas;
    }

    let rotation = Rotation::new(angle_degrees, width, height);
    let matte = GrayImage::from_pixel(width, height, Luma([OPAQUE]));
    let mask_filter = match mask_mode {
        MaskMode::Binary => RotationFilter::Nearest,
        MaskMode::Soft => filter,
    };

    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = rotation.source_point(x, y);

            let coverage = match sample(&matte, sx, sy, mask_filter, Edge::Transparent) {
                Some(Luma([m])) => m,
                None => 0,
            };
            if coverage == 0 {
                continue;
            }

            if let Some(content) = sample(source, sx, sy, filter, Edge::Clamp) {
                blend_into(canvas.get_pixel_mut(x, y), &content, coverage);
            }
        }
    }

    canvas
}

/// Sample `image` at continuous coordinates (sx, sy).
///
/// Returns `None` when the point lies outside the image.
fn sample<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    sx: f64,
    sy: f64,
    filter: RotationFilter,
    edge: Edge,
) -> Option<P>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if sx < 0.0 || sy < 0.0 || sx >= width as f64 || sy >= height as f64 {
        return None;
    }

    match filter {
        RotationFilter::Nearest => Some(*image.get_pixel(sx as u32, sy as u32)),
        RotationFilter::Bilinear => Some(sample_bilinear(image, sx - 0.5, sy - 0.5, edge)),
    }
}

/// Bilinear interpolation in pixel-index space (pixel centers at integers).
fn sample_bilinear<P>(image: &ImageBuffer<P, Vec<u8>>, px: f64, py: f64, edge: Edge) -> P
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let x0 = px.floor();
    let y0 = py.floor();
    let fx = px - x0;
    let fy = py - y0;

    let channels = P::CHANNEL_COUNT as usize;
    let mut acc = [0.0f64; 4];

    let neighbors = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1.0, y0, fx * (1.0 - fy)),
        (x0, y0 + 1.0, (1.0 - fx) * fy),
        (x0 + 1.0, y0 + 1.0, fx * fy),
    ];

    for (nx, ny, weight) in neighbors {
        if weight == 0.0 {
            continue;
        }
        let inside = nx >= 0.0 && ny >= 0.0 && nx < width as f64 && ny < height as f64;
        let (ix, iy) = match (inside, edge) {
            (true, _) => (nx as u32, ny as u32),
            (false, Edge::Clamp) => (
                nx.clamp(0.0, (width - 1) as f64) as u32,
                ny.clamp(0.0, (height - 1) as f64) as u32,
            ),
            (false, Edge::Transparent) => continue,
        };
        for (slot, &value) in acc.iter_mut().zip(image.get_pixel(ix, iy).channels()) {
            *slot += value as f64 * weight;
        }
    }

    let mut out = [0u8; 4];
    for (dst, value) in out.iter_mut().zip(acc.iter()).take(channels) {
        *dst = value.round().clamp(0.0, 255.0) as u8;
    }
    *P::from_slice(&out[..channels])
}

/// Blend `content` over `dst` with 8-bit `coverage`.
#[inline]
fn blend_into<P>(dst: &mut P, content: &P, coverage: u8)
where
    P: Pixel<Subpixel = u8>,
{
    if coverage == OPAQUE {
        *dst = *content;
        return;
    }

    let m = coverage as u32;
    for (d, &s) in dst.channels_mut().iter_mut().zip(content.channels()) {
        *d = ((s as u32 * m + *d as u32 * (255 - m) + 127) / 255) as u8;
    }
}

/// Fill implied by an image's top-left pixel, alpha included.
///
/// Augmentation uses this as a guess at the background, so a transparent
/// background stays transparent. Images without alpha report it as opaque.
pub fn top_left_fill(image: &DynamicImage) -> Option<Rgba<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }
    let fill = match image {
        DynamicImage::ImageLuma8(buffer) => {
            let v = buffer.get_pixel(0, 0).0[0];
            Rgba([v, v, v, OPAQUE])
        }
        DynamicImage::ImageRgb8(buffer) => buffer.get_pixel(0, 0).to_rgba(),
        DynamicImage::ImageRgba8(buffer) => *buffer.get_pixel(0, 0),
        other => other.to_rgba8().get_pixel(0, 0).to_owned(),
    };
    Some(fill)
}
