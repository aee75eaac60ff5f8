//! Shared data types
//!
//! Colors and the small option enums used by the transforms and batch drivers.

use image::Rgb;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple.
///
/// Used both as a rotation corner fill and as a recolor match/replacement.
/// Equality is exact; there is no tolerance anywhere a `Color` is matched.
/// Serialized as a plain `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Matte grey some source datasets use instead of a white background.
    pub const MID_GREY: Color = Color::new(127, 127, 127);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// True when the first three channels of `channels` equal this color.
    #[inline]
    pub fn matches(self, channels: &[u8]) -> bool {
        channels.len() >= 3 && channels[0] == self.r && channels[1] == self.g && channels[2] == self.b
    }

    /// ITU-R 601-2 luma, rounded to nearest.
    ///
    /// Grey inputs (r == g == b) map to themselves exactly.
    #[inline]
    pub fn luma(self) -> u8 {
        luma_601(self.r, self.g, self.b)
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

/// ITU-R 601-2 luma transform with integer rounding.
#[inline]
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    ((weighted + 500) / 1000) as u8
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<Rgb<u8>> for Color {
    fn from(rgb: Rgb<u8>) -> Self {
        Color::from(rgb.0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Resampling filter used when rotating an image and its mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationFilter {
    /// Nearest-neighbor sampling; pairs with a binary mask
    #[default]
    Nearest,

    /// Bilinear sampling; pairs with a soft 8-bit coverage mask
    Bilinear,
}

/// Shape of the matte that decides where rotated content covers the fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskMode {
    /// Every pixel is either fully rotated content or fully fill
    Binary,

    /// Continuous coverage so rotated edges blend into the fill
    Soft,
}

impl MaskMode {
    /// Mask mode implied by a rotation filter.
    ///
    /// Nearest-neighbor sampling cannot produce partial coverage, so it always
    /// gets a binary mask.
    pub fn for_filter(filter: RotationFilter) -> Self {
        match filter {
            RotationFilter::Nearest => MaskMode::Binary,
            RotationFilter::Bilinear => MaskMode::Soft,
        }
    }
}

/// What a batch driver does when a single file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the run at the first failing file
    #[default]
    Abort,

    /// Record the failure in the report and move on to the next file
    Continue,
}
