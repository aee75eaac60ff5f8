//! Image exporters
//!
//! Writes augmented samples as BMP and normalized images back over their
//! source files.

use std::borrow::Cow;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

/// Extension of every augmented file.
pub const AUGMENTED_EXTENSION: &str = "bmp";

/// Export an image as a BMP file.
///
/// The file is created or truncated; existing files at `path` are replaced.
pub fn export_bmp<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<(), String> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Bmp)
        .map_err(|e| format!("Failed to write BMP {}: {}", path.display(), e))
}

/// Overwrite `path` with `image` encoded as `format`.
///
/// This is destructive: the previous contents of `path` are lost. Greyscale
/// images are expanded to RGB for formats whose encoder has no grey mode.
pub fn overwrite_image<P: AsRef<Path>>(
    image: &DynamicImage,
    path: P,
    format: ImageFormat,
) -> Result<(), String> {
    let path = path.as_ref();
    encodable(image, format)
        .save_with_format(path, format)
        .map_err(|e| format!("Failed to overwrite {}: {}", path.display(), e))
}

/// `image` in a layout the `format` encoder accepts.
fn encodable(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match (format, image) {
        // GIF only encodes RGB(A) frames
        (ImageFormat::Gif, DynamicImage::ImageLuma8(_)) => {
            Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
        }
        (ImageFormat::Gif, DynamicImage::ImageLumaA8(_)) => {
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        _ => Cow::Borrowed(image),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::decode_with_format;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_export_bmp_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.bmp");
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([1, 2, 3])));

        export_bmp(&image, &path).unwrap();

        let decoded = decode_with_format(&path).unwrap();
        assert_eq!(decoded.format, ImageFormat::Bmp);
        assert_eq!(decoded.image.to_rgb8().get_pixel(3, 2), &Rgb([1, 2, 3]));
    }

    #[test]
    fn test_export_bmp_gray() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.bmp");
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(5, 5, Luma([42])));

        export_bmp(&image, &path).unwrap();

        let decoded = decode_with_format(&path).unwrap();
        // 8-bit BMPs may come back as palette-expanded RGB
        assert_eq!(decoded.image.to_rgb8().get_pixel(2, 2), &Rgb([42, 42, 42]));
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.png");
        RgbImage::from_pixel(8, 8, Rgb([255, 0, 0])).save(&path).unwrap();

        let replacement = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([7])));
        overwrite_image(&replacement, &path, ImageFormat::Png).unwrap();

        let decoded = decode_with_format(&path).unwrap();
        assert_eq!(decoded.image.width(), 2);
        assert_eq!(decoded.image.to_luma8().get_pixel(1, 1), &Luma([7]));
    }

    #[test]
    fn test_overwrite_gif_with_grey_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.gif");
        RgbImage::from_pixel(6, 6, Rgb([127, 127, 127]))
            .save_with_format(&path, ImageFormat::Gif)
            .unwrap();

        let replacement = GrayImage::from_fn(4, 4, |x, _| Luma([if x < 2 { 0 } else { 255 }]));
        overwrite_image(&DynamicImage::ImageLuma8(replacement.clone()), &path, ImageFormat::Gif)
            .unwrap();

        let decoded = decode_with_format(&path).unwrap();
        assert_eq!(decoded.format, ImageFormat::Gif);
        assert_eq!(decoded.image.to_luma8(), replacement);
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bmp");
        let image = DynamicImage::ImageLuma8(GrayImage::new(1, 1));

        let result = export_bmp(&image, &path);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to write BMP"));
    }
}
