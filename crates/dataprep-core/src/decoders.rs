//! Image decoding
//!
//! Thin wrappers over the `image` crate that keep track of the on-disk format,
//! so normalization can write a file back the way it found it.

use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

/// Decoded image plus the format it was stored in
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,

    /// Format detected from the file contents, falling back to the extension
    pub format: ImageFormat,
}

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, String> {
    decode_with_format(path).map(|decoded| decoded.image)
}

/// Decode an image and report its on-disk format.
pub fn decode_with_format<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)
        .map_err(|e| format!("Failed to open image {}: {}", path.display(), e))?
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image {}: {}", path.display(), e))?;

    let format = match reader.format() {
        Some(format) => format,
        None => ImageFormat::from_path(path)
            .map_err(|_| format!("Unrecognized image format: {}", path.display()))?,
    };

    let image = reader
        .decode()
        .map_err(|e| format!("Failed to decode image {}: {}", path.display(), e))?;

    Ok(DecodedImage { image, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_decode_png_roundtrip_keeps_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let decoded = decode_with_format(&path).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!(decoded.image.width(), 3);
        assert_eq!(decoded.image.height(), 2);
        assert_eq!(decoded.image.to_rgb8().get_pixel(0, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_format_detected_from_contents() {
        // PNG bytes behind a .bmp name are still decoded as PNG
        let dir = tempdir().unwrap();
        let png_path = dir.path().join("real.png");
        GrayImage::from_pixel(2, 2, Luma([200])).save(&png_path).unwrap();
        let misnamed = dir.path().join("misnamed.bmp");
        fs::copy(&png_path, &misnamed).unwrap();

        let decoded = decode_with_format(&misnamed).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let result = decode_image(dir.path().join("nope.png"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open image"));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();

        let result = decode_image(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to decode image"));
    }
}
