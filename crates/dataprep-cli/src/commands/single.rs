//! Single-image commands.

use std::path::{Path, PathBuf};

use dataprep_cli::{parse_color, parse_filter};
use dataprep_core::models::Color;
use dataprep_core::{invert_colors, recolor_exact, rotate_with_rgba_fill, top_left_fill};
use image::{DynamicImage, Rgba};

/// Rotate one image, filling exposed corners.
///
/// Without `--fill` the image's top-left pixel (alpha included) is used as
/// the fill; an explicit `--fill` is opaque.
pub fn cmd_rotate(
    input: PathBuf,
    output: PathBuf,
    angle: f64,
    fill: Option<String>,
    filter: Option<String>,
) -> Result<(), String> {
    let image = dataprep_core::decoders::decode_image(&input)?;

    let fill = match fill {
        Some(fill) => {
            let color = parse_color(&fill)?;
            Rgba([color.r, color.g, color.b, 255])
        }
        None => top_left_fill(&image).ok_or_else(|| "Image has no pixels".to_string())?,
    };
    let filter = parse_filter(filter.as_deref())?.unwrap_or_default();

    println!(
        "Rotating {} by {} deg (fill {:?}, {:?})",
        input.display(),
        angle,
        fill.0,
        filter
    );
    let rotated = rotate_with_rgba_fill(&image, angle, fill, filter)?;

    save(&rotated, &output)
}

/// Whiten the grey matte of one image and swap black and white.
pub fn cmd_invert(input: PathBuf, output: PathBuf, grey: Option<String>) -> Result<(), String> {
    let image = dataprep_core::decoders::decode_image(&input)?;
    let grey = match grey {
        Some(grey) => parse_color(&grey)?,
        None => Color::MID_GREY,
    };

    println!("Inverting {} (grey background {})", input.display(), grey);
    let whitened = recolor_exact(&image, grey, Color::WHITE);
    let inverted = invert_colors(&DynamicImage::ImageLuma8(whitened));

    save(&DynamicImage::ImageLuma8(inverted), &output)
}

/// Save with the format implied by the output extension.
fn save(image: &DynamicImage, output: &Path) -> Result<(), String> {
    image
        .save(output)
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
    println!("Output: {}", output.display());
    Ok(())
}
