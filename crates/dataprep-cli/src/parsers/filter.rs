//! Rotation filter parsing.

use dataprep_core::models::RotationFilter;

/// Parse rotation filter from string
///
/// Accepts "nearest" (default) or "bilinear", case-insensitive.
pub fn parse_filter(filter_str: Option<&str>) -> Result<Option<RotationFilter>, String> {
    match filter_str {
        Some(s) => match s.trim().to_lowercase().as_str() {
            "nearest" => Ok(Some(RotationFilter::Nearest)),
            "bilinear" => Ok(Some(RotationFilter::Bilinear)),
            _ => Err(format!(
                "Unknown rotation filter: {}. Valid options: nearest, bilinear",
                s
            )),
        },
        None => Ok(None),
    }
}
