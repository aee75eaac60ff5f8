//! Color parsing for `--grey` and `--fill`.

use dataprep_core::models::Color;

/// Parse an 8-bit color in format "R,G,B"
///
/// # Arguments
/// * `color_str` - A string in format "R,G,B" with values 0-255
///
/// # Returns
/// The parsed [`Color`]
pub fn parse_color(color_str: &str) -> Result<Color, String> {
    let parts: Vec<&str> = color_str.split(',').collect();
    if parts.len() != 3 {
        return Err(format!(
            "Color must be in format R,G,B (e.g., 127,127,127), got: {}",
            color_str
        ));
    }

    let r = parse_channel(parts[0], "red")?;
    let g = parse_channel(parts[1], "green")?;
    let b = parse_channel(parts[2], "blue")?;

    Ok(Color::new(r, g, b))
}

fn parse_channel(part: &str, name: &str) -> Result<u8, String> {
    part.trim()
        .parse::<u8>()
        .map_err(|_| format!("Invalid {} value (expected 0-255): {}", name, part.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_valid() {
        assert_eq!(parse_color("127,127,127").unwrap(), Color::MID_GREY);
        assert_eq!(parse_color(" 0, 10 ,255 ").unwrap(), Color::new(0, 10, 255));
    }

    #[test]
    fn test_parse_color_wrong_arity() {
        let err = parse_color("1,2").unwrap_err();
        assert!(err.contains("R,G,B"));
        assert!(parse_color("1,2,3,4").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_parse_color_out_of_range() {
        let err = parse_color("0,256,0").unwrap_err();
        assert!(err.contains("green"), "unexpected error: {}", err);
        assert!(parse_color("-1,0,0").is_err());
        assert!(parse_color("a,b,c").is_err());
    }
}
