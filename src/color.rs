use anyhow::Result;
use image::Rgb;
use std::str::FromStr;

/// Background fill of every icon.
pub const BACKGROUND: &str = "#667eea";

/// Colour of the wave strokes.
pub const STROKE: &str = "#ffffff";

/// Parse a CSS colour string into an opaque RGB pixel.
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {}", color))?;

    Ok(Rgb([
        to_channel(srgb.red),
        to_channel(srgb.green),
        to_channel(srgb.blue),
    ]))
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.).round() as u8
}
