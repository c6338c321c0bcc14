use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use placeholder_icons::color::{parse_color, BACKGROUND, STROKE};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icon128.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open image: {}", path))?
        .decode()
        .with_context(|| format!("Failed to decode image: {}", path))?;

    let background = parse_color(BACKGROUND)?;
    let stroke = parse_color(STROKE)?;

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());
    println!("Color type: {:?}", img.color());

    let rgb_img = img.to_rgb8();
    let mut background_count = 0;
    let mut stroke_count = 0;
    let mut other_count = 0;

    for pixel in rgb_img.pixels() {
        if *pixel == background {
            background_count += 1;
        } else if *pixel == stroke {
            stroke_count += 1;
        } else {
            other_count += 1;
        }
    }

    println!("\nPixel analysis:");
    println!("  background: {}", background_count);
    println!("  stroke:     {}", stroke_count);
    println!("  other:      {}", other_count);

    if img.width() == img.height() && other_count == 0 && stroke_count > 0 {
        println!("✓ Placeholder icon looks valid");
    } else {
        println!("⚠ Icon does not match the placeholder layout");
    }

    Ok(())
}
