use crate::color::{parse_color, BACKGROUND, STROKE};
use crate::wave::{stroke_polyline, wave_points, WAVE_COUNT};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage,
};
use log::debug;
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Icons produced by a run, in generation order.
pub const ICON_SET: [(u32, &str); 3] = [
    (16, "icon16.png"),
    (48, "icon48.png"),
    (128, "icon128.png"),
];

/// Largest side length accepted by [`generate`].
pub const MAX_ICON_SIZE: u32 = 16384;

// Define Args struct for library compilation
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
        }
    }
}

/// Generate every icon of [`ICON_SET`] inside `args.output`.
///
/// Stops at the first failure; icons written before it are left in place.
pub fn generate_icons(args: &Args) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    for (size, filename) in ICON_SET {
        generate(size, &args.output.join(filename))?;
    }

    println!("All icons created.");
    Ok(())
}

/// Render a `size`×`size` icon and write it as PNG to `path`, replacing any
/// existing file.
pub fn generate(size: u32, path: &Path) -> Result<()> {
    let canvas = render_icon(size)?;

    // Encode up front so a codec failure never leaves an empty file behind
    let mut buf = Vec::new();
    write_png(&canvas, &mut buf)?;
    debug!("Encoded {size}x{size} icon into {} bytes", buf.len());

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file: {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    out_file
        .write_all(&buf)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    out_file.flush()?;

    let name = path.file_name().unwrap_or(path.as_os_str());
    println!("created: {} ({size}x{size})", name.to_string_lossy());
    Ok(())
}

/// Draw the icon canvas: background fill plus the wave lines.
pub fn render_icon(size: u32) -> Result<RgbImage> {
    validate_size(size)?;

    let background = parse_color(BACKGROUND)?;
    let stroke = parse_color(STROKE)?;

    let mut canvas = RgbImage::from_pixel(size, size, background);
    for index in 0..WAVE_COUNT {
        let points = wave_points(size, index);
        debug!("Wave {index} on {size}x{size} canvas: {} points", points.len());
        stroke_polyline(&mut canvas, &points, stroke);
    }

    Ok(canvas)
}

fn validate_size(size: u32) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Invalid icon size: {size} (must be positive)");
    }
    if size > MAX_ICON_SIZE {
        anyhow::bail!("Invalid icon size: {size} (must be at most {MAX_ICON_SIZE})");
    }
    Ok(())
}

// Encode the canvas as an RGB PNG with compression
fn write_png<W: Write>(canvas: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgb8,
        )
        .context("Failed to encode PNG")?;
    Ok(())
}
