//! Wave motif drawn across every icon.
//!
//! Each icon carries [`WAVE_COUNT`] polylines sampled every [`SAMPLE_STEP`] pixels
//! along the x axis. The middle wave is flat at the vertical centre, the outer two
//! tilt in opposite directions by up to [`AMPLITUDE`] pixels.

use image::{Rgb, RgbImage};

/// Number of wave lines drawn on each icon.
pub const WAVE_COUNT: u32 = 3;

/// Maximum vertical offset of a wave from the centre row.
pub const AMPLITUDE: f64 = 5.0;

/// Horizontal distance between consecutive wave points.
pub const SAMPLE_STEP: usize = 2;

/// Stroke width of the wave lines in pixels.
pub const STROKE_WIDTH: i32 = 2;

/// Compute the points of wave `index` on a `size`×`size` canvas.
///
/// `x` runs over `0, 2, 4, ...` below `size`; `y` is the centre row shifted by
/// `AMPLITUDE * (index - 1) * (x / size - 0.5) * 2`, truncated toward zero.
pub fn wave_points(size: u32, index: u32) -> Vec<(i32, i32)> {
    let center_y = (size / 2) as i32;
    let tilt = AMPLITUDE * (index as f64 - 1.0);

    (0..size)
        .step_by(SAMPLE_STEP)
        .map(|x| {
            let offset = tilt * (x as f64 / size as f64 - 0.5) * 2.0;
            (x as i32, center_y + offset as i32)
        })
        .collect()
}

/// Stroke connected segments through `points` onto the canvas.
///
/// Fewer than two points draw nothing. Pixels outside the canvas are clipped.
pub fn stroke_polyline(canvas: &mut RgbImage, points: &[(i32, i32)], color: Rgb<u8>) {
    if points.len() < 2 {
        return;
    }

    for segment in points.windows(2) {
        stroke_segment(canvas, segment[0], segment[1], color);
    }
}

/// Bresenham walk from `from` to `to` (both inclusive), widened to
/// [`STROKE_WIDTH`] pixels across the dominant axis.
fn stroke_segment(canvas: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
    let (x1, y1) = to;
    let (mut x, mut y) = from;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };

    // Shallow segments grow downwards, steep ones grow to the right
    let (nx, ny) = if dx >= -dy { (0, 1) } else { (1, 0) };

    let mut err = dx + dy;
    loop {
        for offset in 0..STROKE_WIDTH {
            put_clipped(canvas, x + nx * offset, y + ny * offset, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn put_clipped(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}
