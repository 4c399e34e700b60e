//! File-based entry points: decode an image, then render it.

use std::path::Path;

use crate::error::Result;
use crate::pixel::Pixel;
use crate::render::{render_canvas, render_table};

fn load(path: &Path) -> Result<(u32, u32, Vec<Pixel>, bool)> {
    let img = image::open(path)?;
    let has_alpha = img.color().has_alpha();
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba
        .pixels()
        .map(|p| Pixel::rgba(p[0], p[1], p[2], p[3]))
        .collect();
    Ok((width, height, pixels, has_alpha))
}

/// Decode an image file and render it as a `<table>`.
pub fn render_table_from_file(path: impl AsRef<Path>) -> Result<String> {
    let (width, height, pixels, _) = load(path.as_ref())?;
    render_table(width, height, &pixels)
}

/// Decode an image file and render it as a `<canvas>`. Alpha is carried
/// through only when the source format has an alpha channel.
pub fn render_canvas_from_file(path: impl AsRef<Path>, canvas_id: &str) -> Result<String> {
    let (width, height, pixels, has_alpha) = load(path.as_ref())?;
    render_canvas(canvas_id, width, height, &pixels, has_alpha)
}
