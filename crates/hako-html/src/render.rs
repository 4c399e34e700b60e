//! Markup generation for the table and canvas renderings.

use crate::error::{RenderError, Result};
use crate::pixel::Pixel;

fn check_count(width: u32, height: u32, pixels: &[Pixel]) -> Result<()> {
    let expected = u64::from(width) * u64::from(height);
    let actual = pixels.len() as u64;
    if expected != actual {
        return Err(RenderError::PixelCountMismatch { expected, actual });
    }
    Ok(())
}

/// Render pixels as a borderless `<table>` where every cell is one pixel.
///
/// Rows are `<tr height=1>`; the first row's cells carry `width=1` so the
/// columns take their size from it, later rows are plain. Pixels are laid
/// out row-major and must number exactly `width * height`. Alpha is
/// ignored here, a table cell has no transparency.
pub fn render_table(width: u32, height: u32, pixels: &[Pixel]) -> Result<String> {
    check_count(width, height, pixels)?;

    let mut out = String::with_capacity(pixels.len() * 32 + 64);
    out.push_str(&format!(
        "<table border=0 cellpadding=0 cellspacing=0 width={} height={}>",
        width, height
    ));
    for (row, cells) in pixels.chunks(width.max(1) as usize).enumerate() {
        out.push_str("<tr height=1>");
        for p in cells {
            if row == 0 {
                out.push_str(&format!(
                    "<td width=1 bgcolor=#{:02x}{:02x}{:02x}></td>",
                    p.r, p.g, p.b
                ));
            } else {
                out.push_str(&format!(
                    "<td bgcolor=#{:02x}{:02x}{:02x}></td>",
                    p.r, p.g, p.b
                ));
            }
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    Ok(out)
}

/// Render pixels as a `<canvas>` plus an inline script that fills its
/// `ImageData` from a flat `r,g,b,a` array.
///
/// With `has_alpha` false every pixel is emitted fully opaque, whatever
/// its stored alpha. Pixels are row-major, `width * height` of them.
pub fn render_canvas(
    canvas_id: &str,
    width: u32,
    height: u32,
    pixels: &[Pixel],
    has_alpha: bool,
) -> Result<String> {
    check_count(width, height, pixels)?;

    let mut out = String::with_capacity(pixels.len() * 16 + 256);
    out.push_str(&format!(
        concat!(
            "<canvas id=\"{id}\" width=\"{w}\" height=\"{h}\"></canvas>",
            "<script>",
            "let canvas = document.getElementById(\"{id}\");",
            "let context = canvas.getContext(\"2d\");",
            "let imageData = context.createImageData(canvas.width, canvas.height);",
            "let tmp = [",
        ),
        id = canvas_id,
        w = width,
        h = height,
    ));

    let mut first = true;
    for p in pixels {
        if !first {
            out.push(',');
        }
        first = false;
        let alpha = if has_alpha { p.a } else { 255 };
        out.push_str(&format!("{},{},{},{}", p.r, p.g, p.b, alpha));
    }

    out.push_str(concat!(
        "];",
        "for (let i = 0; i < tmp.length; i++) {",
        "imageData.data[i] = tmp[i];",
        "}",
        "context.putImageData(imageData, 0, 0);",
        "</script>",
    ));
    Ok(out)
}
