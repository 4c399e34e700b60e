//! Turn pixel data into self-contained HTML markup.
//!
//! Two renderings of the same row-major pixel buffer: a `<table>` where
//! every cell is a one-pixel `<td>`, and a `<canvas>` with an inline
//! script that writes the pixels into its `ImageData`. The table drops
//! alpha; the canvas can carry it.
//!
//! With the default `decode` feature, images can be rendered straight
//! from files via the `image` crate.
//!
//! ```
//! use hako_html::{Pixel, render_table};
//!
//! let html = render_table(1, 1, &[Pixel::rgb(255, 0, 0)]).unwrap();
//! assert!(html.contains("bgcolor=#ff0000"));
//! ```

pub use self::error::{RenderError, Result};
pub use self::pixel::Pixel;
pub use self::render::{render_canvas, render_table};

#[cfg(feature = "decode")]
pub use self::decode::{render_canvas_from_file, render_table_from_file};

#[cfg(feature = "decode")]
mod decode;
mod error;
mod pixel;
mod render;
