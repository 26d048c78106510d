#![doc = include_str!("../README.md")]

pub mod config;
pub mod display;
pub mod error;
pub mod io;
pub mod raster;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::display::{show_image, FigureSize, ImageSink};
pub use crate::error::DrawError;
pub use crate::raster::{draw_line, draw_line_white, Canvas, LineRasterizer};
pub use crate::types::{DrawCommand, Line, Size, WHITE};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use line_overlay::prelude::*;
///
/// let size = Size::new(640, 480);
/// let mut canvas = ImageCanvas::new(size.width, size.height, image::Rgb([0, 0, 0]));
/// draw_line_white(&Line::new(0.0, 1.0, -240.0), &mut canvas, size).unwrap();
/// ```
pub mod prelude {
    pub use crate::raster::{draw_line, draw_line_white, Canvas, ImageCanvas, SegmentRecorder};
    pub use crate::types::{Line, Size, WHITE};
}
