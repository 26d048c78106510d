//! Implicit-line rasterization.
//!
//! Turns `a*x + b*y + c = 0` into a single stroked segment spanning the
//! canvas. The default endpoint rule picks the pair of parallel canvas edges
//! the line is closer to perpendicular to:
//!
//! - steep lines (`a != 0` and the x-span between the top and bottom rows is
//!   narrower than the canvas) are cut at `y = 0` and `y = height`;
//! - everything else is cut at `x = 0` and `x = width`.
//!
//! This is not exact clipping; endpoints of shallow-but-not-flat lines may
//! land outside the canvas and are left for the canvas to handle. Use
//! [`ClipMode::Exact`] for Liang–Barsky clipping instead.
use super::canvas::Canvas;
use super::clip::clip_line_to_rect;
use crate::error::DrawError;
use crate::types::{Line, Size, WHITE};
use image::Rgb;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Stroke width used by [`draw_line`].
pub const STROKE_WIDTH: u32 = 4;

/// How endpoints are chosen for a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipMode {
    /// Cut against top/bottom or left/right edges depending on slope.
    #[default]
    Heuristic,
    /// Exact intersection with the canvas rectangle.
    Exact,
}

/// Parameters for [`LineRasterizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterParams {
    pub stroke_width: u32,
    pub clip: ClipMode,
}

impl Default for RasterParams {
    fn default() -> Self {
        Self {
            stroke_width: STROKE_WIDTH,
            clip: ClipMode::Heuristic,
        }
    }
}

/// Draws implicit lines with a fixed stroke and clipping policy.
#[derive(Clone, Debug, Default)]
pub struct LineRasterizer {
    params: RasterParams,
}

impl LineRasterizer {
    pub fn new(params: RasterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RasterParams {
        &self.params
    }

    /// Endpoints the rasterizer would stroke for `line`, or `None` when exact
    /// clipping finds no overlap with the canvas.
    pub fn endpoints(
        &self,
        line: &Line,
        size: Size,
    ) -> Result<Option<([f32; 2], [f32; 2])>, DrawError> {
        match self.params.clip {
            ClipMode::Heuristic => boundary_endpoints(line, size).map(Some),
            ClipMode::Exact => {
                validate(line, size)?;
                let clipped = clip_line_to_rect(line, size);
                if clipped.is_none() {
                    debug!("LineRasterizer: line {line:?} misses {size:?} canvas");
                }
                Ok(clipped)
            }
        }
    }

    /// Draw `line` onto `canvas`. Returns whether a segment was issued.
    ///
    /// With [`ClipMode::Heuristic`] exactly one segment is issued for every
    /// valid line. On error nothing is drawn.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        line: &Line,
        canvas: &mut C,
        size: Size,
        color: Rgb<u8>,
    ) -> Result<bool, DrawError> {
        let Some((p0, p1)) = self.endpoints(line, size)? else {
            return Ok(false);
        };
        canvas.draw_segment(p0, p1, self.params.stroke_width, color);
        Ok(true)
    }
}

/// Draw `line` across a canvas of `size` with a width-4 stroke.
///
/// Issues exactly one segment to `canvas`, or returns an error and draws
/// nothing.
pub fn draw_line<C: Canvas + ?Sized>(
    line: &Line,
    canvas: &mut C,
    size: Size,
    color: Rgb<u8>,
) -> Result<(), DrawError> {
    let (p0, p1) = boundary_endpoints(line, size)?;
    canvas.draw_segment(p0, p1, STROKE_WIDTH, color);
    Ok(())
}

/// [`draw_line`] in opaque white.
pub fn draw_line_white<C: Canvas + ?Sized>(
    line: &Line,
    canvas: &mut C,
    size: Size,
) -> Result<(), DrawError> {
    draw_line(line, canvas, size, WHITE)
}

/// Endpoints chosen by the slope heuristic.
pub fn boundary_endpoints(line: &Line, size: Size) -> Result<([f32; 2], [f32; 2]), DrawError> {
    validate(line, size)?;
    let w = size.width as f32;
    let h = size.height as f32;

    let vertical = match (line.x_at(0.0), line.x_at(h)) {
        (Some(top), Some(bottom)) if line.b == 0.0 || row_span(line, h) < w as f64 => {
            Some((top, bottom))
        }
        _ => None,
    };

    let (p0, p1) = match vertical {
        Some((top, bottom)) => {
            debug!("LineRasterizer: {line:?} clipped against top/bottom edges");
            ([top, 0.0], [bottom, h])
        }
        None => {
            // a == 0 or the line is shallow; b != 0 is guaranteed when a == 0
            let (Some(left), Some(right)) = (line.y_at(0.0), line.y_at(w)) else {
                return Err(DrawError::DegenerateLine);
            };
            debug!("LineRasterizer: {line:?} clipped against left/right edges");
            ([0.0, left], [w, right])
        }
    };

    if !(p0.iter().chain(p1.iter()).all(|v| v.is_finite())) {
        warn!("LineRasterizer: non-finite endpoints {p0:?} -> {p1:?} for {line:?}");
    }
    Ok((p0, p1))
}

/// Horizontal distance between the crossings of rows `y = 0` and `y = h`,
/// in f64 so huge intercepts do not overflow to infinities.
fn row_span(line: &Line, h: f32) -> f64 {
    let (a, b, c) = (line.a as f64, line.b as f64, line.c as f64);
    let top = -c / a;
    let bottom = -(b * h as f64 + c) / a;
    (top - bottom).abs()
}

fn validate(line: &Line, size: Size) -> Result<(), DrawError> {
    if line.is_degenerate() {
        return Err(DrawError::DegenerateLine);
    }
    if size.is_empty() {
        return Err(DrawError::EmptyCanvas {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}
