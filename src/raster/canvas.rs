//! Drawing surfaces accepted by the rasterizer.
//!
//! - [`Canvas`]: the one primitive the rasterizer needs, "stroke a segment".
//! - [`ImageCanvas`]: strokes onto an owned `RgbImage` with `imageproc`.
//! - [`SegmentRecorder`]: keeps every command instead of painting it.
use super::clip::{clip_segment, Rect};
use crate::types::DrawCommand;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use log::warn;

/// Mutable drawing surface exposing a segment primitive.
pub trait Canvas {
    /// Stroke the segment `p0 → p1` with the given width and colour.
    ///
    /// Endpoints may lie outside the drawable area or be arbitrarily large;
    /// implementations decide how to handle them.
    fn draw_segment(&mut self, p0: [f32; 2], p1: [f32; 2], width: u32, color: Rgb<u8>);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_segment(&mut self, p0: [f32; 2], p1: [f32; 2], width: u32, color: Rgb<u8>) {
        (**self).draw_segment(p0, p1, width, color)
    }
}

/// Canvas backed by an RGB raster.
#[derive(Clone, Debug)]
pub struct ImageCanvas {
    image: RgbImage,
}

impl ImageCanvas {
    /// Blank canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl Canvas for ImageCanvas {
    fn draw_segment(&mut self, p0: [f32; 2], p1: [f32; 2], width: u32, color: Rgb<u8>) {
        if !(p0.iter().chain(p1.iter()).all(|v| v.is_finite())) {
            warn!("ImageCanvas: skipping segment with non-finite endpoint {p0:?} -> {p1:?}");
            return;
        }
        if self.image.width() == 0 || self.image.height() == 0 {
            return;
        }
        let half = width.max(1) as f32 * 0.5;
        // keep a stroke-wide margin so caps that poke into the image still land
        let bounds = Rect {
            x0: 0.0,
            y0: 0.0,
            x1: self.image.width() as f32,
            y1: self.image.height() as f32,
        }
        .inflate(half + 1.0);
        let Some((q0, q1)) = clip_segment(p0, p1, &bounds) else {
            return;
        };
        stroke(&mut self.image, q0, q1, half, color);
    }
}

fn stroke(image: &mut RgbImage, p0: [f32; 2], p1: [f32; 2], half: f32, color: Rgb<u8>) {
    let dx = p1[0] - p0[0];
    let dy = p1[1] - p0[1];
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-3 || half < 1.0 {
        if half < 1.0 {
            imageproc::drawing::draw_line_segment_mut(image, (p0[0], p0[1]), (p1[0], p1[1]), color);
        } else {
            let center = (p0[0].round() as i32, p0[1].round() as i32);
            draw_filled_circle_mut(image, center, half.round() as i32, color);
        }
        return;
    }
    let nx = -dy / len * half;
    let ny = dx / len * half;
    let corners = [
        [p0[0] + nx, p0[1] + ny],
        [p1[0] + nx, p1[1] + ny],
        [p1[0] - nx, p1[1] - ny],
        [p0[0] - nx, p0[1] - ny],
    ];
    let poly: Vec<Point<i32>> = corners
        .iter()
        .map(|c| Point::new(c[0].round() as i32, c[1].round() as i32))
        .collect();
    if poly[0] == poly[poly.len() - 1] {
        draw_filled_circle_mut(image, (poly[0].x, poly[0].y), half.round() as i32, color);
        return;
    }
    draw_polygon_mut(image, &poly, color);
}

/// Canvas that records commands instead of rasterising them.
#[derive(Clone, Debug, Default)]
pub struct SegmentRecorder {
    commands: Vec<DrawCommand>,
}

impl SegmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Replay every recorded command onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, target: &mut C) {
        for cmd in &self.commands {
            target.draw_segment(cmd.p0, cmd.p1, cmd.width, cmd.color());
        }
    }
}

impl Canvas for SegmentRecorder {
    fn draw_segment(&mut self, p0: [f32; 2], p1: [f32; 2], width: u32, color: Rgb<u8>) {
        self.commands.push(DrawCommand::new(p0, p1, width, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn image_canvas_paints_along_segment() {
        let mut canvas = ImageCanvas::new(50, 50, BLACK);
        canvas.draw_segment([0.0, 25.0], [50.0, 25.0], 4, RED);
        let img = canvas.image();
        for x in [2u32, 10, 25, 40, 47] {
            assert_eq!(*img.get_pixel(x, 25), RED, "x={x}");
        }
        assert_eq!(*img.get_pixel(25, 10), BLACK);
        assert_eq!(*img.get_pixel(25, 40), BLACK);
    }

    #[test]
    fn image_canvas_tolerates_huge_coordinates() {
        let mut canvas = ImageCanvas::new(40, 40, BLACK);
        canvas.draw_segment([-1.0e9, 20.0], [1.0e9, 20.0], 4, RED);
        assert_eq!(*canvas.image().get_pixel(20, 20), RED);
        canvas.draw_segment([f32::INFINITY, 0.0], [0.0, 0.0], 4, RED);
        assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);
    }

    #[test]
    fn segment_outside_leaves_image_untouched() {
        let mut canvas = ImageCanvas::new(20, 20, BLACK);
        canvas.draw_segment([-100.0, -50.0], [100.0, -50.0], 4, RED);
        assert!(canvas.image().pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn recorder_replays_onto_image() {
        let mut recorder = SegmentRecorder::new();
        recorder.draw_segment([10.0, 0.0], [10.0, 30.0], 4, RED);
        assert_eq!(recorder.len(), 1);

        let mut canvas = ImageCanvas::new(30, 30, BLACK);
        recorder.replay(&mut canvas);
        assert_eq!(*canvas.image().get_pixel(10, 15), RED);
    }
}
