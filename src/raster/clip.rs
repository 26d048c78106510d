//! Liang–Barsky clipping of lines and segments against axis-aligned rectangles.
use crate::types::{Line, Size};

/// Axis-aligned rectangle `[x0, x1] × [y0, y1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn from_size(size: Size) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: size.width as f32,
            y1: size.height as f32,
        }
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn inflate(self, margin: f32) -> Self {
        Self {
            x0: self.x0 - margin,
            y0: self.y0 - margin,
            x1: self.x1 + margin,
            y1: self.y1 + margin,
        }
    }
}

/// Clip the infinite line to `[0, width] × [0, height]`.
///
/// Returns `None` for degenerate lines and for lines that miss the rectangle.
/// Endpoints are ordered by increasing parameter along `(-b, a)` flipped so
/// that x (or y, for vertical lines) increases.
pub fn clip_line_to_rect(line: &Line, size: Size) -> Option<([f32; 2], [f32; 2])> {
    if line.is_degenerate() {
        return None;
    }
    // normalise in f64 so tiny coefficients do not underflow
    let (a, b, c) = (line.a as f64, line.b as f64, line.c as f64);
    let norm = a.hypot(b);
    let (a, b, c) = (a / norm, b / norm, c / norm);
    let origin = [(-a * c) as f32, (-b * c) as f32];
    let mut dir = [(-b) as f32, a as f32];
    if dir[0] < 0.0 || (dir[0] == 0.0 && dir[1] < 0.0) {
        dir = [-dir[0], -dir[1]];
    }
    let rect = Rect::from_size(size);
    let (t0, t1) = clip_parametric(origin, dir, f32::NEG_INFINITY, f32::INFINITY, &rect)?;
    Some((point_at(origin, dir, t0), point_at(origin, dir, t1)))
}

/// Clip the finite segment `p0 → p1` to `rect`.
pub fn clip_segment(p0: [f32; 2], p1: [f32; 2], rect: &Rect) -> Option<([f32; 2], [f32; 2])> {
    let dir = [p1[0] - p0[0], p1[1] - p0[1]];
    let (t0, t1) = clip_parametric(p0, dir, 0.0, 1.0, rect)?;
    Some((point_at(p0, dir, t0), point_at(p0, dir, t1)))
}

fn point_at(origin: [f32; 2], dir: [f32; 2], t: f32) -> [f32; 2] {
    [origin[0] + t * dir[0], origin[1] + t * dir[1]]
}

fn clip_parametric(
    origin: [f32; 2],
    dir: [f32; 2],
    mut t0: f32,
    mut t1: f32,
    rect: &Rect,
) -> Option<(f32, f32)> {
    let checks = [
        (-dir[0], origin[0] - rect.x0),
        (dir[0], rect.x1 - origin[0]),
        (-dir[1], origin[1] - rect.y0),
        (dir[1], rect.y1 - origin[1]),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            // parallel to this edge: reject when outside
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    (t0 <= t1).then_some((t0, t1))
}
