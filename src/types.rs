use image::Rgb;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Opaque white, the default stroke colour.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Line in implicit form: `a*x + b*y + c = 0`.
///
/// `a` and `b` must not both be zero. Coefficients are not normalised; any
/// non-zero multiple describes the same line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Line {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Line {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Line through two points, normalised so that `a² + b² = 1`.
    ///
    /// Returns the degenerate zero line when `p0 == p1`.
    pub fn through(p0: [f32; 2], p1: [f32; 2]) -> Self {
        // homogeneous points: the joining line is their cross product
        let h0 = Vector3::new(p0[0], p0[1], 1.0);
        let h1 = Vector3::new(p1[0], p1[1], 1.0);
        let l = h0.cross(&h1);
        let norm = l[0].hypot(l[1]);
        if norm == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self::from(l / norm)
    }

    /// True when both direction coefficients vanish.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// x-coordinate where the line crosses the horizontal level `y`.
    /// `None` for horizontal lines (`a == 0`).
    #[inline]
    pub fn x_at(&self, y: f32) -> Option<f32> {
        (self.a != 0.0).then(|| -(self.b * y + self.c) / self.a)
    }

    /// y-coordinate where the line crosses the vertical level `x`.
    /// `None` for vertical lines (`b == 0`).
    #[inline]
    pub fn y_at(&self, x: f32) -> Option<f32> {
        (self.b != 0.0).then(|| -(self.a * x + self.c) / self.b)
    }

    /// Signed residual `a*x + b*y + c` at a point.
    #[inline]
    pub fn eval(&self, p: [f32; 2]) -> f32 {
        self.a * p[0] + self.b * p[1] + self.c
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[f32; 3]> for Line {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Line> for [f32; 3] {
    fn from(line: Line) -> Self {
        line.to_array()
    }
}

impl From<(f32, f32, f32)> for Line {
    fn from((a, b, c): (f32, f32, f32)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<Vector3<f32>> for Line {
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Line> for Vector3<f32> {
    fn from(line: Line) -> Self {
        Vector3::new(line.a, line.b, line.c)
    }
}

/// Canvas bounds in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// One segment draw as issued to a [`crate::raster::Canvas`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawCommand {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub width: u32,
    pub color: [u8; 3],
}

impl DrawCommand {
    pub fn new(p0: [f32; 2], p1: [f32; 2], width: u32, color: Rgb<u8>) -> Self {
        Self {
            p0,
            p1,
            width,
            color: color.0,
        }
    }

    pub fn color(&self) -> Rgb<u8> {
        Rgb(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn through_two_points_is_normalised() {
        let line = Line::through([0.0, 0.0], [10.0, 10.0]);
        let norm = (line.a * line.a + line.b * line.b).sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!(line.eval([3.0, 3.0]).abs() < 1e-6);
        assert!(line.eval([3.0, 4.0]).abs() > 0.5);
    }

    #[test]
    fn projections_reject_zero_denominators() {
        let horizontal = Line::new(0.0, 1.0, -5.0);
        assert_eq!(horizontal.x_at(0.0), None);
        assert_eq!(horizontal.y_at(42.0), Some(5.0));

        let vertical = Line::new(1.0, 0.0, -5.0);
        assert_eq!(vertical.y_at(0.0), None);
        assert_eq!(vertical.x_at(42.0), Some(5.0));
    }

    #[test]
    fn serializes_as_coefficient_triple() {
        let line = Line::new(1.0, -1.0, 0.5);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, "[1.0,-1.0,0.5]");
        let back: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn vector_round_trip_keeps_coefficients() {
        // normalised line through (1, 2) and (4, 6): 4x - 3y + 2 = 0 scaled by 1/5
        let v = Vector3::new(0.8f32, -0.6, 0.4);
        let line = Line::from(v);
        assert_eq!(line, Line::new(0.8, -0.6, 0.4));
        assert!(line.eval([1.0, 2.0]).abs() < 1e-6);
        assert!(line.eval([4.0, 6.0]).abs() < 1e-6);
        let back: Vector3<f32> = line.into();
        assert_eq!(back, v);

        let joined: Vector3<f32> = Line::through([1.0, 2.0], [4.0, 6.0]).into();
        // same line up to sign
        let dot = joined.dot(&v);
        assert!((dot.abs() - (v.norm_squared())).abs() < 1e-5, "{joined:?}");
    }

    #[test]
    fn degenerate_detection() {
        assert!(Line::new(0.0, 0.0, 3.0).is_degenerate());
        assert!(Line::through([1.0, 1.0], [1.0, 1.0]).is_degenerate());
        assert!(!Line::new(0.0, 1.0, 0.0).is_degenerate());
    }
}
