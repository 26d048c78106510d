use crate::raster::{ClipMode, RasterParams, STROKE_WIDTH};
use image::Rgb;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Stroke width in pixels.
    pub stroke_width: u32,
    /// Endpoint policy: `"heuristic"` or `"exact"`.
    pub clip: ClipMode,
    /// Default stroke colour as `[r, g, b]`.
    pub color: [u8; 3],
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            stroke_width: STROKE_WIDTH,
            clip: ClipMode::Heuristic,
            color: [255, 255, 255],
        }
    }
}

impl RasterConfig {
    pub fn to_params(&self) -> RasterParams {
        RasterParams {
            stroke_width: self.stroke_width.max(1),
            clip: self.clip,
        }
    }

    pub fn color(&self) -> Rgb<u8> {
        Rgb(self.color)
    }
}
