use super::raster::RasterConfig;
use crate::types::{Line, Size};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub size: Size,
    /// Background colour of the blank canvas.
    #[serde(default)]
    pub background: [u8; 3],
    pub lines: Vec<LineSpec>,
    #[serde(default)]
    pub raster: RasterConfig,
    pub output: DemoOutputConfig,
}

/// A line to draw, either as a bare `[a, b, c]` or with its own colour.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LineSpec {
    Bare(Line),
    Colored { line: Line, color: [u8; 3] },
}

impl LineSpec {
    pub fn line(&self) -> Line {
        match self {
            Self::Bare(line) | Self::Colored { line, .. } => *line,
        }
    }

    pub fn color(&self) -> Option<[u8; 3]> {
        match self {
            Self::Bare(_) => None,
            Self::Colored { color, .. } => Some(*color),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    pub image: PathBuf,
    pub segments_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    super::load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_line_specs() {
        let json = r#"{
            "size": {"width": 64, "height": 48},
            "lines": [
                [0.0, 1.0, -5.0],
                {"line": [1.0, 0.0, -10.0], "color": [255, 0, 0]}
            ],
            "raster": {"clip": "exact"},
            "output": {"image": "out/lines.png", "segments_json": "out/lines.json"}
        }"#;
        let cfg: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.size, Size::new(64, 48));
        assert_eq!(cfg.background, [0, 0, 0]);
        assert_eq!(cfg.lines.len(), 2);
        assert_eq!(cfg.lines[0].line(), Line::new(0.0, 1.0, -5.0));
        assert_eq!(cfg.lines[0].color(), None);
        assert_eq!(cfg.lines[1].color(), Some([255, 0, 0]));
        assert_eq!(cfg.raster.stroke_width, 4);
    }
}
