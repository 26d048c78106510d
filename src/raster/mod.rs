pub mod canvas;
pub mod clip;
pub mod line;

pub use self::canvas::{Canvas, ImageCanvas, SegmentRecorder};
pub use self::clip::{clip_line_to_rect, clip_segment, Rect};
pub use self::line::{
    boundary_endpoints, draw_line, draw_line_white, ClipMode, LineRasterizer, RasterParams,
    STROKE_WIDTH,
};
