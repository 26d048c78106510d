//! Image display with figure sizes proportional to pixel dimensions.
//!
//! The crate does not bind to a plotting backend; callers supply an
//! [`ImageSink`] that knows how to put pixels on screen.
use image::RgbImage;
use serde::Serialize;

/// Pixels per figure inch.
pub const DISPLAY_SCALE: f32 = 200.0;

/// Figure geometry handed to a sink alongside the image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureSize {
    /// Figure width in inches.
    pub width: f32,
    /// Figure height in inches.
    pub height: f32,
    /// Padding around the image, always zero.
    pub pad: f32,
}

impl FigureSize {
    pub fn for_image(width: u32, height: u32) -> Self {
        Self {
            width: width as f32 / DISPLAY_SCALE,
            height: height as f32 / DISPLAY_SCALE,
            pad: 0.0,
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height == 0.0 {
            0.0
        } else {
            self.width / self.height
        }
    }
}

/// Anything that can present an RGB image at a given figure size.
pub trait ImageSink {
    fn show(&mut self, image: &RgbImage, figure: FigureSize) -> Result<(), String>;
}

impl<S: ImageSink + ?Sized> ImageSink for &mut S {
    fn show(&mut self, image: &RgbImage, figure: FigureSize) -> Result<(), String> {
        (**self).show(image, figure)
    }
}

/// Show `image` on `sink` with a figure sized `w / 200 × h / 200` inches.
pub fn show_image<S: ImageSink + ?Sized>(image: &RgbImage, sink: &mut S) -> Result<(), String> {
    let figure = FigureSize::for_image(image.width(), image.height());
    log::debug!(
        "show_image: {}x{} px -> {:.2}x{:.2} in",
        image.width(),
        image.height(),
        figure.width,
        figure.height
    );
    sink.show(image, figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Capture {
        shown: Vec<(u32, u32, FigureSize)>,
    }

    impl ImageSink for Capture {
        fn show(&mut self, image: &RgbImage, figure: FigureSize) -> Result<(), String> {
            self.shown.push((image.width(), image.height(), figure));
            Ok(())
        }
    }

    #[test]
    fn figure_is_proportional_to_pixels() {
        let fig = FigureSize::for_image(400, 200);
        assert_eq!(fig.width, 2.0);
        assert_eq!(fig.height, 1.0);
        assert_eq!(fig.pad, 0.0);
        assert_eq!(fig.aspect(), 2.0);
    }

    #[test]
    fn show_image_forwards_to_sink() {
        let image = RgbImage::new(300, 600);
        let mut sink = Capture::default();
        show_image(&image, &mut sink).unwrap();
        assert_eq!(sink.shown.len(), 1);
        let (w, h, fig) = sink.shown[0];
        assert_eq!((w, h), (300, 600));
        assert_eq!(fig, FigureSize::for_image(300, 600));
        assert_eq!(fig.aspect(), 0.5);
    }
}
