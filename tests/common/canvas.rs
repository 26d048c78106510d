use image::{Rgb, RgbImage};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixels of `image` that differ from `background`.
pub fn painted_pixels(image: &RgbImage, background: Rgb<u8>) -> Vec<(u32, u32)> {
    image
        .enumerate_pixels()
        .filter(|(_, _, p)| **p != background)
        .map(|(x, y, _)| (x, y))
        .collect()
}
