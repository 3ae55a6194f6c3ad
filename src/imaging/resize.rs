use image::RgbImage;
use image::imageops::{self, FilterType};

/// Target size for an image of `width`×`height` scaled uniformly into the
/// `max_width`×`max_height` box. Small images are scaled up.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let scale = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
    let new_w = (width as f64 * scale).round().max(1.0) as u32;
    let new_h = (height as f64 * scale).round().max(1.0) as u32;
    (new_w, new_h)
}

pub fn resize_to_fit(
    image: &RgbImage,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> RgbImage {
    let (new_w, new_h) = fit_dimensions(image.width(), image.height(), max_width, max_height);
    if (new_w, new_h) == image.dimensions() {
        return image.clone();
    }
    imageops::resize(image, new_w, new_h, filter)
}
