use egui::ColorImage;
use image::RgbImage;

/// Repacks decoder RGB triplets into the texture format the display surface
/// uploads (opaque RGBA).
pub fn to_color_image(image: &RgbImage) -> ColorImage {
    ColorImage::from_rgb(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;
    use image::Rgb;

    #[test]
    fn channels_keep_their_meaning() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 0, 255]));

        let converted = to_color_image(&image);

        assert_eq!(converted.size, [2, 1]);
        assert_eq!(converted.pixels[0], Color32::from_rgb(255, 0, 0));
        assert_eq!(converted.pixels[1], Color32::from_rgb(0, 0, 255));
    }
}
