use crate::config::ShellConfig;
use crate::imaging::{resize_to_fit, to_color_image};
use eframe::egui::{Context, TextureHandle, TextureOptions};
use image::RgbImage;

/// On-screen bitmap. The surface owns the texture, so the bitmap lives exactly
/// as long as it is shown.
#[derive(Default)]
pub struct DisplaySurface {
    texture: Option<TextureHandle>,
}

impl DisplaySurface {
    /// Fits `image` into the configured box, converts it to texture format and
    /// replaces whatever was shown before.
    pub fn show_image(&mut self, ctx: &Context, image: &RgbImage, config: &ShellConfig) {
        let fitted = resize_to_fit(image, config.max_width, config.max_height, config.filter);
        if fitted.width() == 0 || fitted.height() == 0 {
            self.clear();
            return;
        }

        let color_image = to_color_image(&fitted);
        match self.texture.as_mut() {
            Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("display_image", color_image, TextureOptions::LINEAR))
            }
        }
    }

    pub fn clear(&mut self) {
        self.texture = None;
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    /// Pixel size of the shown bitmap.
    pub fn size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(TextureHandle::size)
    }
}
