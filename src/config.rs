use image::imageops::FilterType;

// Display surface limits
pub const MAX_DISPLAY_WIDTH: u32 = 1000;
pub const MAX_DISPLAY_HEIGHT: u32 = 1000;
pub const DISPLAY_FILTER: FilterType = FilterType::Triangle;

// Encoding settings
pub const JPEG_QUALITY: u8 = 95;
pub const DEFAULT_SAVE_EXTENSION: &str = "jpg";
pub const DEFAULT_SAVE_FILE_NAME: &str = "result.jpg";

// Window and widget settings
pub const WINDOW_TITLE: &str = "Image Shell";
pub const WINDOW_WIDTH: f32 = 1100.0;
pub const WINDOW_HEIGHT: f32 = 1150.0;
pub const PROGRESS_BAR_WIDTH: f32 = 300.0;

/// Runtime settings handed to the shell on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub jpeg_quality: u8,
    pub filter: FilterType,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_DISPLAY_WIDTH,
            max_height: MAX_DISPLAY_HEIGHT,
            jpeg_quality: JPEG_QUALITY,
            filter: DISPLAY_FILTER,
        }
    }
}
