// Decoding, encoding and display preparation of raster buffers
pub mod codec;
pub mod convert;
pub mod resize;

pub use codec::{load_image, resolve_save_path, save_image};
pub use convert::to_color_image;
pub use resize::{fit_dimensions, resize_to_fit};
