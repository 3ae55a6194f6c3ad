use crate::config::DEFAULT_SAVE_EXTENSION;
use crate::error::ShellError;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ImageReader, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted by the open dialog.
pub const OPEN_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg"];

/// Filters offered by the save dialog, JPEG first as the default.
pub const SAVE_FILTERS: &[(&str, &[&str])] = &[("JPEG files", &["jpg"]), ("PNG files", &["png"])];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Decodes `path` into an 8-bit RGB buffer. The format is guessed from the
/// file contents, not the extension.
pub fn load_image(path: &Path) -> Result<RgbImage, ShellError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ShellError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let decoded = reader.decode().map_err(|source| ShellError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decoded.to_rgb8())
}

/// Appends the default extension when the user typed a bare file name.
pub fn resolve_save_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    }
}

/// Encodes `image` in the format implied by the extension of `path` and
/// returns the path actually written.
pub fn save_image(image: &RgbImage, path: &Path, jpeg_quality: u8) -> Result<PathBuf, ShellError> {
    let path = resolve_save_path(path);
    let format =
        OutputFormat::from_path(&path).ok_or_else(|| ShellError::UnsupportedFormat(path.clone()))?;

    // Encode fully in memory first so a failed encode leaves no file behind.
    let mut encoded = Vec::new();
    let written = match format {
        OutputFormat::Jpeg => {
            image.write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, jpeg_quality))
        }
        OutputFormat::Png => image.write_with_encoder(PngEncoder::new(&mut encoded)),
    };
    written.map_err(|source| ShellError::Encode {
        path: path.clone(),
        source,
    })?;

    fs::write(&path, &encoded).map_err(|source| ShellError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
        })
    }

    #[test]
    fn png_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let image = gradient(24, 16);

        let written = save_image(&image, &dir.path().join("out.png"), 95).unwrap();
        let loaded = load_image(&written).unwrap();

        assert_eq!(loaded, image);
    }

    #[test]
    fn jpeg_round_trip_is_close() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbImage::from_pixel(32, 32, Rgb([120, 60, 200]));

        let written = save_image(&image, &dir.path().join("out.jpeg"), 100).unwrap();
        let loaded = load_image(&written).unwrap();

        assert_eq!(loaded.dimensions(), image.dimensions());
        for (a, b) in loaded.pixels().zip(image.pixels()) {
            for c in 0..3 {
                assert!(a[c].abs_diff(b[c]) <= 6, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn missing_extension_defaults_to_jpg() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_image(&gradient(4, 4), &dir.path().join("result"), 95).unwrap();

        assert_eq!(written.extension().unwrap(), "jpg");
        assert!(written.exists());
    }

    #[test]
    fn unknown_extension_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("result.bmp");

        let err = save_image(&gradient(4, 4), &target, 95).unwrap_err();

        assert!(matches!(err, ShellError::UnsupportedFormat(_)));
        assert!(!target.exists());
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        assert!(matches!(load_image(&path), Err(ShellError::Decode { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_image(&dir.path().join("nope.jpg")).unwrap_err();

        assert!(matches!(err, ShellError::Io { .. }));
    }

    #[test]
    fn extension_matching_ignores_case() {
        assert_eq!(OutputFormat::from_path(Path::new("a.PNG")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("a.JpG")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_path(Path::new("a.gif")), None);
    }

    #[test]
    fn failed_encode_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("huge.jpg");

        // JPEG dimensions are limited to 65535 per side.
        let err = save_image(&RgbImage::new(70_000, 1), &target, 95).unwrap_err();

        assert!(matches!(err, ShellError::Encode { .. }));
        assert!(!target.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["out.jpg", "out.png"] {
            let target = dir.path().join(name);
            std::os::unix::fs::symlink("/dev/full", &target).unwrap();

            let err = save_image(&gradient(8, 8), &target, 95).unwrap_err();

            assert!(matches!(err, ShellError::Io { .. }), "{name}: {err}");
        }
    }
}
