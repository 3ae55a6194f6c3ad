use std::path::PathBuf;

/// Everything that can go wrong inside a shell callback.
///
/// None of these are fatal: the shell keeps its previous state and shows the
/// message to the user.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unsupported output format for {0} (use .jpg, .jpeg or .png)")]
    UnsupportedFormat(PathBuf),

    #[error("no image loaded")]
    NoImageLoaded,

    #[error("nothing to save: process the image first")]
    NoResult,

    #[error("an image is still being processed")]
    Busy,

    #[error("processing failed: {0}")]
    Processing(String),
}
