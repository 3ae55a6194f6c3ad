use crate::config::DEFAULT_SAVE_FILE_NAME;
use crate::imaging::codec::{OPEN_EXTENSIONS, SAVE_FILTERS};
use rfd::FileDialog;
use std::path::PathBuf;

/// Source of file paths for the load and save actions. `None` means the user
/// cancelled.
pub trait FilePicker {
    fn pick_image(&self) -> Option<PathBuf>;
    fn pick_save_target(&self) -> Option<PathBuf>;
}

/// Native dialogs provided by the platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePicker;

impl FilePicker for NativePicker {
    fn pick_image(&self) -> Option<PathBuf> {
        FileDialog::new()
            .add_filter("Images", OPEN_EXTENSIONS)
            .pick_file()
    }

    fn pick_save_target(&self) -> Option<PathBuf> {
        SAVE_FILTERS
            .iter()
            .fold(FileDialog::new(), |dialog, (name, extensions)| {
                dialog.add_filter(*name, *extensions)
            })
            .set_file_name(DEFAULT_SAVE_FILE_NAME)
            .save_file()
    }
}
