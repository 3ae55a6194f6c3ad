use super::dialogs::FilePicker;
use super::display::DisplaySurface;
use super::worker::{ProcessingEvent, ProcessingJob};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::imaging;
use crate::processing::{ImageProcessor, ProgressSink};
use eframe::egui::Context;
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::TryRecvError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Original,
    Result,
}

/// Message shown to the user after a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}

/// Which of the action controls accept input right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledActions {
    pub load: bool,
    pub process: bool,
    pub save: bool,
}

/// Completion value of the running processor. Stored as given; the progress
/// bar widget does its own clamping when drawn.
pub struct Progress {
    value: i32,
    ctx: Context,
}

impl Progress {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl ProgressSink for Progress {
    fn update_progress(&mut self, value: i32) {
        self.value = value;
        self.ctx.request_repaint();
    }
}

pub struct ImageShell {
    ctx: Context,
    config: ShellConfig,
    picker: Box<dyn FilePicker>,
    // Lent to the worker thread while a job runs
    processor: Option<Box<dyn ImageProcessor>>,
    job: Option<ProcessingJob>,

    // Image states
    original: Option<RgbImage>,
    result: Option<RgbImage>,
    display: DisplaySurface,
    progress: Progress,

    // UI state
    view_mode: ViewMode,
    loaded_file_name: String,
    notification: Option<Notification>,
}

impl ImageShell {
    pub fn new(
        ctx: Context,
        config: ShellConfig,
        picker: Box<dyn FilePicker>,
        processor: Box<dyn ImageProcessor>,
    ) -> Self {
        Self {
            progress: Progress {
                value: 0,
                ctx: ctx.clone(),
            },
            ctx,
            config,
            picker,
            processor: Some(processor),
            job: None,
            original: None,
            result: None,
            display: DisplaySurface::default(),
            view_mode: ViewMode::Original,
            loaded_file_name: String::new(),
            notification: None,
        }
    }

    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    pub fn result(&self) -> Option<&RgbImage> {
        self.result.as_ref()
    }

    pub fn display(&self) -> &DisplaySurface {
        &self.display
    }

    pub fn progress(&self) -> i32 {
        self.progress.value()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn loaded_file_name(&self) -> &str {
        &self.loaded_file_name
    }

    pub fn processor_name(&self) -> &str {
        match (&self.processor, &self.job) {
            (Some(processor), _) => processor.name(),
            (None, Some(job)) => job.name(),
            (None, None) => "",
        }
    }

    pub fn is_processing(&self) -> bool {
        self.job.is_some()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn has_error(&self) -> bool {
        matches!(self.notification, Some(Notification::Error(_)))
    }

    /// An open error window blocks every action. A running job blocks load and
    /// process.
    pub fn enabled_actions(&self) -> EnabledActions {
        let open = !self.has_error();
        let idle = !self.is_processing();
        EnabledActions {
            load: open && idle,
            process: open && idle && self.original.is_some(),
            save: open && self.result.is_some(),
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Installs `processor` for the next run. A run already in flight finishes
    /// with the processor it started with.
    pub fn set_processor(&mut self, processor: Box<dyn ImageProcessor>) {
        self.processor = Some(processor);
    }

    /// Switches between the original and the result. Asking for a result that
    /// does not exist yet is ignored.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == ViewMode::Result && self.result.is_none() {
            return;
        }
        if self.view_mode != mode {
            self.view_mode = mode;
            self.refresh_display();
        }
    }

    /// Load button callback.
    pub fn load_image(&mut self) {
        let Some(path) = self.picker.pick_image() else {
            log::debug!("load cancelled");
            return;
        };
        if let Err(err) = self.load_from_path(&path) {
            self.report(err);
        }
    }

    /// Decodes `path` and makes it the original image. On failure nothing
    /// changes.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), ShellError> {
        if self.is_processing() {
            return Err(ShellError::Busy);
        }
        let image = imaging::load_image(path)?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        self.loaded_file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        // A result belongs to the image it was computed from.
        self.result = None;
        self.view_mode = ViewMode::Original;
        self.notification = None;
        self.display_image(&image);
        self.original = Some(image);
        Ok(())
    }

    /// Replaces the on-screen bitmap with a fitted copy of `image`.
    pub fn display_image(&mut self, image: &RgbImage) {
        self.display.show_image(&self.ctx, image, &self.config);
    }

    /// Process button callback. The result arrives through `poll_processing`.
    pub fn process_image(&mut self) {
        if let Err(err) = self.start_processing() {
            self.report(err);
        }
    }

    /// Hands a copy of the original to the processor on a worker thread.
    pub fn start_processing(&mut self) -> Result<(), ShellError> {
        if self.is_processing() {
            return Err(ShellError::Busy);
        }
        let original = self.original.clone().ok_or(ShellError::NoImageLoaded)?;
        let processor = self.processor.take().ok_or(ShellError::Busy)?;
        log::info!("running processor '{}'", processor.name());

        self.job = Some(ProcessingJob::spawn(&self.ctx, original, processor));
        Ok(())
    }

    /// Applies everything the worker sent since the last frame. Called once
    /// per frame on the UI thread.
    pub fn poll_processing(&mut self) {
        loop {
            let next = match &self.job {
                Some(job) => job.try_recv(),
                None => return,
            };
            match next {
                Ok(event) => {
                    if let Some(Err(err)) = self.apply_event(event) {
                        self.report(err);
                    }
                }
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.job = None;
                    self.report(worker_lost());
                    return;
                }
            }
        }
    }

    /// Blocks until the running job is done and returns its outcome.
    pub fn wait_for_processing(&mut self) -> Result<(), ShellError> {
        loop {
            let next = match &self.job {
                Some(job) => job.recv(),
                None => return Ok(()),
            };
            let Some(event) = next else {
                self.job = None;
                return Err(worker_lost());
            };
            if let Some(outcome) = self.apply_event(event) {
                return outcome;
            }
        }
    }

    /// Runs the installed processor to completion.
    pub fn run_processor(&mut self) -> Result<(), ShellError> {
        self.start_processing()?;
        self.wait_for_processing()
    }

    /// Save button callback.
    pub fn save_image(&mut self) {
        if self.result.is_none() {
            self.report(ShellError::NoResult);
            return;
        }
        let Some(path) = self.picker.pick_save_target() else {
            log::debug!("save cancelled");
            return;
        };
        match self.save_to_path(&path) {
            Ok(written) => {
                self.notification = Some(Notification::Info(format!("Saved: {}", written.display())));
            }
            Err(err) => self.report(err),
        }
    }

    /// Encodes the result image to `path` and returns the path written.
    pub fn save_to_path(&self, path: &Path) -> Result<PathBuf, ShellError> {
        let result = self.result.as_ref().ok_or(ShellError::NoResult)?;
        let written = imaging::save_image(result, path, self.config.jpeg_quality)?;
        log::info!("saved {}", written.display());
        Ok(written)
    }

    pub fn update_progress(&mut self, value: i32) {
        self.progress.update_progress(value);
    }

    /// Returns the outcome once the run is finished.
    fn apply_event(&mut self, event: ProcessingEvent) -> Option<Result<(), ShellError>> {
        match event {
            ProcessingEvent::Progress(value) => {
                self.update_progress(value);
                None
            }
            ProcessingEvent::Finished { processor, outcome } => {
                self.job = None;
                if self.processor.is_none() {
                    self.processor = Some(processor);
                }
                Some(outcome.map(|result| self.store_result(result)))
            }
        }
    }

    fn store_result(&mut self, result: RgbImage) {
        if let Some(original) = &self.original {
            if result.dimensions() != original.dimensions() {
                log::warn!(
                    "processor returned {:?}, original is {:?}",
                    result.dimensions(),
                    original.dimensions()
                );
            }
        }

        self.result = Some(result);
        self.view_mode = ViewMode::Result;
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        let shown = match self.view_mode {
            ViewMode::Original => self.original.as_ref(),
            ViewMode::Result => self.result.as_ref(),
        };
        match shown {
            Some(image) => self.display.show_image(&self.ctx, image, &self.config),
            None => self.display.clear(),
        }
    }

    fn report(&mut self, err: ShellError) {
        log::error!("{err}");
        self.notification = Some(Notification::Error(err.to_string()));
    }
}

fn worker_lost() -> ShellError {
    ShellError::Processing("processing thread stopped unexpectedly".into())
}
