use crate::error::ShellError;
use crate::processing::{ImageProcessor, ProgressSink};
use eframe::egui::Context;
use image::RgbImage;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Message from the processing thread back to the UI thread.
pub enum ProcessingEvent {
    Progress(i32),
    /// Last message of a run. The processor comes back with the outcome so the
    /// shell can run it again.
    Finished {
        processor: Box<dyn ImageProcessor>,
        outcome: Result<RgbImage, ShellError>,
    },
}

struct ChannelProgress {
    tx: Sender<ProcessingEvent>,
    ctx: Context,
}

impl ProgressSink for ChannelProgress {
    fn update_progress(&mut self, value: i32) {
        // Send fails only when the shell is gone.
        let _ = self.tx.send(ProcessingEvent::Progress(value));
        self.ctx.request_repaint();
    }
}

/// A processor running on its own thread.
pub struct ProcessingJob {
    name: String,
    rx: Receiver<ProcessingEvent>,
}

impl ProcessingJob {
    pub fn spawn(ctx: &Context, original: RgbImage, mut processor: Box<dyn ImageProcessor>) -> Self {
        let name = processor.name().to_string();
        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let mut progress = ChannelProgress {
                tx: tx.clone(),
                ctx: ctx.clone(),
            };
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                processor.process(&original, &mut progress)
            }))
            .unwrap_or_else(|_| Err(ShellError::Processing("processor panicked".into())));

            let _ = tx.send(ProcessingEvent::Finished { processor, outcome });
            ctx.request_repaint();
        });

        Self { name, rx }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn try_recv(&self) -> Result<ProcessingEvent, TryRecvError> {
        self.rx.try_recv()
    }

    /// Blocks until the next event. `None` once the thread has gone away.
    pub fn recv(&self) -> Option<ProcessingEvent> {
        self.rx.recv().ok()
    }
}
