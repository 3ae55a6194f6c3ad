// Image shell application: state, UI drawing and input handling
pub mod dialogs;
pub mod display;
pub mod input;
pub mod state;
pub mod ui;
pub mod worker;

pub use dialogs::{FilePicker, NativePicker};
pub use state::{EnabledActions, ImageShell, Notification, ViewMode};

use eframe::egui::Context;
use eframe::{App, Frame};

impl App for ImageShell {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_processing();
        self.handle_shortcuts(ctx);
        self.render_ui(ctx);
    }
}
