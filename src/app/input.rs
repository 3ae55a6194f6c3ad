use super::state::ImageShell;
use eframe::egui::{Context, Key, Modifiers};

impl ImageShell {
    /// Keyboard equivalents of the action buttons.
    pub fn handle_shortcuts(&mut self, ctx: &Context) {
        let (load, process, save) = ctx.input_mut(|i| {
            (
                i.consume_key(Modifiers::COMMAND, Key::O),
                i.consume_key(Modifiers::COMMAND, Key::P),
                i.consume_key(Modifiers::COMMAND, Key::S),
            )
        });

        // Same gating as the buttons.
        let enabled = self.enabled_actions();
        if load && enabled.load {
            self.load_image();
        } else if process && enabled.process {
            self.process_image();
        } else if save && enabled.save {
            self.save_image();
        }
    }
}
