use super::state::{ImageShell, Notification, ViewMode};
use crate::config::PROGRESS_BAR_WIDTH;
use eframe::egui::{
    self, CentralPanel, Color32, Context, ProgressBar, ScrollArea, TopBottomPanel, Ui, Vec2,
};

impl ImageShell {
    pub fn render_ui(&mut self, ctx: &Context) {
        self.setup_custom_styles(ctx);

        // The error window is modal: the action bar stays disabled until it
        // is dismissed.
        let actions_enabled = !self.has_error();
        TopBottomPanel::top("actions_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.add_enabled_ui(actions_enabled, |ui| self.render_actions(ui));
            ui.add_space(6.0);
        });

        TopBottomPanel::bottom("progress_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_progress(ui);
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            self.render_viewport(ui);
        });

        self.render_error_window(ctx);
    }

    fn setup_custom_styles(&self, ctx: &Context) {
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.spacing.button_padding = Vec2::new(10.0, 6.0);
        style.spacing.item_spacing = Vec2::new(8.0, 8.0);
        ctx.set_style(style);
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        let enabled = self.enabled_actions();
        let has_result = self.result().is_some();
        let busy = self.is_processing();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    enabled.load,
                    egui::Button::new("📂 Load image").min_size(Vec2::new(120.0, 32.0)),
                )
                .on_hover_text("Ctrl+O")
                .clicked()
            {
                self.load_image();
            }

            let process = ui
                .add_enabled(
                    enabled.process,
                    egui::Button::new("⚙ Process").min_size(Vec2::new(120.0, 32.0)),
                )
                .on_hover_text(format!("Ctrl+P ({})", self.processor_name()));
            if process.clicked() {
                self.process_image();
            }

            let save = ui
                .add_enabled(
                    enabled.save,
                    egui::Button::new("💾 Save image").min_size(Vec2::new(120.0, 32.0)),
                )
                .on_hover_text("Ctrl+S")
                .on_disabled_hover_text("Process the image first");
            if save.clicked() {
                self.save_image();
            }

            if busy {
                ui.spinner();
            }

            ui.separator();

            let mut mode = self.view_mode();
            ui.selectable_value(&mut mode, ViewMode::Original, "Original");
            ui.add_enabled_ui(has_result, |ui| {
                ui.selectable_value(&mut mode, ViewMode::Result, "Result");
            });
            if mode != self.view_mode() {
                self.set_view_mode(mode);
            }

            if !self.loaded_file_name().is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.loaded_file_name());
                });
            }
        });
    }

    fn render_progress(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            // ProgressBar clamps to [0, 1]; the stored value is left as is.
            let fraction = self.progress() as f32 / 100.0;
            ui.add(
                ProgressBar::new(fraction)
                    .desired_width(PROGRESS_BAR_WIDTH)
                    .show_percentage(),
            );

            if let Some(Notification::Info(message)) = self.notification() {
                let message = message.clone();
                ui.label(message);
            }
        });
    }

    fn render_viewport(&mut self, ui: &mut Ui) {
        match self.display().texture() {
            Some(texture) => {
                let size = texture.size_vec2() / ui.ctx().pixels_per_point();
                ScrollArea::both().auto_shrink([false; 2]).show(ui, |ui| {
                    ui.image((texture.id(), size));
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.colored_label(
                        Color32::from_gray(140),
                        "Load a JPEG or PNG image to get started",
                    );
                });
            }
        }
    }

    fn render_error_window(&mut self, ctx: &Context) {
        let Some(Notification::Error(message)) = self.notification().cloned() else {
            return;
        };

        egui::Window::new("⚠ Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&message);
                ui.separator();
                if ui
                    .add_sized(Vec2::new(120.0, 32.0), egui::Button::new("OK"))
                    .clicked()
                {
                    self.dismiss_notification();
                }
            });
    }
}
