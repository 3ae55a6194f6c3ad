#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::{NativeOptions, egui};
use image_shell::app::{ImageShell, NativePicker};
use image_shell::config::{ShellConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use image_shell::processing::Passthrough;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    log::info!("starting {WINDOW_TITLE}");
    let result = eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| {
            Ok(Box::new(ImageShell::new(
                cc.egui_ctx.clone(),
                ShellConfig::default(),
                Box::new(NativePicker),
                Box::new(Passthrough),
            )))
        }),
    );
    log::info!("shutting down");
    result
}
