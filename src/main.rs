//! Patchnote - patch note builder
//!
//! Assembles a formatted update notice from guided form panels, with a live
//! preview and an HTML markup view for copying into a board post.

mod app;
mod core;
mod ui;

use app::PatchNoteApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Patchnote...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Patchnote"),
        ..Default::default()
    };

    eframe::run_native(
        "Patchnote",
        native_options,
        Box::new(|cc| Ok(Box::new(PatchNoteApp::new(cc)))),
    )
}
