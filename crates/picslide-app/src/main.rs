//! Picslide desktop application.
//!
//! This is the main entry point for the desktop Picslide application.

use picslide_app::app::PicslideApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.picslide.picslide";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 640.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Picslide",
        options,
        Box::new(|cc| Ok(Box::new(PicslideApp::new(cc)))),
    )
}
