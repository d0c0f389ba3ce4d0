mod core;
mod gui;
mod video;

use eframe::egui;
use gui::ImageClipsApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 350.0])
            .with_title("Image Clips Video Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Image Clips",
        options,
        Box::new(|cc| {
            match ImageClipsApp::new(cc) {
                Ok(app) => Ok(Box::new(app)),
                Err(e) => {
                    log::error!("Failed to initialize app: {}", e);
                    std::process::exit(1);
                }
            }
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
