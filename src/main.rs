use eframe::egui;
use pawdeck::gui::PawdeckApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pawdeck")
            .with_inner_size([520.0, 780.0])
            .with_min_inner_size([420.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native("Pawdeck", options, Box::new(|cc| Ok(Box::new(PawdeckApp::new(cc)))))
}
