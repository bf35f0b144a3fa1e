use eframe::egui::{
    self,
    RichText,
};

use crate::gui::app::PawdeckApp;

/// Terminal screen for a failed or empty fetch. Always renderable; the only
/// way out is quitting and relaunching.
pub fn show(ctx: &egui::Context, app: &PawdeckApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.vertical_centered(|ui| {
            ui.heading("😿 No cats to show");
            ui.add_space(8.0);
            ui.label("Couldn't load any cats from cataas.com.");

            if let Some(detail) = app.session.last_error() {
                ui.add_space(6.0);
                ui.label(RichText::new(detail).small().color(app.theme.red(ui.ctx())));
            }

            ui.add_space(12.0);
            ui.label(
                RichText::new("Check your connection and restart the app to try again.")
                    .color(app.theme.comment(ui.ctx())),
            );
            ui.add_space(12.0);
            if ui.button("Quit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}
