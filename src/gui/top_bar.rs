use eframe::egui::{
    self,
    containers,
};

use crate::{
    core::session::SessionPhase,
    gui::theme::Theme,
};

pub enum TopBarAction {
    NewRound,
    OpenSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        phase: SessionPhase,
        pool_len: usize,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    let can_restart = phase == SessionPhase::Summary;
                    if ui.add_enabled(can_restart, egui::Button::new("New Round")).clicked() {
                        action = Some(TopBarAction::NewRound);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Preferences").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_source_status(ui, theme, phase, pool_len);
                });
            });
        });

        action
    }

    fn show_source_status(ui: &mut egui::Ui, theme: &Theme, phase: SessionPhase, pool_len: usize) {
        let (color, tooltip) = match phase {
            SessionPhase::Loading => (theme.yellow(ui.ctx()), "Fetching cats...".to_string()),
            SessionPhase::Empty => (theme.red(ui.ctx()), "No cats available".to_string()),
            _ => (theme.green(ui.ctx()), format!("{} cats in the pool", pool_len)),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("cataas").on_hover_text(tooltip.clone());
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
