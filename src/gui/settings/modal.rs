use eframe::egui;

use super::data::{
    SettingsData,
    MAX_ROUND_SIZE,
    MIN_ROUND_SIZE,
};

pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
    original: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default(), original: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.draft = current_settings.clone();
        self.original = current_settings;
        self.open = true;
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.heading("Preferences");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Cats per round:");
                ui.add(egui::Slider::new(
                    &mut self.draft.round_size,
                    MIN_ROUND_SIZE..=MAX_ROUND_SIZE,
                ));
            });
            ui.label(
                egui::RichText::new("Takes effect on the next round.")
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(6.0);

            ui.checkbox(&mut self.draft.muted, "Mute decision sounds");
            ui.add_space(10.0);

            ui.separator();

            let is_dirty = self.draft != self.original;

            ui.horizontal(|ui| {
                if ui.add_enabled(is_dirty, egui::Button::new("Save")).clicked() {
                    result = Some(self.draft.clone());
                    self.open = false;
                }
                if ui.button("Cancel").clicked() {
                    self.open = false;
                }
            });
        });

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
