use eframe::egui::{
    self,
    CornerRadius,
    RichText,
    Vec2,
};

use crate::{
    core::analysis::{
        summarize,
        TagSummary,
    },
    gui::{
        app::PawdeckApp,
        card_view::tag_chip,
    },
};

const GRID_IMAGE_SIZE: Vec2 = Vec2::new(140.0, 140.0);
const GRID_COLUMNS: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut PawdeckApp) {
    let summary = summarize(app.session.liked(), app.session.round_len());
    let mut new_round = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.heading(app.theme.heading(ui.ctx(), "Your Cat Preferences 🐱"));
                ui.add_space(6.0);
                ui.label(format!(
                    "You liked {} out of {} cats!",
                    summary.liked_count, summary.round_len
                ));
                ui.add_space(4.0);
                ui.add(
                    egui::ProgressBar::new(summary.match_rate())
                        .desired_width(240.0)
                        .show_percentage(),
                );
                ui.add_space(12.0);

                if ui
                    .add(
                        egui::Button::new(RichText::new("🔄 New Round").size(16.0))
                            .min_size(Vec2::new(140.0, 40.0)),
                    )
                    .clicked()
                {
                    new_round = true;
                }
            });
            ui.add_space(16.0);

            if !summary.top_tags.is_empty() {
                ui.label(app.theme.bold(ui.ctx(), "You seem to love cats that are:"));
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for (tag, count) in &summary.top_tags {
                        tag_chip(ui, &format!("{tag} ({count})"), true);
                    }
                });
                ui.add_space(16.0);
            } else if summary.liked_count > 0 {
                ui.label(
                    "Most of your liked cats don't have specific tags, \
                     but you still have great taste! 😺",
                );
                ui.add_space(16.0);
            }

            if summary.liked_count > 0 {
                ui.label(app.theme.bold(ui.ctx(), "Your Favorite Cats"));
                ui.add_space(6.0);
                liked_grid(ui, app);
            } else {
                ui.vertical_centered(|ui| {
                    ui.label("You didn't like any cats. Maybe you're more of a dog person? 🐶");
                });
            }
            ui.add_space(16.0);

            ui.label(app.theme.bold(ui.ctx(), "Quick Stats"));
            ui.add_space(6.0);
            quick_stats(ui, app, &summary);
            ui.add_space(12.0);
        });
    });

    if new_round {
        app.new_round();
    }
}

fn quick_stats(ui: &mut egui::Ui, app: &PawdeckApp, summary: &TagSummary) {
    let ctx = ui.ctx().clone();
    let stats = [
        (summary.liked_count.to_string(), "Liked", app.theme.green(&ctx)),
        (summary.skipped().to_string(), "Skipped", app.theme.red(&ctx)),
        (
            format!("{:.0}%", summary.match_rate() * 100.0),
            "Match Rate",
            app.theme.yellow(&ctx),
        ),
        (summary.tagged_count.to_string(), "With Tags", app.theme.pink(&ctx)),
    ];

    let cell_width = (ui.available_width() / stats.len() as f32).max(60.0);
    ui.horizontal(|ui| {
        for (value, label, color) in stats {
            ui.allocate_ui(Vec2::new(cell_width, 56.0), |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(value).size(22.0).strong().color(color));
                    ui.label(RichText::new(label).small().color(app.theme.comment(&ctx)));
                });
            });
        }
    });
}

fn liked_grid(ui: &mut egui::Ui, app: &PawdeckApp) {
    egui::Grid::new("liked_cats_grid").spacing(Vec2::new(10.0, 10.0)).show(ui, |ui| {
        for (i, card) in app.session.liked().iter().enumerate() {
            ui.vertical(|ui| {
                ui.add(
                    egui::Image::from_uri(card.image_url.as_str())
                        .corner_radius(CornerRadius::same(8))
                        .fit_to_exact_size(GRID_IMAGE_SIZE),
                );
                ui.horizontal_wrapped(|ui| {
                    for tag in card.tags.iter().take(3) {
                        tag_chip(ui, tag, card.has_real_tags());
                    }
                });
            });

            if (i + 1) % GRID_COLUMNS == 0 {
                ui.end_row();
            }
        }
    });
}
