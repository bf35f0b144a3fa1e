use eframe::egui::{
    self,
    Color32,
    CornerRadius,
    Rect,
    RichText,
    Sense,
    Stroke,
    StrokeKind,
    Vec2,
};

use crate::{
    core::{
        gesture::{
            SwipeDecision,
            SWIPE_THRESHOLD,
        },
        NO_TAGS_SENTINEL,
    },
    gui::{
        app::PawdeckApp,
        theme::blend_colors,
    },
};

// Presentation tuning only. The decision threshold lives in core::gesture.
const CARD_SIZE: Vec2 = Vec2::new(340.0, 440.0);
const ROTATION_PER_POINT: f32 = 0.0015;
const OPACITY_FALLOFF: f32 = 500.0;
const MIN_OPACITY: f32 = 0.35;
const PREVIEW_SCALE: f32 = 0.95;
const PREVIEW_OPACITY: f32 = 0.5;

pub fn show(ctx: &egui::Context, app: &mut PawdeckApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(card) = app.session.current().cloned() else {
            return;
        };
        let next_card = app.session.peek_next().cloned();

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(app.theme.heading(ui.ctx(), &format!(
                "{} / {}",
                app.session.position() + 1,
                app.session.round_len()
            )));
        });
        ui.add_space(8.0);

        let (dx, dy) = app.drag.offset();

        let avail = ui.available_rect_before_wrap();
        let base_center = egui::pos2(avail.center().x, avail.top() + CARD_SIZE.y * 0.5);
        let rect = Rect::from_center_size(base_center + egui::vec2(dx, dy * 0.3), CARD_SIZE);

        let response = ui.allocate_rect(rect, Sense::drag());
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.drag.pointer_down(pos.x, pos.y);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.drag.pointer_move(pos.x, pos.y);
            }
        }
        if response.drag_stopped() {
            if let Some(decision) = app.drag.pointer_up() {
                app.decide(decision);
            }
        }

        // The upcoming card sits behind the current one, slightly shrunk and
        // dimmed. It stays anchored while the top card drags away.
        if let Some(next) = &next_card {
            let preview_rect = Rect::from_center_size(base_center, CARD_SIZE * PREVIEW_SCALE);
            egui::Image::from_uri(next.image_url.as_str())
                .corner_radius(CornerRadius::same(12))
                .tint(Color32::WHITE.gamma_multiply(PREVIEW_OPACITY))
                .paint_at(ui, preview_rect);
        }

        let opacity = (1.0 - dx.abs() / OPACITY_FALLOFF).max(MIN_OPACITY);
        let rotation = dx * ROTATION_PER_POINT;

        // No corner radius here: egui drops rotation when rounding is set.
        egui::Image::from_uri(card.image_url.as_str())
            .rotate(rotation, Vec2::splat(0.5))
            .tint(Color32::WHITE.gamma_multiply(opacity))
            .paint_at(ui, rect);

        // Border pulls toward the decision color as the drag nears the threshold.
        let pull = (dx.abs() / SWIPE_THRESHOLD).min(1.0);
        let toward =
            if dx >= 0.0 { app.theme.green(ui.ctx()) } else { app.theme.red(ui.ctx()) };
        let border =
            blend_colors(ui.visuals().widgets.noninteractive.bg_stroke.color, toward, pull);
        ui.painter().rect_stroke(
            rect,
            CornerRadius::same(12),
            Stroke::new(3.0, border),
            StrokeKind::Outside,
        );

        if dx > SWIPE_THRESHOLD {
            stamp(ui, rect, "LIKE", app.theme.green(ui.ctx()));
        } else if dx < -SWIPE_THRESHOLD {
            stamp(ui, rect, "NOPE", app.theme.red(ui.ctx()));
        }

        ui.advance_cursor_after_rect(rect);
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for tag in &card.tags {
                tag_chip(ui, tag, tag != NO_TAGS_SENTINEL);
            }
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 240.0).max(0.0) * 0.5);

            let nope = egui::Button::new(
                RichText::new("✖ Nope").size(18.0).color(app.theme.red(ui.ctx())),
            )
            .min_size(Vec2::new(110.0, 44.0));
            if ui.add(nope).clicked() {
                app.decide(SwipeDecision::Reject);
            }

            let like = egui::Button::new(
                RichText::new("♥ Like").size(18.0).color(app.theme.green(ui.ctx())),
            )
            .min_size(Vec2::new(110.0, 44.0));
            if ui.add(like).clicked() {
                app.decide(SwipeDecision::Accept);
            }
        });
    });
}

fn stamp(ui: &egui::Ui, rect: Rect, text: &str, color: Color32) {
    ui.painter().text(
        rect.center_top() + egui::vec2(0.0, 48.0),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(36.0),
        color,
    );
}

pub fn tag_chip(ui: &mut egui::Ui, label: &str, real: bool) {
    let color = if real { ui.visuals().text_color() } else { ui.visuals().weak_text_color() };
    let text = if real {
        RichText::new(label).small().color(color)
    } else {
        RichText::new(label).small().color(color).italics()
    };

    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(text);
        });
}
