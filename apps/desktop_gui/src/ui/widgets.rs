use eframe::egui;

use crate::ui::theme::{self, ThemeMode};

pub const COPY_CONFIRMATION_TEXT: &str = "📋 Copied to clipboard!";

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).strong());
}

/// Full-width call to action, greyed out while disabled.
pub fn primary_button(ui: &egui::Ui, text: &str, enabled: bool) -> egui::Button<'static> {
    let fill = if enabled { theme::PRIMARY } else { theme::DISABLED };
    egui::Button::new(
        egui::RichText::new(text)
            .strong()
            .size(16.0)
            .color(egui::Color32::WHITE),
    )
    .fill(fill)
    .min_size(egui::vec2(ui.available_width(), 40.0))
}

pub fn loading_button(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 40.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(4), theme::PRIMARY);
    let spinner_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0));
    ui.put(
        spinner_rect,
        egui::Spinner::new().size(24.0).color(egui::Color32::WHITE),
    );
}

/// Bottom-centred confirmation. Returns true when the close button was clicked.
pub fn copy_toast(ctx: &egui::Context, mode: ThemeMode) -> bool {
    let mut closed = false;
    egui::Area::new(egui::Id::new("copy_confirmation_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(mode.success_color())
                .inner_margin(egui::Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(COPY_CONFIRMATION_TEXT)
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                        ui.add_space(12.0);
                        let close = egui::Button::new(
                            egui::RichText::new("✖").color(egui::Color32::WHITE),
                        )
                        .frame(false);
                        if ui.add(close).clicked() {
                            closed = true;
                        }
                    });
                });
        });
    closed
}
