//! Reusable UI components
//!
//! Small building blocks shared by the dashboard widgets.

use crate::theme;
use eframe::egui;

/// Section heading: accent icon followed by the title text
pub fn section_title(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(icon)
                    .size(theme::FONT_HEADING)
                    .color(theme::ACCENT),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
    });
}

/// Vertical accent bar painted at the left edge of the available space.
/// Allocates its own width so following widgets sit to the right of it.
pub fn accent_bar(ui: &mut egui::Ui, color: egui::Color32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(theme::STAT_BAR_WIDTH, height),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT / 2.0, color);
    }
}
