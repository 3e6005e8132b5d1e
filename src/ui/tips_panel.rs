//! Tips panel - a titled, fixed list of advisory notes

use crate::theme;
use crate::ui::components::section_title;
use eframe::egui;

pub const TITLE: &str = "Tips";

/// Advisory tips in display order
pub const TIPS: [&str; 5] = [
    "Set aside a share of every payment for taxes before spending it.",
    "Send invoices as soon as a project milestone is delivered.",
    "Review your hourly rate at least once a year.",
    "Keep business and personal expenses in separate accounts.",
    "Follow up on unpaid invoices after 30 days.",
];

/// Marker drawn before each tip
const MARKER: &str = egui_phosphor::regular::LIGHTBULB;

pub fn show(ui: &mut egui::Ui) {
    theme::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_title(ui, egui_phosphor::regular::INFO, TITLE);
        ui.add_space(theme::SPACING_SM);

        for tip in TIPS {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(egui::RichText::new(MARKER).color(theme::ACCENT))
                        .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(tip)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_SECONDARY),
                    )
                    .wrap(),
                );
            });
        }
    });
}
