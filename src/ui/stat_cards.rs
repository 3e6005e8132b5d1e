//! Summary stat cards, stacked vertically

use crate::theme;
use crate::types::{Stat, StatColor};
use crate::ui::components::accent_bar;
use eframe::egui;

/// Headline figures shown on the dashboard, top to bottom
pub const STATS: [Stat; 3] = [
    Stat {
        title: "Net Income",
        value: "$250,000.00",
        color: StatColor::Teal,
    },
    Stat {
        title: "Number of New Clients",
        value: "36",
        color: StatColor::Sky,
    },
    Stat {
        title: "Number of Completed Projects",
        value: "29",
        color: StatColor::Amber,
    },
];

pub fn show(ui: &mut egui::Ui) {
    ui.vertical(|ui| {
        for stat in &STATS {
            stat_card(ui, stat);
            ui.add_space(theme::SPACING_MD);
        }
    });
}

fn stat_card(ui: &mut egui::Ui, stat: &Stat) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            accent_bar(ui, theme::stat_color(stat.color), 44.0);
            ui.add_space(theme::SPACING_SM);
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(stat.title)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(stat.value)
                            .size(theme::FONT_STAT_VALUE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
            });
        });
    });
}
