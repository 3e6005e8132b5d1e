//! App module - contains the main application state and logic

use crate::settings::Settings;
use crate::theme;
use crate::types::FieldChange;
use crate::ui::labeled_field::LabeledField;
use crate::ui::{components, stat_cards, tips_panel};
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info, warn};

// ============================================================================
// APP STATE
// ============================================================================

/// Caller-owned state behind one labeled field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountField {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub editable: bool,
    pub prefix: Option<&'static str>,
}

impl AccountField {
    fn to_widget(&self) -> LabeledField {
        let field = LabeledField::new(self.id, self.label, self.value.as_str())
            .editable(self.editable);
        match self.prefix {
            Some(prefix) => field.prefix(prefix),
            None => field,
        }
    }
}

fn default_account_fields() -> Vec<AccountField> {
    vec![
        AccountField {
            id: "business_name",
            label: "Business Name",
            value: "Northwind Studio".to_owned(),
            editable: true,
            prefix: None,
        },
        AccountField {
            id: "hourly_rate",
            label: "Hourly Rate",
            value: "100".to_owned(),
            editable: true,
            prefix: Some("$"),
        },
        AccountField {
            id: "account_id",
            label: "Account ID",
            value: "ACC-000142".to_owned(),
            editable: false,
            prefix: None,
        },
    ]
}

pub struct App {
    pub(crate) fields: Vec<AccountField>,
    pub(crate) data_dir: PathBuf,
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        theme::install_fonts(&cc.egui_ctx);
        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings, data_dir)
    }

    pub(crate) fn with_settings(settings: Settings, data_dir: PathBuf) -> Self {
        Self {
            fields: default_account_fields(),
            data_dir,
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            needs_center: settings.window_pos().is_none(),
            settings,
        }
    }

    /// Owner side of the controlled fields: store the edited text as-is.
    pub fn apply_change(&mut self, change: FieldChange) {
        match self.fields.iter_mut().find(|f| f.id == change.field_id) {
            Some(field) => {
                debug!(field = field.id, "Field edited");
                field.value = change.value;
            }
            None => warn!(field = %change.field_id, "Change for unknown field ignored"),
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.set_window(self.window_pos, self.window_size);
        self.settings.save(&self.data_dir);
    }

    /// Draw all panels for one frame
    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("stats_panel")
            .resizable(false)
            .exact_width(theme::SIDEBAR_WIDTH)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8))
                    .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                components::section_title(ui, egui_phosphor::regular::CHART_BAR, "Overview");
                ui.add_space(theme::SPACING_MD);
                stat_cards::show(ui);
            });

        let mut changes = Vec::new();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Account")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(theme::SPACING_MD);
                    theme::card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for field in &self.fields {
                            field.to_widget().show(ui, |change| changes.push(change));
                            ui.add_space(theme::SPACING_SM);
                        }
                    });
                    ui.add_space(theme::SPACING_XL);
                    tips_panel::show(ui);
                });
            });

        for change in changes {
            self.apply_change(change);
        }
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.render(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
