//! Labeled text field
//!
//! A controlled input: the caller owns the value and receives a
//! [`FieldChange`] for every edit. The field never keeps the edited text
//! itself, so the displayed value is whatever the caller passes in on the
//! next frame.

use crate::theme;
use crate::types::FieldChange;
use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledField {
    field_id: String,
    label: String,
    value: String,
    editable: bool,
    prefix: Option<String>,
}

impl LabeledField {
    /// Read-only field without a prefix. `field_id` must be unique within the form.
    pub fn new(
        field_id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            label: label.into(),
            value: value.into(),
            editable: false,
            prefix: None,
        }
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Text shown in front of the input, e.g. a currency symbol
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// egui id of the input control, derived from `field_id`
    pub fn input_id(&self) -> egui::Id {
        egui::Id::new(("labeled_field", self.field_id.as_str()))
    }

    /// Forward an edit to the owner.
    ///
    /// Read-only fields drop every edit. An edit that leaves the text
    /// unchanged is not a change, the same rule a browser applies before
    /// firing `change`; the content itself is never checked or rewritten.
    /// Returns true if `on_change` was called.
    pub fn forward_edit(
        &self,
        edited: impl Into<String>,
        mut on_change: impl FnMut(FieldChange),
    ) -> bool {
        if !self.editable {
            return false;
        }
        let edited = edited.into();
        if edited == self.value {
            return false;
        }
        on_change(FieldChange {
            field_id: self.field_id.clone(),
            value: edited,
        });
        true
    }

    /// Render label, optional prefix and input. Returns the input's response.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        mut on_change: impl FnMut(FieldChange),
    ) -> egui::Response {
        ui.vertical(|ui| {
            let label = ui.add(
                egui::Label::new(
                    egui::RichText::new(&self.label)
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );

            ui.horizontal(|ui| {
                if let Some(prefix) = &self.prefix {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(prefix)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                }

                // Edits land in a per-frame copy; only the owner can change `value`.
                let mut buffer = self.value.clone();
                let text_color = if self.editable {
                    theme::TEXT_PRIMARY
                } else {
                    theme::TEXT_MUTED
                };
                let response = ui
                    .add(
                        egui::TextEdit::singleline(&mut buffer)
                            .id(self.input_id())
                            .interactive(self.editable)
                            .text_color(text_color)
                            .desired_width(theme::FIELD_WIDTH),
                    )
                    .labelled_by(label.id);

                if response.changed() {
                    self.forward_edit(buffer, &mut on_change);
                }
                response
            })
            .inner
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{find, render_texts, render_texts_with};

    fn typing(text: &str) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Text(text.to_owned())],
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_read_only_no_prefix() {
        let field = LabeledField::new("rate", "Hourly Rate", "100");
        assert!(!field.editable);
        assert_eq!(field.prefix, None);
        assert_eq!(field.field_id, "rate");
        assert_eq!(field.label, "Hourly Rate");
    }

    #[test]
    fn test_read_only_never_forwards() {
        let field = LabeledField::new("rate", "Hourly Rate", "100");
        let mut calls = 0;
        assert!(!field.forward_edit("200", |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_editable_forwards_once_with_raw_value() {
        let field = LabeledField::new("rate", "Hourly Rate", "100").editable(true);
        let mut changes = Vec::new();
        assert!(field.forward_edit("200", |c| changes.push(c)));
        assert_eq!(
            changes,
            vec![FieldChange {
                field_id: "rate".to_owned(),
                value: "200".to_owned(),
            }]
        );
        // The owner has not re-rendered yet, so the field still shows the old value
        assert_eq!(field.value, "100");
    }

    #[test]
    fn test_editable_passes_text_through_unvalidated() {
        let field = LabeledField::new("rate", "Hourly Rate", "100").editable(true);
        let mut seen = None;
        field.forward_edit("  -12abc ", |c| seen = Some(c.value));
        assert_eq!(seen.as_deref(), Some("  -12abc "));
    }

    #[test]
    fn test_unchanged_text_is_not_a_change() {
        let field = LabeledField::new("rate", "Hourly Rate", "100").editable(true);
        let mut calls = 0;
        assert!(!field.forward_edit("100", |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_read_only_ignores_typed_input() {
        let field = LabeledField::new("rate", "Hourly Rate", "100");
        let ctx = egui::Context::default();
        let mut calls = 0;

        render_texts_with(&ctx, egui::RawInput::default(), |ui| {
            field.show(ui, |_| calls += 1);
        });
        ctx.memory_mut(|m| m.request_focus(field.input_id()));
        let texts = render_texts_with(&ctx, typing("2"), |ui| {
            field.show(ui, |_| calls += 1);
        });

        assert_eq!(calls, 0);
        assert!(find(&texts, "100").is_some());
    }

    #[test]
    fn test_editable_typed_input_forwards_once() {
        let field = LabeledField::new("rate", "Hourly Rate", "100").editable(true);
        let ctx = egui::Context::default();
        let mut changes = Vec::new();

        render_texts_with(&ctx, egui::RawInput::default(), |ui| {
            field.show(ui, |c| changes.push(c));
        });
        ctx.memory_mut(|m| m.request_focus(field.input_id()));
        // Select the whole value so the typed text replaces it
        let mut state = egui::TextEdit::load_state(&ctx, field.input_id()).unwrap_or_default();
        state.cursor.set_char_range(Some(egui::text::CCursorRange::two(
            egui::text::CCursor::new(0),
            egui::text::CCursor::new(field.value.chars().count()),
        )));
        state.store(&ctx, field.input_id());

        render_texts_with(&ctx, typing("200"), |ui| {
            field.show(ui, |c| changes.push(c));
        });
        assert_eq!(
            changes,
            vec![FieldChange {
                field_id: "rate".to_owned(),
                value: "200".to_owned(),
            }]
        );

        // Owner did not apply the change, so the next frame still shows "100"
        let texts = render_texts_with(&ctx, egui::RawInput::default(), |ui| {
            field.show(ui, |c| changes.push(c));
        });
        assert_eq!(changes.len(), 1);
        assert!(find(&texts, "100").is_some());
        assert!(find(&texts, "200").is_none());
    }

    #[test]
    fn test_render_without_input_does_not_notify() {
        let field = LabeledField::new("rate", "Hourly Rate", "100").editable(true);
        let mut calls = 0;
        let texts = render_texts(|ui| {
            field.show(ui, |_| calls += 1);
        });
        assert_eq!(calls, 0);
        assert!(find(&texts, "Hourly Rate").is_some());
        assert!(find(&texts, "100").is_some());
    }

    #[test]
    fn test_prefix_rendered_before_input() {
        let field = LabeledField::new("rate", "Hourly Rate", "100").prefix("$");
        let texts = render_texts(|ui| {
            field.show(ui, |_| {});
        });
        let prefix = find(&texts, "$").expect("prefix painted");
        let value = find(&texts, "100").expect("value painted");
        assert!(prefix.pos.x < value.pos.x);
    }

    #[test]
    fn test_no_prefix_rendered_when_absent() {
        let field = LabeledField::new("rate", "Hourly Rate", "100");
        let texts = render_texts(|ui| {
            field.show(ui, |_| {});
        });
        let labels: Vec<&str> = texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(labels, vec!["Hourly Rate", "100"]);
    }

    #[test]
    fn test_input_ids_follow_field_id() {
        let a = LabeledField::new("a", "A", "");
        let b = LabeledField::new("b", "B", "");
        assert_ne!(a.input_id(), b.input_id());
        assert_eq!(a.input_id(), LabeledField::new("a", "Other", "x").input_id());
    }
}
