//! Common types and data structures

/// Change notification forwarded by an editable field.
///
/// Carries the raw text after the edit; nothing is validated or trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field_id: String,
    pub value: String,
}

/// Accent color tag for a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatColor {
    Teal,
    Sky,
    Amber,
}

/// A single summary statistic. `value` is display text, already formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub color: StatColor,
}
