pub mod primitives;

use chrono::NaiveDateTime;
use rand::RngCore;

use crate::kinds::ColumnKind;

/// Rendering of a timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `2006-01-02 15:04:05`
    Space,
    /// `2006-01-02T15:04:05`
    T,
}

impl DateStyle {
    fn format(self) -> &'static str {
        match self {
            DateStyle::Space => "%Y-%m-%d %H:%M:%S",
            DateStyle::T => "%Y-%m-%dT%H:%M:%S",
        }
    }
}

/// Generated value for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Int(i64),
    Text(String),
    Timestamp(NaiveDateTime, DateStyle),
}

impl GeneratedValue {
    pub fn to_field(&self) -> String {
        match self {
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Text(value) => value.clone(),
            GeneratedValue::Timestamp(value, style) => value.format(style.format()).to_string(),
        }
    }
}

/// Per-row inputs shared by every column generator.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext {
    /// Timestamp rendered by date columns.
    pub now: NaiveDateTime,
}

/// Produce one value for `kind`.
pub fn generate_value(
    kind: &ColumnKind,
    ctx: &GeneratorContext,
    rng: &mut dyn RngCore,
) -> GeneratedValue {
    match kind {
        ColumnKind::String => GeneratedValue::Text(primitives::random_alphanumeric(rng)),
        ColumnKind::Number => GeneratedValue::Int(primitives::random_number(rng)),
        ColumnKind::Date => GeneratedValue::Timestamp(ctx.now, DateStyle::Space),
        ColumnKind::DateT => GeneratedValue::Timestamp(ctx.now, DateStyle::T),
        ColumnKind::Hexa => GeneratedValue::Text(primitives::random_hex(rng, 16)),
        ColumnKind::Color => GeneratedValue::Text(primitives::random_color(rng)),
        ColumnKind::PickList(items) => GeneratedValue::Text(primitives::pick(items, rng)),
    }
}

/// Build one row: every column rendered and joined by `separator`, without a
/// trailing newline.
pub fn generate_row(
    columns: &[ColumnKind],
    separator: &str,
    ctx: &GeneratorContext,
    rng: &mut dyn RngCore,
) -> String {
    columns
        .iter()
        .map(|kind| generate_value(kind, ctx, rng).to_field())
        .collect::<Vec<_>>()
        .join(separator)
}
