//! Flattens a [`ColorTable`] into one record per swatch grade.

use heck::ToKebabCase;

use crate::tokens::ColorTable;

/// A single color value with its kebab-cased swatch and grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRecord {
    /// Lowercase, hyphen-separated swatch identifier (`cool-gray`).
    pub swatch: String,
    /// Swatch key exactly as written in the table (`coolGray`).
    pub key: String,
    /// Grade within the swatch (`10`, `100`).
    pub grade: String,
    /// Color value as written in the table.
    pub value: String,
}

impl ColorRecord {
    /// `<swatch>-<grade>`, the suffix shared by every variable name.
    #[must_use]
    pub fn token(&self) -> String {
        format!("{}-{}", self.swatch, self.grade)
    }
}

/// Converts a swatch key into the identifier used in stylesheets.
///
/// `CoolGray` and `coolGray` both become `cool-gray`; applying the transform
/// to its own output is a no-op.
#[must_use]
pub fn swatch_identifier(swatch: &str) -> String {
    swatch.to_kebab_case()
}

/// Flattens the table in swatch order, then grade order.
#[must_use]
pub fn flatten(table: &ColorTable) -> Vec<ColorRecord> {
    table
        .swatches()
        .flat_map(|(key, grades)| {
            let swatch = swatch_identifier(key);
            grades.iter().map(move |(grade, value)| ColorRecord {
                swatch: swatch.clone(),
                key: key.to_owned(),
                grade: grade.clone(),
                value: value.clone(),
            })
        })
        .collect()
}
