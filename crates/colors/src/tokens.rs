//! Ordered color-token table that feeds the stylesheet generator.

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ColorsError;

/// Grades of a single swatch, keyed by grade in insertion order.
pub type Grades = IndexMap<String, String>;

/// Two-level mapping of swatch → grade → color value.
///
/// Iteration follows insertion order for both levels, which is the order the
/// generated stylesheets list swatches and grades in. Inserting a grade that
/// already exists replaces its value and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable {
    swatches: IndexMap<String, Grades>,
}

impl ColorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `swatch`/`grade`, returning the value it replaced.
    pub fn insert(
        &mut self,
        swatch: impl Into<String>,
        grade: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.swatches
            .entry(swatch.into())
            .or_default()
            .insert(grade.into(), value.into())
    }

    /// Builder-style helper that appends a whole swatch.
    #[must_use]
    pub fn with_swatch<I, G, V>(mut self, swatch: impl Into<String>, grades: I) -> Self
    where
        I: IntoIterator<Item = (G, V)>,
        G: Into<String>,
        V: Into<String>,
    {
        let swatch = swatch.into();
        let entry = self.swatches.entry(swatch).or_default();
        for (grade, value) in grades {
            entry.insert(grade.into(), value.into());
        }
        self
    }

    /// Iterates over swatches and their grades in insertion order.
    pub fn swatches(&self) -> impl Iterator<Item = (&str, &Grades)> {
        self.swatches
            .iter()
            .map(|(swatch, grades)| (swatch.as_str(), grades))
    }

    /// Looks up a single color value.
    #[must_use]
    pub fn get(&self, swatch: &str, grade: &str) -> Option<&str> {
        self.swatches
            .get(swatch)
            .and_then(|grades| grades.get(grade))
            .map(String::as_str)
    }

    /// Number of swatches in the table.
    #[must_use]
    pub fn swatch_count(&self) -> usize {
        self.swatches.len()
    }

    /// Total number of (swatch, grade) pairs.
    #[must_use]
    pub fn grade_count(&self) -> usize {
        self.swatches.values().map(IndexMap::len).sum()
    }

    /// Returns `true` when the table holds no swatches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Parses a JSON object of objects of strings, keeping document order.
    pub fn from_json_str(source: &str) -> Result<Self, ColorsError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a JSON token file from disk.
    pub fn load(path: &Path) -> Result<Self, ColorsError> {
        let source = fs::read_to_string(path).map_err(|source| ColorsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }
}

impl<S, I, G, V> FromIterator<(S, I)> for ColorTable
where
    S: Into<String>,
    I: IntoIterator<Item = (G, V)>,
    G: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |table, (swatch, grades)| {
                table.with_swatch(swatch, grades)
            })
    }
}
