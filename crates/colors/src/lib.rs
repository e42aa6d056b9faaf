#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod config;
pub mod emit;
mod error;
pub mod flatten;
pub mod format;
pub mod output;
pub mod palette;
pub mod tokens;

use std::path::Path;

pub use config::GeneratorConfig;
pub use emit::{emit, Documents};
pub use error::ColorsError;
pub use flatten::{flatten, swatch_identifier, ColorRecord};
pub use output::{check_documents, write_documents, OutputPaths};
pub use palette::carbon_palette;
pub use tokens::ColorTable;

/// Flattens `table` and renders both stylesheets.
#[must_use]
pub fn generate(table: &ColorTable, config: &GeneratorConfig) -> Documents {
    emit(&flatten(table), config)
}

/// Generates the stylesheets and writes them into `dir`.
pub fn build(
    table: &ColorTable,
    config: &GeneratorConfig,
    dir: &Path,
) -> Result<Documents, ColorsError> {
    log::info!(
        "building scss for {} swatches ({} colors)",
        table.swatch_count(),
        table.grade_count()
    );
    let documents = generate(table, config);
    write_documents(&OutputPaths::new(dir), &documents)?;
    log::info!("wrote color stylesheets to {}", dir.display());
    Ok(documents)
}
