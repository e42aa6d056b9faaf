//! Naming and style options for the generated stylesheets.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{format::FormatOptions, ColorsError};

/// Preferred prefix for current-generation identifiers.
pub const DEFAULT_NAMESPACE: &str = "carbon";
/// Prefix kept on deprecated variables for backward compatibility.
pub const DEFAULT_LEGACY_PREFIX: &str = "ibm-color";
/// Name of the deprecated mixin.
pub const DEFAULT_LEGACY_MIXIN: &str = "ibm--colors";
/// Marker comment written at the top of every generated file.
pub const GENERATED_COMMENT: &str = "// Code generated by @carbon/colors. DO NOT EDIT.";

/// Generator configuration, loadable from JSON with every field optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Namespace used for `$<namespace>--red-10` and `<namespace>--colors`.
    pub namespace: String,
    /// Prefix used for `$<legacy_prefix>__red-10` and `$<legacy_prefix>-map`.
    pub legacy_prefix: String,
    /// Name of the deprecated mixin.
    pub legacy_mixin: String,
    /// Single-line comment that opens both documents.
    pub header: String,
    /// Maximum line width before lists are broken across lines.
    pub print_width: usize,
    /// Also emit unprefixed `$red-10` variables in the namespaced mixin.
    pub bare_variables: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            legacy_prefix: DEFAULT_LEGACY_PREFIX.to_owned(),
            legacy_mixin: DEFAULT_LEGACY_MIXIN.to_owned(),
            header: GENERATED_COMMENT.to_owned(),
            print_width: 80,
            bare_variables: true,
        }
    }
}

impl GeneratorConfig {
    /// Reads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ColorsError> {
        let bytes = fs::read(path).map_err(|source| ColorsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `<namespace>--colors`, the name of both the mixin and the map.
    #[must_use]
    pub fn namespaced_mixin(&self) -> String {
        format!("{}--colors", self.namespace)
    }

    /// `<legacy_prefix>-map`.
    #[must_use]
    pub fn legacy_map(&self) -> String {
        format!("{}-map", self.legacy_prefix)
    }

    /// Formatter settings derived from this configuration.
    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            print_width: self.print_width,
            single_quote: true,
        }
    }
}
