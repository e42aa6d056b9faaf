//! Renders flattened color records into the mixins and entrypoint documents.

use indexmap::IndexMap;

use crate::{config::GeneratorConfig, flatten::ColorRecord, format::format};

const FLAGS: &str = "!default !global";

/// The two generated stylesheets, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documents {
    /// Defines the legacy and namespaced mixins.
    pub mixins: String,
    /// Imports the mixins and includes both, legacy first.
    pub entrypoint: String,
}

/// `$<namespace>--<swatch>-<grade>` declarations.
#[must_use]
pub fn namespaced_variables(records: &[ColorRecord], config: &GeneratorConfig) -> Vec<String> {
    declarations(records, &format!("{}--", config.namespace))
}

/// `$<legacy_prefix>__<swatch>-<grade>` declarations.
#[must_use]
pub fn legacy_variables(records: &[ColorRecord], config: &GeneratorConfig) -> Vec<String> {
    declarations(records, &format!("{}__", config.legacy_prefix))
}

/// Unprefixed `$<swatch>-<grade>` declarations.
#[must_use]
pub fn bare_variables(records: &[ColorRecord]) -> Vec<String> {
    declarations(records, "")
}

fn declarations(records: &[ColorRecord], prefix: &str) -> Vec<String> {
    records
        .iter()
        .map(|record| format!("${prefix}{}: {} {FLAGS};", record.token(), record.value))
        .collect()
}

/// Which swatch name keys the entries of a nested map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKeys {
    /// Kebab-cased identifier (`'cool-gray'`).
    Identifier,
    /// Key as written in the table (`'coolGray'`). Deprecated consumers look
    /// swatches up by these names.
    Table,
}

impl MapKeys {
    fn of(self, record: &ColorRecord) -> &str {
        match self {
            Self::Identifier => &record.swatch,
            Self::Table => &record.key,
        }
    }
}

/// Nested `$<name>: ('<swatch>': (<grade>: <value>, ...), ...)` literal.
///
/// Records are grouped back by swatch in first-seen order. With no records
/// the map is the empty list `()`.
#[must_use]
pub fn color_map(name: &str, records: &[ColorRecord], keys: MapKeys) -> Vec<String> {
    if records.is_empty() {
        return vec![format!("${name}: () {FLAGS};")];
    }

    let mut swatches: IndexMap<&str, Vec<&ColorRecord>> = IndexMap::new();
    for record in records {
        swatches.entry(keys.of(record)).or_default().push(record);
    }

    let mut lines = vec![format!("${name}: (")];
    for (swatch, grades) in swatches {
        lines.push(format!("'{swatch}': ("));
        lines.extend(
            grades
                .into_iter()
                .map(|record| format!("{}: {},", record.grade, record.value)),
        );
        lines.push("),".to_owned());
    }
    lines.push(format!(") {FLAGS};"));
    lines
}

/// Body lines for a mixin: declarations, then the map, optionally with a
/// blank line between them.
fn mixin(name: &str, variables: Vec<String>, map: Vec<String>, separated: bool) -> Vec<String> {
    let mut lines = vec![format!("@mixin {name} {{")];
    let separated = separated && !variables.is_empty();
    lines.extend(variables);
    if separated {
        lines.push(String::new());
    }
    lines.extend(map);
    lines.push("}".to_owned());
    lines
}

/// Builds both documents from `records`.
#[must_use]
pub fn emit(records: &[ColorRecord], config: &GeneratorConfig) -> Documents {
    let options = config.format_options();
    Documents {
        mixins: format(&mixins_source(records, config).join("\n"), &options),
        entrypoint: format(&entrypoint_source(config).join("\n"), &options),
    }
}

fn mixins_source(records: &[ColorRecord], config: &GeneratorConfig) -> Vec<String> {
    let mut namespaced = namespaced_variables(records, config);
    if config.bare_variables {
        namespaced.extend(bare_variables(records));
    }

    let mut lines = vec![
        config.header.clone(),
        String::new(),
        "// Deprecated ☠️".to_owned(),
    ];
    lines.extend(mixin(
        &config.legacy_mixin,
        legacy_variables(records, config),
        color_map(&config.legacy_map(), records, MapKeys::Table),
        true,
    ));
    lines.push(String::new());
    lines.extend(mixin(
        &config.namespaced_mixin(),
        namespaced,
        color_map(&config.namespaced_mixin(), records, MapKeys::Identifier),
        false,
    ));
    lines
}

fn entrypoint_source(config: &GeneratorConfig) -> Vec<String> {
    vec![
        config.header.clone(),
        String::new(),
        "@import './mixins';".to_owned(),
        String::new(),
        "// Deprecated ☠️".to_owned(),
        format!("@include {}();", config.legacy_mixin),
        "// Preferred".to_owned(),
        format!("@include {}();", config.namespaced_mixin()),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{flatten::flatten, tokens::ColorTable};

    fn red() -> Vec<ColorRecord> {
        flatten(&ColorTable::new().with_swatch("Red", [("10", "#fff1f1"), ("100", "#750e13")]))
    }

    #[test]
    fn declaration_lines() {
        let config = GeneratorConfig::default();
        let records = red();
        assert_eq!(
            namespaced_variables(&records, &config)[0],
            "$carbon--red-10: #fff1f1 !default !global;"
        );
        assert_eq!(
            legacy_variables(&records, &config)[0],
            "$ibm-color__red-10: #fff1f1 !default !global;"
        );
        assert_eq!(bare_variables(&records)[1], "$red-100: #750e13 !default !global;");
    }

    #[test]
    fn map_groups_by_first_seen_swatch() {
        let records = flatten(
            &ColorTable::new()
                .with_swatch("coolGray", [("10", "#f2f4f8")])
                .with_swatch("red", [("10", "#fff1f1"), ("20", "#ffd7d9")]),
        );
        assert_eq!(
            color_map("carbon--colors", &records, MapKeys::Identifier),
            [
                "$carbon--colors: (",
                "'cool-gray': (",
                "10: #f2f4f8,",
                "),",
                "'red': (",
                "10: #fff1f1,",
                "20: #ffd7d9,",
                "),",
                ") !default !global;",
            ]
        );
    }

    #[test]
    fn legacy_map_keeps_table_keys() {
        let records = flatten(
            &ColorTable::new()
                .with_swatch("coolGray", [("10", "#f2f4f8")])
                .with_swatch("red", [("10", "#fff1f1")]),
        );
        let documents = emit(&records, &GeneratorConfig::default());

        let legacy = documents.mixins.find("$ibm-color-map: (").unwrap();
        let namespaced = documents.mixins.find("$carbon--colors: (").unwrap();
        assert!(documents.mixins[legacy..namespaced].contains("'coolGray': ("));
        assert!(documents.mixins[namespaced..].contains("'cool-gray': ("));
        assert!(!documents.mixins[namespaced..].contains("'coolGray'"));
        assert_eq!(
            color_map("ibm-color-map", &records, MapKeys::Table)[1],
            "'coolGray': ("
        );
    }

    #[test]
    fn mixins_document_layout() {
        let documents = emit(&red(), &GeneratorConfig::default());
        let expected = "\
// Code generated by @carbon/colors. DO NOT EDIT.

// Deprecated ☠️
@mixin ibm--colors {
  $ibm-color__red-10: #fff1f1 !default !global;
  $ibm-color__red-100: #750e13 !default !global;

  $ibm-color-map: (
    'Red': (
      10: #fff1f1,
      100: #750e13,
    ),
  ) !default !global;
}

@mixin carbon--colors {
  $carbon--red-10: #fff1f1 !default !global;
  $carbon--red-100: #750e13 !default !global;
  $red-10: #fff1f1 !default !global;
  $red-100: #750e13 !default !global;
  $carbon--colors: (
    'red': (
      10: #fff1f1,
      100: #750e13,
    ),
  ) !default !global;
}
";
        assert_eq!(documents.mixins, expected);
    }

    #[test]
    fn entrypoint_includes_legacy_first() {
        let documents = emit(&red(), &GeneratorConfig::default());
        let expected = "\
// Code generated by @carbon/colors. DO NOT EDIT.

@import './mixins';

// Deprecated ☠️
@include ibm--colors();
// Preferred
@include carbon--colors();
";
        assert_eq!(documents.entrypoint, expected);
    }

    #[test]
    fn bare_variables_can_be_disabled() {
        let config = GeneratorConfig {
            bare_variables: false,
            ..GeneratorConfig::default()
        };
        let documents = emit(&red(), &config);
        assert!(!documents.mixins.contains("  $red-10:"));
        assert!(documents.mixins.contains("$carbon--red-10: #fff1f1"));
    }

    #[test]
    fn empty_records_emit_empty_maps() {
        let documents = emit(&[], &GeneratorConfig::default());
        let expected = "\
// Code generated by @carbon/colors. DO NOT EDIT.

// Deprecated ☠️
@mixin ibm--colors {
  $ibm-color-map: () !default !global;
}

@mixin carbon--colors {
  $carbon--colors: () !default !global;
}
";
        assert_eq!(documents.mixins, expected);
        assert!(!documents.mixins.contains("__"));
    }

    #[test]
    fn emitting_twice_is_byte_identical() {
        let records = flatten(crate::palette::carbon_palette());
        let config = GeneratorConfig::default();
        assert_eq!(emit(&records, &config), emit(&records, &config));
    }

    #[test]
    fn custom_names_flow_through() {
        let config = GeneratorConfig {
            namespace: "cds".to_owned(),
            legacy_prefix: "old".to_owned(),
            legacy_mixin: "old--colors".to_owned(),
            ..GeneratorConfig::default()
        };
        let documents = emit(&red(), &config);
        assert!(documents.mixins.contains("@mixin cds--colors {"));
        assert!(documents.mixins.contains("$old-map: ("));
        assert!(documents.mixins.contains("$old__red-10: #fff1f1"));
        assert!(documents.entrypoint.contains("@include old--colors();"));
    }
}
