use std::fs;

use colors::{
    build, carbon_palette, check_documents, generate, swatch_identifier, ColorTable,
    GeneratorConfig, OutputPaths,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// Reads a generated `$<name>: ( ... )` map back into a table.
fn parse_map(document: &str, name: &str) -> ColorTable {
    let lines = document
        .lines()
        .map(str::trim)
        .skip_while(|line| *line != format!("${name}: ("))
        .skip(1);

    let mut table = ColorTable::new();
    let mut swatch: Option<String> = None;
    for line in lines {
        if line.starts_with(") ") {
            break;
        }
        if line == ")," {
            swatch = None;
        } else if let Some(key) = line
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix("': ("))
        {
            swatch = Some(key.to_owned());
        } else {
            let (grade, value) = line
                .trim_end_matches(',')
                .split_once(": ")
                .expect("grade entry");
            table.insert(swatch.clone().expect("inside a swatch"), grade, value);
        }
    }
    table
}

fn kebab_keys(table: &ColorTable) -> ColorTable {
    table
        .swatches()
        .map(|(swatch, grades)| (swatch_identifier(swatch), grades.clone()))
        .collect()
}

#[test]
fn maps_round_trip_to_the_palette() {
    let config = GeneratorConfig::default();
    let documents = generate(carbon_palette(), &config);
    let expected = kebab_keys(carbon_palette());

    assert_eq!(parse_map(&documents.mixins, "carbon--colors"), expected);
    assert_eq!(&parse_map(&documents.mixins, "ibm-color-map"), carbon_palette());
    assert!(documents.mixins.contains("'coolGray': ("));
}

#[test]
fn every_grade_gets_three_declarations() {
    let documents = generate(carbon_palette(), &GeneratorConfig::default());
    let count = |needle: &str| {
        documents
            .mixins
            .lines()
            .filter(|line| line.trim_start().starts_with(needle) && line.ends_with("!default !global;"))
            .count()
    };

    let grades = carbon_palette().grade_count();
    assert_eq!(count("$carbon--"), grades);
    assert_eq!(count("$ibm-color__"), grades);
    assert!(documents.mixins.contains("  $cool-gray-10: #f2f4f8 !default !global;"));
}

#[test]
fn build_writes_into_existing_directory() {
    let dir = tempdir().unwrap();
    let table = ColorTable::new().with_swatch("Red", [("10", "#fff1f1"), ("100", "#750e13")]);
    let config = GeneratorConfig::default();

    let documents = build(&table, &config, dir.path()).unwrap();
    let paths = OutputPaths::new(dir.path());
    assert_eq!(fs::read_to_string(paths.mixins()).unwrap(), documents.mixins);
    assert_eq!(fs::read_to_string(paths.entrypoint()).unwrap(), documents.entrypoint);
    assert!(documents
        .mixins
        .contains("$carbon--red-10: #fff1f1 !default !global;"));
    assert!(documents
        .mixins
        .contains("$ibm-color__red-10: #fff1f1 !default !global;"));

    let again = build(&table, &config, dir.path()).unwrap();
    assert_eq!(again, documents);
    assert!(check_documents(&paths, &documents).unwrap().is_empty());
}

#[test]
fn json_tokens_generate_in_document_order() {
    let table = ColorTable::from_json_str(
        r##"{ "warmGray": { "100": "#171414", "10": "#f7f3f2" }, "blue": { "60": "#0f62fe" } }"##,
    )
    .unwrap();
    let documents = generate(&table, &GeneratorConfig::default());

    let warm = documents.mixins.find("$carbon--warm-gray-100").unwrap();
    let warm_10 = documents.mixins.find("$carbon--warm-gray-10:").unwrap();
    let blue = documents.mixins.find("$carbon--blue-60").unwrap();
    assert!(warm < warm_10 && warm_10 < blue);
}

#[test]
fn both_documents_share_the_header() {
    let config = GeneratorConfig::default();
    let documents = generate(&ColorTable::new(), &config);
    assert_eq!(documents.mixins.lines().next(), Some(config.header.as_str()));
    assert_eq!(documents.entrypoint.lines().next(), Some(config.header.as_str()));
}
