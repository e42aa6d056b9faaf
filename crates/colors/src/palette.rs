//! Built-in Carbon color palette.

use once_cell::sync::Lazy;

use crate::tokens::ColorTable;

type Swatch = (&'static str, &'static [(&'static str, &'static str)]);

const GRADES: [&str; 10] = ["10", "20", "30", "40", "50", "60", "70", "80", "90", "100"];

const BLACK: Swatch = ("black", &[("100", "#000000")]);
const WHITE: Swatch = ("white", &[("0", "#ffffff")]);

const GRADED: &[(&str, [&str; 10])] = &[
    (
        "blue",
        [
            "#edf5ff", "#d0e2ff", "#a6c8ff", "#78a9ff", "#4589ff", "#0f62fe", "#0043ce",
            "#002d9c", "#001d6c", "#001141",
        ],
    ),
    (
        "coolGray",
        [
            "#f2f4f8", "#dde1e6", "#c1c7cd", "#a2a9b0", "#878d96", "#697077", "#4d5358",
            "#343a3f", "#21272a", "#121619",
        ],
    ),
    (
        "cyan",
        [
            "#e5f6ff", "#bae6ff", "#82cfff", "#33b1ff", "#1192e8", "#0072c3", "#00539a",
            "#003a6d", "#012749", "#061727",
        ],
    ),
    (
        "gray",
        [
            "#f4f4f4", "#e0e0e0", "#c6c6c6", "#a8a8a8", "#8d8d8d", "#6f6f6f", "#525252",
            "#393939", "#262626", "#161616",
        ],
    ),
    (
        "green",
        [
            "#defbe6", "#a7f0ba", "#6fdc8c", "#42be65", "#24a148", "#198038", "#0e6027",
            "#044317", "#022d0d", "#071908",
        ],
    ),
    (
        "magenta",
        [
            "#fff0f7", "#ffd6e8", "#ffafd2", "#ff7eb6", "#ee5396", "#d02670", "#9f1853",
            "#740937", "#510224", "#2a0a18",
        ],
    ),
    (
        "purple",
        [
            "#f6f2ff", "#e8daff", "#d4bbff", "#be95ff", "#a56eff", "#8a3ffc", "#6929c4",
            "#491d8b", "#31135e", "#1c0f30",
        ],
    ),
    (
        "red",
        [
            "#fff1f1", "#ffd7d9", "#ffb3b8", "#ff8389", "#fa4d56", "#da1e28", "#a2191f",
            "#750e13", "#520408", "#2d0709",
        ],
    ),
    (
        "teal",
        [
            "#d9fbfb", "#9ef0f0", "#3ddbd9", "#08bdba", "#009d9a", "#007d79", "#005d5d",
            "#004144", "#022b30", "#081a1c",
        ],
    ),
    (
        "warmGray",
        [
            "#f7f3f2", "#e5e0df", "#cac5c4", "#ada8a8", "#8f8b8b", "#736f6f", "#565151",
            "#3c3838", "#272525", "#171414",
        ],
    ),
];

static CARBON: Lazy<ColorTable> = Lazy::new(|| {
    let (name, grades) = BLACK;
    let mut table = ColorTable::new().with_swatch(name, grades.iter().copied());
    for (name, values) in GRADED {
        table = table.with_swatch(*name, GRADES.into_iter().zip(values.iter().copied()));
    }
    let (name, grades) = WHITE;
    table.with_swatch(name, grades.iter().copied())
});

/// The Carbon swatches in publication order, built once on first use.
pub fn carbon_palette() -> &'static ColorTable {
    &CARBON
}
