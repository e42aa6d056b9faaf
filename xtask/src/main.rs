use std::{error::Error, io, path::PathBuf};

use clap::{Parser, Subcommand};
use colors::{check_documents, generate, ColorTable, GeneratorConfig, OutputPaths};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = Xtask::parse().run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "xtask",
    about = "Workspace utilities for the Carbon color packages",
    version
)]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Debug, Subcommand)]
enum XtaskCommand {
    /// Generate the color mixins and entrypoint stylesheets.
    Colors {
        /// Directory that receives mixins.scss and colors.scss. Defaults to
        /// the colors crate's scss directory.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// JSON token file to use instead of the built-in palette.
        #[arg(long)]
        tokens: Option<PathBuf>,
        /// JSON generator configuration.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Fail if the files on disk differ from freshly generated output
        /// instead of writing them.
        #[arg(long)]
        check: bool,
    },
}

impl Xtask {
    fn run(self) -> Result<(), Box<dyn Error>> {
        match self.command {
            XtaskCommand::Colors {
                out_dir,
                tokens,
                config,
                check,
            } => {
                let out_dir = match out_dir {
                    Some(dir) => absolute(dir)?,
                    None => workspace_root()?.join("crates/colors/scss"),
                };
                let config = match config {
                    Some(path) => GeneratorConfig::load(&absolute(path)?)?,
                    None => GeneratorConfig::default(),
                };
                let table = match tokens {
                    Some(path) => ColorTable::load(&absolute(path)?)?,
                    None => colors::carbon_palette().clone(),
                };

                if check {
                    check_colors(&table, &config, out_dir)
                } else {
                    colors::build(&table, &config, &out_dir)?;
                    println!(
                        "Generated {} color(s) across {} swatch(es) into {}",
                        table.grade_count(),
                        table.swatch_count(),
                        out_dir.display()
                    );
                    Ok(())
                }
            }
        }
    }
}

fn check_colors(
    table: &ColorTable,
    config: &GeneratorConfig,
    out_dir: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let documents = generate(table, config);
    let stale = check_documents(&OutputPaths::new(out_dir), &documents)?;
    if stale.is_empty() {
        println!("Color stylesheets are up to date");
        return Ok(());
    }

    for path in &stale {
        log::warn!("{} is out of date", path.display());
    }
    let listed = stale
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!("generated files are stale: {listed}; run `cargo xtask colors`").into())
}

fn absolute(path: PathBuf) -> io::Result<PathBuf> {
    if path.is_relative() {
        Ok(std::env::current_dir()?.join(path))
    } else {
        Ok(path)
    }
}

fn workspace_root() -> io::Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "workspace root"))
}
