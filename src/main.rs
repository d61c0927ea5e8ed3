//! Command-line front end: pick a catalogued shape and write its scene as
//! an embeddable HTML page or JSON.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vsepr::catalog::{Catalog, ShapeKey};
use vsepr::error::VseprError;
use vsepr::export;
use vsepr::options::Options;
use vsepr::scene::SceneGenerator;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Json,
}

/// Render VSEPR electron-domain geometries.
#[derive(Parser, Debug)]
#[command(name = "vsepr", version, about)]
struct Cli {
    /// Shape key, "{domains}_{lone_pairs}" (e.g. 4_1).
    #[arg(required_unless_present_any = ["list", "schema", "write_options"])]
    key: Option<ShapeKey>,

    /// List the catalogued shapes and exit.
    #[arg(long)]
    list: bool,

    /// Do not annotate bond angles.
    #[arg(long)]
    no_angles: bool,

    /// TOML options preset.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the effective options as TOML to FILE and exit.
    #[arg(long, value_name = "FILE")]
    write_options: Option<PathBuf>,

    /// Print the options JSON schema and exit.
    #[arg(long)]
    schema: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), VseprError> {
    let options = match &cli.options {
        Some(path) => {
            let options = Options::load(path)?;
            log::info!("Loaded options from {}", path.display());
            options
        }
        None => Options::default(),
    };

    if let Some(path) = &cli.write_options {
        options.save(path)?;
        log::info!("Saved options to {}", path.display());
        return Ok(());
    }

    if cli.schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())?;
        return emit(&schema, cli.output.as_ref());
    }

    let catalog = Catalog::global();
    if cli.list {
        let listing: String = catalog
            .iter()
            .map(|(key, shape)| {
                format!(
                    "{key}\t{} bonded\t{}\n",
                    shape.bonded_count(),
                    shape.display_name
                )
            })
            .collect();
        return emit(&listing, cli.output.as_ref());
    }

    let Some(key) = cli.key else {
        return Err(VseprError::InvalidKey(String::new()));
    };
    let shape = catalog.lookup(key)?;

    let show_angles = !cli.no_angles;
    if show_angles && !shape.is_all_bonded() {
        log::debug!("{key} has lone pairs; angle annotations are not drawn");
    }

    let generator = SceneGenerator::new(options);
    let scene = generator.generate_scene(shape, show_angles);
    let rendered = match cli.format {
        Format::Html => export::to_html(&scene, &generator.options().viewer)?,
        Format::Json => export::to_json(&scene)?,
    };
    emit(&rendered, cli.output.as_ref())
}

fn emit(content: &str, output: Option<&PathBuf>) -> Result<(), VseprError> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            log::info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
