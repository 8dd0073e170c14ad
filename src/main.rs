use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromagrid::assets::AssetLoader;
use chromagrid::error::AppError;
use chromagrid::models::{parse_size, AppConfig, GridOverrides, Shape};
use chromagrid::rendering::SvgRenderer;
use chromagrid::services::{ApproxMeasure, FontMeasure, GridGenerator, SvgCanvas, TextMeasure};
use cmyk_grid::{Channel, GridError, SourceColor};

#[derive(Parser)]
#[command(name = "chromagrid")]
#[command(about = "Duplicate an object into a labeled CMYK color swatch grid")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the grid and write it as SVG or PNG
    Render {
        /// Config file (defaults to CONFIG_FILE, then the embedded config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file; a .png extension rasterizes, anything else is SVG
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// PNG pixels per document unit
        #[arg(long)]
        scale: Option<f32>,

        /// Estimate label sizes instead of measuring with installed fonts
        #[arg(long)]
        approx_text: bool,
    },
    /// Print the planned cells as JSON without drawing anything
    Plan {
        /// Config file (defaults to CONFIG_FILE, then the embedded config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Write the embedded default config for customization
    Init {
        /// Target path
        #[arg(long, default_value = "config.yaml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Grid parameters that take precedence over the config file
#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Number of columns
    #[arg(long)]
    columns: Option<u32>,

    /// Number of rows
    #[arg(long)]
    rows: Option<u32>,

    /// Gap between cells
    #[arg(long)]
    spacing: Option<f32>,

    /// Sweep this channel (C, M, Y or K) across the grid
    #[arg(long, value_name = "CHANNEL")]
    vary: Option<Channel>,

    /// Disable color variation
    #[arg(long, conflicts_with = "vary")]
    no_vary: bool,

    /// Fill of the origin object, e.g. "#3366cc", "gray:40", "cmyk:0,50,100,0"
    #[arg(long)]
    fill: Option<SourceColor>,

    /// Size of the origin object as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    size: Option<(f32, f32)>,
}

impl OverrideArgs {
    fn into_overrides(self, scale: Option<f32>) -> GridOverrides {
        GridOverrides {
            columns: self.columns,
            rows: self.rows,
            spacing: self.spacing,
            vary: self.vary,
            no_vary: self.no_vary,
            fill: self.fill,
            size: self.size,
            scale,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            config,
            output,
            overrides,
            scale,
            approx_text,
        }) => {
            init_logging();
            let overrides = overrides.into_overrides(scale);
            match run_render_command(config, &output, &overrides, approx_text) {
                Ok(cells) => {
                    println!(
                        "Grid creation complete! {cells} cells written to {}",
                        output.display()
                    );
                    Ok(())
                }
                Err(e) => {
                    eprintln!("An error occurred: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Plan {
            config,
            overrides,
            pretty,
        }) => {
            init_logging();
            run_plan_command(config, &overrides.into_overrides(None), pretty)
        }
        Some(Commands::Init { path, force }) => run_init_command(&path, force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromagrid=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Load config from --config, then CONFIG_FILE, then the embedded default,
/// and apply command-line overrides.
fn load_config(path: Option<PathBuf>, overrides: &GridOverrides) -> Result<AppConfig, AppError> {
    let config_file = path.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let loader = AssetLoader::new(config_file);

    let mut config = AppConfig::load_from_assets(&loader)?;
    config.apply_overrides(overrides);
    Ok(config)
}

/// The origin object described by the config, if any
fn selection(config: &AppConfig) -> Result<Option<Shape>, AppError> {
    config
        .origin
        .as_ref()
        .map(|origin| Ok(Shape::new(origin.bounds(), origin.source_color()?)))
        .transpose()
}

/// Build the grid on an SVG canvas and write it out. Returns the cell count.
///
/// Nothing is written unless every cell was created.
fn run_render_command(
    config_path: Option<PathBuf>,
    output: &Path,
    overrides: &GridOverrides,
    approx_text: bool,
) -> Result<usize, AppError> {
    let config = load_config(config_path, overrides)?;
    let spec = config.grid_spec()?;
    let selection = selection(&config)?;
    let generator = GridGenerator::new(spec, config.label.font_fit());

    let renderer = SvgRenderer::new();
    let svg = if approx_text {
        build_svg(&generator, &config, selection, ApproxMeasure::default())?
    } else {
        let measure = FontMeasure::new(renderer.fontdb(), config.label.font_family.clone());
        build_svg(&generator, &config, selection, measure)?
    };

    let is_png = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    let bytes = if is_png {
        renderer.render_to_png(svg.as_bytes(), config.output.scale)?
    } else {
        svg.into_bytes()
    };

    std::fs::write(output, &bytes)?;
    tracing::info!(path = %output.display(), bytes = bytes.len(), png = is_png, "Wrote output");

    Ok(spec.cell_count())
}

fn build_svg<M: TextMeasure>(
    generator: &GridGenerator,
    config: &AppConfig,
    selection: Option<Shape>,
    measure: M,
) -> Result<String, AppError> {
    let mut canvas = SvgCanvas::new(selection, config.label.font_family.clone(), measure);
    generator.generate(&mut canvas)?;
    Ok(canvas.to_svg(config.output.margin))
}

/// Print the cell plans as JSON
fn run_plan_command(
    config_path: Option<PathBuf>,
    overrides: &GridOverrides,
    pretty: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    let spec = config.grid_spec()?;
    let origin = selection(&config)?.ok_or(GridError::NoSelection)?;
    let base = origin.fill.to_cmyk();

    let cells = cmyk_grid::plan_grid_par(origin.bounds, &spec, base);
    let document = serde_json::json!({
        "spec": spec,
        "origin": origin.bounds,
        "source": origin.fill.to_string(),
        "base": base,
        "cells": cells,
    });

    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{json}");
    Ok(())
}

fn run_init_command(path: &Path, force: bool) -> anyhow::Result<()> {
    let report = AssetLoader::init(path, force)?;

    for f in &report.written {
        println!("Wrote {f}");
    }
    for f in &report.skipped {
        println!("Skipped existing {f} (use --force to overwrite)");
    }

    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    // Header
    println!("Chromagrid v{VERSION}");
    println!("Labeled CMYK color swatch grids\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("chromagrid=warn (default)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "file not found".to_string(),
        None => AssetLoader::new(None).config_source(),
    };
    println!("\nConfig:  {config_source}");

    println!("\nCommands:");
    println!("  chromagrid render   Build the grid and write SVG or PNG");
    println!("  chromagrid plan     Print the planned cells as JSON");
    println!("  chromagrid init     Write the default config.yaml");
    println!("\nRun 'chromagrid --help' for more details.");
}
