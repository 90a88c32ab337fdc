//! Command-line driver for the gridmark annotation core.
//!
//! Stands in for the UI collaborator: loads the grid configuration and label
//! catalogs, decodes the background image, applies the requested marks, and
//! writes the CSV payload.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gridmark::constants::GRID_CONFIG_FILE;
use gridmark::{AnnotationGrid, Catalog, CellCoord, ExportMetadata, GridConfig, RasterSampler};

#[derive(Parser)]
#[command(name = "gridmark")]
#[command(about = "Mark grid cells on a product photo and export the marks as CSV")]
struct Cli {
    /// Background image to sample marker colors from
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Data directory holding grid_config.json, products.json, issues.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Cell to mark, as "x,y" (repeatable; a repeated cell toggles off)
    #[arg(short, long = "mark", value_name = "X,Y")]
    marks: Vec<CellCoord>,

    /// Product label for the CSV rows
    #[arg(short, long, default_value = "")]
    product: String,

    /// Issue label for the CSV rows
    #[arg(long, default_value = "")]
    issue: String,

    /// Override the configured number of grid rows
    #[arg(long)]
    rows: Option<u32>,

    /// Override the configured number of grid columns
    #[arg(long)]
    cols: Option<u32>,

    /// Write the CSV payload here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = GridConfig::load(&cli.data_dir.join(GRID_CONFIG_FILE));
    if cli.rows.is_some() || cli.cols.is_some() {
        config = GridConfig::new(
            cli.rows.unwrap_or(config.rows),
            cli.cols.unwrap_or(config.cols),
        );
    }

    let catalog = Catalog::load(&cli.data_dir);
    if !cli.product.is_empty() && !catalog.products.is_empty() && !catalog.has_product(&cli.product)
    {
        log::warn!("Product {:?} is not in the catalog", cli.product);
    }
    if !cli.issue.is_empty() && !catalog.issues.is_empty() && !catalog.has_issue(&cli.issue) {
        log::warn!("Issue {:?} is not in the catalog", cli.issue);
    }

    let mut sampler = RasterSampler::new(config.cols, config.rows);
    if let Some(path) = &cli.image {
        match image::open(path) {
            Ok(img) => sampler.set_raster(img),
            Err(e) => {
                eprintln!("Failed to open image {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        log::warn!("No background image given, markers use the fallback color");
    }

    let mut grid = AnnotationGrid::new(config);
    for coord in &cli.marks {
        grid.toggle(*coord, &sampler);
    }
    log::info!(
        "{} active cell(s) on a {}x{} grid",
        grid.len(),
        grid.config().rows,
        grid.config().cols
    );

    let meta = ExportMetadata::new(&cli.product, &cli.issue);
    let csv = gridmark::export::serialize(grid.active_cells(), &meta);

    match &cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &csv) {
                eprintln!("Failed to write {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
            log::info!("Wrote CSV payload to {:?}", path);
        }
        None => println!("{}", csv),
    }

    grid.clear();
    ExitCode::SUCCESS
}
