use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use mapdraw::config::FileConfig;
use mapdraw::geometry::{
    AreaMethod, Coordinate, area_label, compute_area_with, compute_bounds_with_padding,
    format_area,
};

/// Polygon area and camera framing for shapes traced on a map
///
/// Examples:
///   # Area of a small lot in square feet
///   mapdraw area --points "37.0,-122.0 37.0,-121.999 37.001,-121.999 37.001,-122.0"
///
///   # Same, labelled and measured on the WGS84 ellipsoid
///   mapdraw area --method geodesic --name Lot --points "37.0,-122.0 37.0,-121.999 37.001,-121.999"
///
///   # Camera region for tap payloads saved as JSON
///   mapdraw bounds --json taps.json
#[derive(Parser, Debug)]
#[command(name = "mapdraw")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to config file (optional, auto-searches mapdraw.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the polygon area in square feet
    Area {
        /// Area formula: spherical, geodesic or planar
        #[arg(short = 'm', long)]
        method: Option<AreaMethod>,

        /// Print "<name> - <area> SF" instead of the bare number
        #[arg(short = 'n', long)]
        name: Option<String>,

        #[command(flatten)]
        input: Input,
    },
    /// Print the bounding box, its center and the camera region
    Bounds {
        /// Degrees added to each span
        #[arg(short = 'p', long)]
        padding: Option<f64>,

        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// Vertices as "LAT,LNG LAT,LNG ..."
    #[arg(long, allow_hyphen_values = true)]
    points: Option<String>,

    /// JSON file holding an array of {"latitude": .., "longitude": ..}
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (file_config, warnings) = match cli.config {
        Some(ref path) => (FileConfig::from_path(path)?, Vec::new()),
        None => {
            let (config, warnings) = FileConfig::load();
            (config.unwrap_or_default(), warnings)
        }
    };
    let verbose = cli.verbose || file_config.verbose;

    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .init();
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("config: {:?}", file_config);

    match cli.command {
        Command::Area {
            method,
            name,
            input,
        } => {
            let points = read_points(&input)?;
            let method = resolve_method(method, &file_config);

            if verbose {
                println!("Configuration:");
                println!("  Method: {:?}", method);
                println!("  Vertices: {}", points.len());
                println!();
            }

            let area = compute_area_with(&points, method);
            match name {
                Some(n) => println!("{}", area_label(&n, area)),
                None => println!("{}", format_area(area)),
            }
        }
        Command::Bounds { padding, input } => {
            let points = read_points(&input)?;
            let padding = resolve_padding(padding, &file_config);

            if verbose {
                let initial = file_config.initial_region;
                println!("Configuration:");
                println!("  Padding: {}", padding);
                println!("  Vertices: {}", points.len());
                println!(
                    "  Initial region: ({:.6}, {:.6}) delta {:.6} x {:.6}",
                    initial.latitude,
                    initial.longitude,
                    initial.latitude_delta,
                    initial.longitude_delta
                );
                println!();
            }

            let bounds = compute_bounds_with_padding(&points, padding)
                .context("Failed to compute bounds")?;
            let region = bounds.region();

            println!("Bounds:");
            println!("  Latitude:  {:.6} .. {:.6}", bounds.min_lat, bounds.max_lat);
            println!("  Longitude: {:.6} .. {:.6}", bounds.min_lng, bounds.max_lng);
            println!(
                "  Extent:    {:.6} x {:.6} deg",
                bounds.height(),
                bounds.width()
            );
            println!("  Center:    {}", bounds.center);
            println!();
            println!("Camera region:");
            println!(
                "  ({:.6}, {:.6}) delta {:.6} x {:.6}",
                region.latitude, region.longitude, region.latitude_delta, region.longitude_delta
            );
        }
    }

    Ok(())
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// `--method` wins over the config file
fn resolve_method(flag: Option<AreaMethod>, config: &FileConfig) -> AreaMethod {
    flag.unwrap_or(config.area_method)
}

/// `--padding` wins over the config file
fn resolve_padding(flag: Option<f64>, config: &FileConfig) -> f64 {
    flag.unwrap_or(config.padding)
}

fn read_points(input: &Input) -> Result<Vec<Coordinate>> {
    if let Some(ref path) = input.json {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read points file: {:?}", path))?;
        return serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse points file: {:?}", path));
    }
    parse_points(input.points.as_deref().unwrap_or_default())
}

/// Parse whitespace-separated `LAT,LNG` pairs
fn parse_points(text: &str) -> Result<Vec<Coordinate>> {
    text.split_whitespace()
        .map(|pair| {
            let (lat, lng) = pair
                .split_once(',')
                .with_context(|| format!("Expected LAT,LNG but got {:?}", pair))?;
            let lat: f64 = lat
                .parse()
                .with_context(|| format!("Invalid latitude in {:?}", pair))?;
            let lng: f64 = lng
                .parse()
                .with_context(|| format!("Invalid longitude in {:?}", pair))?;
            Coordinate::new(lat, lng).with_context(|| format!("Invalid coordinate {:?}", pair))
        })
        .collect()
}
