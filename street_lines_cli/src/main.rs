use std::process::ExitCode;

use clap::Parser;
use street_lines::{BoundingBox, ParkingError, calculate_parking_rectangles_json};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Computes a simulated parking spot rectangle inside a bounding box and
/// prints it as JSON.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Latitude of the top-left corner
    #[arg(long = "latitude_top_left", allow_negative_numbers = true)]
    latitude_top_left: f64,

    /// Longitude of the top-left corner
    #[arg(long = "longitude_top_left", allow_negative_numbers = true)]
    longitude_top_left: f64,

    /// Latitude of the bottom-right corner
    #[arg(long = "latitude_bottom_right", allow_negative_numbers = true)]
    latitude_bottom_right: f64,

    /// Longitude of the bottom-right corner
    #[arg(long = "longitude_bottom_right", allow_negative_numbers = true)]
    longitude_bottom_right: f64,

    /// Street orientation in radians, random when omitted
    #[arg(long, allow_negative_numbers = true)]
    orientation: Option<f64>,
}

fn run(args: &Args) -> Result<String, ParkingError> {
    let bbox = BoundingBox::new(
        args.latitude_top_left,
        args.longitude_top_left,
        args.latitude_bottom_right,
        args.longitude_bottom_right,
    )?;
    calculate_parking_rectangles_json(&bbox, args.orientation)
}

fn main() -> ExitCode {
    // stdout only carries the JSON result
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "could not compute parking rectangles");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
