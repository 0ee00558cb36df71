use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use graphical_interface::store::PoiStore;
use location::providers::SimulatedDevice;
use location::{Coordinate, LocationGate};
use logger::{Color, Logger};

const LOG_DIR: &str = "logs";
const DEFAULT_LAT: f64 = 37.78825;
const DEFAULT_LON: f64 = -122.4324;
const DEFAULT_DELAY_MS: u64 = 800;

struct Args {
    csv_path: Option<PathBuf>,
    deny: bool,
    delay_ms: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        csv_path: None,
        deny: false,
        delay_ms: DEFAULT_DELAY_MS,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--deny" => args.deny = true,
            "--delay-ms" => {
                let value = iter.next().ok_or("--delay-ms needs a value")?;
                args.delay_ms = value
                    .parse()
                    .map_err(|_| format!("invalid --delay-ms value: {}", value))?;
            }
            path if !path.starts_with("--") => args.csv_path = Some(PathBuf::from(path)),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(args)
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: trail-map [pois.csv] [--deny] [--delay-ms <n>]");
            process::exit(1);
        }
    };

    let logger = match Logger::new(Path::new(LOG_DIR), "trail-map") {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Could not create logger: {}", e);
            process::exit(1);
        }
    };

    let store = match &args.csv_path {
        Some(path) => match PoiStore::from_csv(path) {
            Ok(store) => store,
            Err(e) => {
                let _ = logger.error(
                    &format!("Could not load POIs from {}: {}", path.display(), e),
                    true,
                );
                process::exit(1);
            }
        },
        None => PoiStore::with_sample_data(),
    };

    let device = if args.deny {
        SimulatedDevice::denied()
    } else {
        SimulatedDevice::granted_at(Coordinate::new(DEFAULT_LAT, DEFAULT_LON))
            .with_jitter_meters(15.0)
    }
    .with_response_delay(Duration::from_millis(args.delay_ms));

    let gate = LocationGate::new(logger.clone());
    if let Err(e) = gate.activate(device) {
        let _ = logger.error(&format!("{}", e), true);
        process::exit(1);
    }

    let _ = logger.info("Opening the map screen.", Color::Green, true);

    if let Err(e) = graphical_interface::run(store, gate) {
        let _ = logger.error(&format!("UI error: {}", e), true);
        process::exit(1);
    }
}
