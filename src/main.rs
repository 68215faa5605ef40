//! HAR Datasets CLI
//!
//! Builds fixed-shape training datasets from raw sensor logs.

use clap::{Parser, Subcommand};
use har_datasets::{
    activity,
    config::Config,
    motion,
    report::{report_path_for, OutputRecord, ReportBuilder},
    VERSION,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "har-datasets")]
#[command(version = VERSION)]
#[command(about = "Fixed-shape training datasets from raw sensor logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the activity-log dataset
    Activity {
        /// Directory of tab-separated event logs
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output array store
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Build the motion-segment datasets (gyroscope and accelerometer)
    Motion {
        /// Root of the a*/p*/s*.txt segment tree
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output store for the gyroscope dataset
        #[arg(long)]
        gyroscope_output: Option<PathBuf>,

        /// Output store for the accelerometer dataset
        #[arg(long)]
        accelerometer_output: Option<PathBuf>,
    },

    /// Build every dataset with the configured paths
    All,

    /// Show configuration
    Config,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Activity { input, output } => {
            cmd_activity(&config, input, output);
        }
        Commands::Motion {
            input,
            gyroscope_output,
            accelerometer_output,
        } => {
            cmd_motion(&config, input, gyroscope_output, accelerometer_output);
        }
        Commands::All => {
            cmd_activity(&config, None, None);
            println!();
            cmd_motion(&config, None, None, None);
        }
        Commands::Config => {
            cmd_config(&config);
        }
    }
}

fn cmd_activity(config: &Config, input: Option<PathBuf>, output: Option<PathBuf>) {
    let input = input.unwrap_or_else(|| config.activity_dir.clone());
    let output = output.unwrap_or_else(|| config.activity_store.clone());

    println!("HAR Datasets v{VERSION} - activity pipeline");
    println!("  Input: {}", input.display());
    println!("  Output: {}", output.display());
    println!();

    let report = ReportBuilder::new("activity", &input);

    let build = match activity::build(&input) {
        Ok(build) => build,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Vectorized {} of {} directory entries into {} windows",
        build.files_used,
        build.files_scanned,
        build.dataset.len()
    );

    if let Err(e) = build.dataset.write_npz(&output) {
        eprintln!("Error writing {}: {e}", output.display());
        std::process::exit(1);
    }
    println!("Wrote {}", output.display());

    if config.write_reports {
        let report = report.finish(vec![OutputRecord {
            path: output.clone(),
            samples: build.dataset.len(),
        }]);
        let report_path = report_path_for(&output);
        if let Err(e) = report.save(&report_path) {
            eprintln!("Warning: Could not save build report: {e}");
        } else {
            println!("Wrote {}", report_path.display());
        }
    }
}

fn cmd_motion(
    config: &Config,
    input: Option<PathBuf>,
    gyroscope_output: Option<PathBuf>,
    accelerometer_output: Option<PathBuf>,
) {
    let input = input.unwrap_or_else(|| config.motion_dir.clone());
    let gyroscope_output = gyroscope_output.unwrap_or_else(|| config.gyroscope_store.clone());
    let accelerometer_output =
        accelerometer_output.unwrap_or_else(|| config.accelerometer_store.clone());

    println!("HAR Datasets v{VERSION} - motion pipeline");
    println!("  Input: {}", input.display());
    println!("  Gyroscope output: {}", gyroscope_output.display());
    println!("  Accelerometer output: {}", accelerometer_output.display());
    println!();

    let report = ReportBuilder::new("motion", &input);

    let build = match motion::build(&input) {
        Ok(build) => build,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Normalized {} segment files", build.segments);

    if let Err(e) = build.gyroscope.write_npz(&gyroscope_output) {
        eprintln!("Error writing {}: {e}", gyroscope_output.display());
        std::process::exit(1);
    }
    println!("Wrote {}", gyroscope_output.display());

    if let Err(e) = build.accelerometer.write_npz(&accelerometer_output) {
        eprintln!("Error writing {}: {e}", accelerometer_output.display());
        std::process::exit(1);
    }
    println!("Wrote {}", accelerometer_output.display());

    if config.write_reports {
        let report = report.finish(vec![
            OutputRecord {
                path: gyroscope_output.clone(),
                samples: build.gyroscope.len(),
            },
            OutputRecord {
                path: accelerometer_output,
                samples: build.accelerometer.len(),
            },
        ]);
        let report_path = report_path_for(&gyroscope_output);
        if let Err(e) = report.save(&report_path) {
            eprintln!("Warning: Could not save build report: {e}");
        } else {
            println!("Wrote {}", report_path.display());
        }
    }
}

fn cmd_config(config: &Config) {
    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", Config::config_path());
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(config).unwrap_or_else(|_| "Error".to_string())
    );
}
