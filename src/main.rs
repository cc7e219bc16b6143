// src/main.rs

use log::{error, info, warn};
use std::env;
use std::error::Error;
use std::fs;
use std::process::ExitCode;

use omega_plot::constants::{
    ATTITUDE_FILE_SUFFIX, DETECTION_ERROR_FILE_SUFFIX, DETECTION_ERROR_MAIN_TITLE,
    QUATERNION_FILE_SUFFIX, QUATERNION_MAIN_TITLE,
};
use omega_plot::crate_version;
use omega_plot::data_input::series_loader::load_filter_log;
use omega_plot::plot_functions::plot_attitude_overview::plot_attitude_overview;
use omega_plot::plot_functions::plot_detection_error::plot_detection_error;
use omega_plot::plot_functions::plot_quaternion::plot_quaternion;
use omega_plot::run_config::{parse_args, usage, RunCommand, RunConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // --- Argument Parsing ---
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "omega-plot".to_string());

    let config = match parse_args(args) {
        Ok(RunCommand::Run(config)) => config,
        Ok(RunCommand::Help) => {
            println!("{}", usage(&program));
            return ExitCode::SUCCESS;
        }
        Ok(RunCommand::Version) => {
            println!("omega-plot {}", crate_version());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}\n");
            eprintln!("{}", usage(&program));
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<(), Box<dyn Error>> {
    // --- Data Reading ---
    let log = load_filter_log(&config.input_path)?;
    if log.is_empty() {
        warn!(
            "No data rows read from '{}', cannot generate plots.",
            config.input_path.display()
        );
        return Ok(());
    }

    fs::create_dir_all(&config.output_dir)?;

    // --- Generate Plots ---
    info!("--- Generating Attitude Plot ---");
    plot_attitude_overview(&log, &config.output_path(ATTITUDE_FILE_SUFFIX), &config.title)?;

    info!("--- Generating Quaternion Plot ---");
    plot_quaternion(
        &log,
        &config.output_path(QUATERNION_FILE_SUFFIX),
        QUATERNION_MAIN_TITLE,
    )?;

    if log.detection_error().is_some() {
        info!("--- Generating Detection Error Plot ---");
        plot_detection_error(
            &log,
            &config.output_path(DETECTION_ERROR_FILE_SUFFIX),
            DETECTION_ERROR_MAIN_TITLE,
        )?;
    }

    Ok(())
}

// src/main.rs
