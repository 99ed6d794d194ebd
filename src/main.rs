// src/main.rs

use std::process::ExitCode;
use log::debug;
use env_logger::Env;
use intmath::cli::{self, CliError};
use intmath::config::IntmathConfig;

fn main() -> ExitCode {
    match try_main() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<String, CliError> {
    let config = IntmathConfig::load()?;

    // Initialize the logger
    let env = Env::default()
        .filter_or("INTMATH_LOG", config.log_level.as_str())
        .write_style_or("INTMATH_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();
    debug!("Loaded configuration: {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::run(&args, &config)
}
