use DiffuThe::cli::cli_main::{run_interactive_menu, run_task_file};
use DiffuThe::settings::{DEFAULT_CONFIG_FILE, Settings};
use log::{LevelFilter, error, info, warn};
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

fn init_logger(settings: &Settings) {
    let level = settings.level_filter().unwrap_or(LevelFilter::Info);
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = &settings.log_file {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file)),
            Err(e) => eprintln!("cannot open log file {}: {}", path, e),
        }
    }
    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("cannot initialize logger: {}", e);
    }
}

/// `DiffuThe` starts the interactive menu, `DiffuThe <task file> [config file]` runs a task file
pub fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let config_file = args.get(2).map(String::as_str).unwrap_or(DEFAULT_CONFIG_FILE);
    let (settings, load_error) = Settings::load_reporting(config_file);
    init_logger(&settings);
    if let Some(e) = load_error {
        warn!("failed to load settings from {}: {}, using defaults", config_file, e);
    }
    match args.get(1) {
        Some(task_file) => match run_task_file(task_file, &settings) {
            Ok(0) => ExitCode::SUCCESS,
            Ok(failed) => {
                info!("{} task(s) failed", failed);
                ExitCode::FAILURE
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
        None => {
            run_interactive_menu(&settings);
            ExitCode::SUCCESS
        }
    }
}
