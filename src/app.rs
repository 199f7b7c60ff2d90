// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod inspector;
pub mod interrupt;
pub mod logging;
pub mod models;

use clap::Parser;
use std::env;
use std::process::ExitCode;

use self::cli::Cli;
use self::config::resolve_config;
use self::error::AuditError;
use self::formatter::OutputGenerator;
use self::inspector::PathInspector;
use self::interrupt::InterruptFlag;

pub const APP_NAME: &str = "Permission Auditor Svjpr0uf";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses flags, sets up logging, runs the inspection and maps the outcome to an exit code.
pub fn run() -> ExitCode {
    // --version and --help exit inside clap before anything else happens.
    let args = Cli::parse();

    if let Err(err) = logging::init(args.log_level()) {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    }

    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    match audit(&args) {
        Ok(()) => {
            log::info!("{} completed successfully.", APP_NAME);
            ExitCode::SUCCESS
        }
        Err(err) => {
            err.log();
            err.exit_code()
        }
    }
}

fn audit(args: &Cli) -> Result<(), AuditError> {
    // 1. Catch Ctrl-C
    let interrupt = InterruptFlag::install()?;

    // 2. Resolve Configuration
    let _config = resolve_config(args)?;

    // 3. Identify Target (always the working directory)
    let target = env::current_dir().map_err(|e| AuditError::from_io(e, "."))?;

    // 4. Inspect
    let items = PathInspector::new(target)
        .interruptible(interrupt.clone())
        .inspect()?;

    // 5. Report
    log::info!("Result: {}", OutputGenerator::format_result(&items));
    interrupt.check()
}
