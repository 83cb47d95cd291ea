use clap::Parser;
use std::io;
use std::panic::{self, PanicHookInfo};

use thermometer_watch::app::{self, Options, RealScanner};

/// Exit codes for the application
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_PANIC: i32 = 2;

/// Main application entry point.
///
/// This function:
/// 1. Parses CLI options (aliases, verbosity, throttle interval)
/// 2. Starts the BLE scanner
/// 3. Tracks and draws device sightings until interrupted
///
/// # Errors
/// Returns `RunError` if Bluetooth initialization fails
async fn run(options: Options) -> Result<(), app::RunError> {
    let mut out = io::stdout();
    let mut err = io::stderr();
    app::run_with_io(options, &RealScanner, &mut out, &mut err).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set up panic hook to ensure clean exit codes for process managers
    // (e.g., systemd) that monitor exit status
    panic::set_hook(Box::new(move |info: &PanicHookInfo| {
        eprintln!("Panic! {}", info);
        std::process::exit(EXIT_PANIC);
    }));

    let options = Options::parse();

    match run(options).await {
        Ok(_) => std::process::exit(EXIT_SUCCESS),
        Err(why) => {
            eprintln!("error: {}", why);
            std::process::exit(EXIT_ERROR);
        }
    }
}
