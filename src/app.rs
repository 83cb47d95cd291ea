//! Core application runner for `thermometer-watch`.
//!
//! Decoupled from CLI parsing and process exit codes so the whole loop can be
//! tested deterministically with an injected scanner and injected output
//! streams. Advertisements are processed strictly one at a time: the
//! classify-then-draw sequence for one event completes before the next event
//! is taken off the channel, so neither store needs locking and frames never
//! interleave.

use crate::advertisement::Advertisement;
use crate::alias::{self, Alias};
use crate::output;
use crate::output::terminal::{self, CLEAR_SCREEN, Painter};
use crate::scanner::ScanError;
use crate::throttle::Throttle;
use crate::tracker::{Observation, Tracker};
use clap::Parser;
use std::future::Future;
use std::io;
use std::io::Write;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

/// Configuration for the core run loop.
#[derive(Parser, Debug, Clone)]
#[command(author, about, version)]
pub struct Options {
    /// Specify human-readable alias for a thermometer address, adding to or
    /// overriding the built-in table.
    /// Format: --alias A4:C1:38:AA:BB:CC=Kitchen
    #[arg(long = "alias", value_parser = alias::parse_alias, value_name = "ALIAS")]
    pub aliases: Vec<Alias>,

    /// Verbose output, print decode errors for malformed sensor payloads
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Process advertisements from a single device at most once per interval.
    /// Accepts duration with suffix: 3s, 1m, 500ms, 2h.
    /// Without suffix, value is interpreted as seconds.
    #[arg(long, value_parser = crate::throttle::parse_duration)]
    pub throttle: Option<Duration>,
}

/// Errors returned by the core run loop.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Scanner abstraction to enable deterministic unit tests without Bluetooth
/// hardware.
pub trait Scanner: Send + Sync {
    fn start_scan(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<mpsc::Receiver<Advertisement>, ScanError>> + Send + '_>>;
}

/// Real scanner implementation that delegates to the BlueZ backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealScanner;

impl Scanner for RealScanner {
    fn start_scan(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<mpsc::Receiver<Advertisement>, ScanError>> + Send + '_>>
    {
        Box::pin(async move { crate::scanner::start_scan().await })
    }
}

/// Run the core processing loop, drawing frames to `out` and verbose decode
/// errors to `err`.
///
/// Startup: clear the screen, announce the scan, subscribe. A subscription
/// failure is fatal and propagates. Afterwards every advertisement taken off
/// the channel is classified and a fresh frame is drawn in place, until the
/// channel closes.
pub async fn run_with_io(
    options: Options,
    scanner: &dyn Scanner,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), RunError> {
    let mut aliases = alias::default_aliases();
    aliases.extend(alias::to_map(&options.aliases));

    let mut tracker = Tracker::new(aliases);
    let mut painter = Painter::new();

    // Create throttle if interval is specified
    let mut throttle = options.throttle.map(Throttle::new);

    write!(out, "{CLEAR_SCREEN}")?;
    terminal::status_line(out, "|> SCAN: STARTING...")?;

    let mut advertisements = scanner.start_scan().await?;

    terminal::status_line(out, "|> SCAN: STARTED")?;
    writeln!(out)?;

    while let Some(advertisement) = advertisements.recv().await {
        let should_process = throttle
            .as_mut()
            .is_none_or(|t: &mut Throttle| t.should_emit(advertisement.mac));
        if !should_process {
            continue;
        }

        if let Observation::Malformed(decode_err) = tracker.observe(&advertisement)
            && options.verbose
        {
            writeln!(err, "{decode_err}")?;
        }

        let frame = tracker.frame(&output::local_timestamp());
        painter.draw(out, &frame)?;
    }

    Ok(())
}
