//! Log subscriber setup for the command-line tool.
//!
//! Logs go to stderr so the token listing on stdout stays machine-readable.

use std::io;

use tracing::Level;
use tracing_subscriber::{
    Layer, Registry, filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Map a `-v` count to a level: none is WARN, then INFO, DEBUG, TRACE.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbose: u8, format: LogFormat) {
    let targets = Targets::new()
        .with_default(Level::WARN)
        .with_target("pylex", level_for_verbosity(verbose));

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(targets))
        .init();
}
