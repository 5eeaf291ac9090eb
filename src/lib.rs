//! kitten-tts-cli: text-to-speech CLI for KittenTTS models.
//!
//! This crate provides a command-line interface that synthesizes speech with a
//! pretrained KittenTTS model served from a Docker container and writes the
//! result as a WAV file, re-rooting relative output paths under `/data`.

use std::env;

use tracing_subscriber::filter::EnvFilter;

pub mod app;
pub mod backend;
pub mod cli;
pub mod engine;
pub mod output;

/// Install the global log subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is on.
pub fn setup_logging(verbose: bool) {
    let filter = match env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_env("RUST_LOG"),
        _ if verbose => EnvFilter::new("kitten_tts_cli=debug,tts=debug"),
        _ => EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
