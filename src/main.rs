//! tts CLI entry point.

use std::io;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use kitten_tts_cli::app::{RunError, run};
use kitten_tts_cli::backend::load_model;
use kitten_tts_cli::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    kitten_tts_cli::setup_logging(args.verbose);

    let stdout = io::stdout();
    match run(&args, load_model, &mut stdout.lock()) {
        Err(RunError::Usage(err)) => Args::command()
            .error(ErrorKind::MissingRequiredArgument, err)
            .exit(),
        result => Ok(result?),
    }
}
