//! The linear flow behind the `tts` binary.

use std::io::{self, Write};

use thiserror::Error;

use crate::backend::{ModelConfig, SynthesisError, TtsModel};
use crate::cli::{Action, Args, UsageError};
use crate::engine::{EngineError, TtsEngine};

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("Failed to load model '{repo}'")]
    Load {
        repo: String,
        #[source]
        source: SynthesisError,
    },

    #[error("Failed to synthesize speech")]
    Engine(#[from] EngineError),

    #[error("Failed to write output")]
    Output(#[from] io::Error),
}

/// Validate `args`, load the model with `load` and perform the action.
///
/// Arguments are validated before `load` is called, so a usage error never
/// reaches the model server.
pub fn run<M, L, W>(args: &Args, load: L, out: &mut W) -> Result<(), RunError>
where
    M: TtsModel,
    L: FnOnce(&ModelConfig) -> Result<M, SynthesisError>,
    W: Write,
{
    let action = args.action()?;

    let config = args.model_config();
    let model = load(&config).map_err(|source| RunError::Load {
        repo: config.repo.clone(),
        source,
    })?;

    execute(&TtsEngine::new(model), &action, out)
}

/// Perform an already validated action, writing user-facing lines to `out`.
pub fn execute<M: TtsModel, W: Write>(
    engine: &TtsEngine<M>,
    action: &Action,
    out: &mut W,
) -> Result<(), RunError> {
    match action {
        Action::ListVoices => {
            for voice in engine.list_voices() {
                writeln!(out, "{voice}")?;
            }
        }
        Action::Synthesize(job) => {
            let saved = engine.synthesize(job)?;
            writeln!(out, "Saved: {}", saved.display())?;
        }
    }

    out.flush()?;
    Ok(())
}
