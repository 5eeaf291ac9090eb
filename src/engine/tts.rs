//! TTS Engine implementation.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::backend::{SynthesisError, TtsModel};
use crate::cli::SynthesisJob;
use crate::output::{ensure_parent_dir, resolve_output_path};

/// Sample rate every output file is written at.
pub const SAMPLE_RATE: u32 = 24_000;

/// Errors that can occur during TTS operations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// Runs list-voices and synthesis requests against a loaded model.
pub struct TtsEngine<M: TtsModel> {
    model: M,
}

impl<M: TtsModel> TtsEngine<M> {
    /// Create a new TTS engine.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Voices the loaded model offers.
    pub fn list_voices(&self) -> Vec<String> {
        self.model.available_voices()
    }

    /// Synthesize a job into its resolved output file.
    ///
    /// Returns the path the audio was written to.
    pub fn synthesize(&self, job: &SynthesisJob) -> Result<PathBuf, EngineError> {
        let path = resolve_output_path(&job.output);
        debug!(given = %job.output.display(), resolved = %path.display(), "resolved output path");

        if let Some(dir) = ensure_parent_dir(&path).map_err(|source| EngineError::CreateDir {
            path: path.parent().map(PathBuf::from).unwrap_or_default(),
            source,
        })? {
            debug!(dir = %dir.display(), "output directory ready");
        }

        info!(voice = %job.voice, speed = job.speed, "synthesizing speech");
        self.model
            .generate_to_file(&job.text, &path, &job.voice, job.speed, SAMPLE_RATE)?;

        Ok(path)
    }
}
