//! Model collaborator for speech synthesis.
//!
//! Provides the trait the engine synthesizes through and an implementation
//! that talks to a Docker-based KittenTTS inference server. The server owns
//! model download, caching and inference.
//!
//! # Server protocol
//!
//! [`HttpModel`] expects a server at `http://{host}:{port}` with two JSON
//! endpoints:
//!
//! `POST /load` loads a model, downloading its weights on first use.
//!
//! ```text
//! request:  {"repo": "KittenML/kitten-tts-nano-0.1", "cache_dir": "/cache"}
//! response: {"repo": "KittenML/kitten-tts-nano-0.1",
//!            "voices": ["expr-voice-2-m", ...], "sample_rate": 24000}
//! ```
//!
//! `POST /synthesize` renders speech and answers with the WAV file as the
//! response body (`audio/wav`), already at the requested sample rate.
//!
//! ```text
//! request:  {"repo": "...", "cache_dir": "/cache", "text": "Hello",
//!            "voice": "expr-voice-5-m", "speed": 1.0, "sample_rate": 24000}
//! ```
//!
//! `cache_dir` is omitted when not configured. It is forwarded verbatim and
//! interpreted on the server's filesystem, not the CLI's. Any non-2xx status
//! is reported as [`SynthesisError::RequestFailed`] carrying the response body.

mod client;
mod types;
mod wav;

pub use client::HttpModel;
pub use types::{LoadRequest, ModelConfig, ModelInfo, SynthesisError, SynthesizeRequest};
pub use wav::write_wav;

use std::path::Path;

/// Trait for a loaded text-to-speech model.
///
/// This trait abstracts the model server so the engine can run against mock
/// implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait TtsModel {
    /// Voices this model can synthesize with, in the model's own order.
    fn available_voices(&self) -> Vec<String>;

    /// Synthesize `text` and write it as a WAV file at `path`.
    ///
    /// # Arguments
    /// * `text` - Text to speak
    /// * `path` - Destination file; its parent directory must exist
    /// * `voice` - One of [`TtsModel::available_voices`]
    /// * `speed` - Speech rate multiplier, 1.0 is normal
    /// * `sample_rate` - Sample rate of the written file in Hz
    fn generate_to_file(
        &self,
        text: &str,
        path: &Path,
        voice: &str,
        speed: f32,
        sample_rate: u32,
    ) -> Result<(), SynthesisError>;
}

/// Load the model described by `config`.
pub fn load_model(config: &ModelConfig) -> Result<HttpModel, SynthesisError> {
    HttpModel::load(config)
}
