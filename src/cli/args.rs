//! CLI argument definitions and validation.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::backend::ModelConfig;

/// Voice used when `--voice` is not given.
pub const DEFAULT_VOICE: &str = "expr-voice-5-m";

/// Model repository used when `--repo` is not given.
pub const DEFAULT_REPO: &str = "KittenML/kitten-tts-nano-0.1";

/// Model server host used when `--host` is not given.
pub const DEFAULT_HOST: &str = "localhost";

/// Model server port used when `--port` is not given.
pub const DEFAULT_PORT: u16 = 9290;

/// Synthesize speech with KittenTTS (Docker-friendly).
#[derive(Parser, Debug)]
#[command(name = "tts")]
#[command(about = "Synthesize speech with KittenTTS (Docker-friendly)")]
#[command(after_help = "Examples:\n  tts -t 'Hello' -o /data/out.wav\n  tts -t 'Hi' --voice expr-voice-5-f --speed 1.1 -o /data/out.wav")]
#[command(version)]
pub struct Args {
    /// Text to synthesize
    #[arg(short, long)]
    pub text: Option<String>,

    /// Output WAV path (e.g. /data/out.wav); relative paths land under /data
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Voice to use
    #[arg(long, default_value = DEFAULT_VOICE)]
    pub voice: String,

    /// Speech speed (1.0 = normal)
    #[arg(long, default_value = "1.0")]
    pub speed: f32,

    /// Hugging Face model repo id
    #[arg(long, default_value = DEFAULT_REPO)]
    pub repo: String,

    /// Optional cache dir for downloaded model weights (path on the model server)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// List available voices and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Model server host address
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Model server port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a single invocation does once its arguments are validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Print every voice the model offers, one per line.
    ListVoices,
    /// Synthesize text into a WAV file.
    Synthesize(SynthesisJob),
}

/// Parameters of one synthesis run.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisJob {
    pub text: String,
    /// Output path exactly as given on the command line.
    pub output: PathBuf,
    pub voice: String,
    pub speed: f32,
}

/// Errors that can occur when validating parsed arguments.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("--text and --output are required unless --list-voices is used")]
    MissingTextOrOutput,
}

impl Args {
    /// Decide which action this invocation performs.
    ///
    /// `--list-voices` wins over everything else, so text and output are only
    /// checked when it is absent. Empty values count as missing.
    pub fn action(&self) -> Result<Action, UsageError> {
        if self.list_voices {
            return Ok(Action::ListVoices);
        }

        let text = self.text.as_deref().filter(|t| !t.is_empty());
        let output = self.output.as_ref().filter(|o| !o.as_os_str().is_empty());

        match (text, output) {
            (Some(text), Some(output)) => Ok(Action::Synthesize(SynthesisJob {
                text: text.to_string(),
                output: output.clone(),
                voice: self.voice.clone(),
                speed: self.speed,
            })),
            _ => Err(UsageError::MissingTextOrOutput),
        }
    }

    /// Parameters needed to obtain a model handle.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            repo: self.repo.clone(),
            cache_dir: self.cache_dir.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}
