//! TTS Engine orchestrator.
//!
//! This module provides the engine that coordinates between the CLI, output
//! placement and the model to perform TTS operations.

mod tts;

pub use tts::{EngineError, SAMPLE_RATE, TtsEngine};
