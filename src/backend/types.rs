//! Model server request/response types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a model or synthesizing speech.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Voice '{voice}' not available. Choose from: {}", .available.join(", "))]
    UnknownVoice {
        voice: String,
        available: Vec<String>,
    },

    #[error("Model returned {actual} Hz audio, expected {expected} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parameters a model handle is constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Hugging Face repository id of the model.
    pub repo: String,
    /// Where the server keeps downloaded weights; server default when unset.
    pub cache_dir: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl ModelConfig {
    /// Base URL of the model server.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Request to load (and if needed download) a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

/// Description of a loaded model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub repo: String,
    pub voices: Vec<String>,
    pub sample_rate: u32,
}

/// Request for speech synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
    pub text: String,
    pub voice: String,
    #[serde(default = "default_speed")]
    pub speed: f32,
    pub sample_rate: u32,
}

fn default_speed() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let config = ModelConfig {
            repo: "KittenML/kitten-tts-nano-0.1".to_string(),
            cache_dir: None,
            host: "tts-server".to_string(),
            port: 9290,
        };

        assert_eq!(config.base_url(), "http://tts-server:9290");
    }

    #[test]
    fn test_load_request_omits_missing_cache_dir() {
        let request = LoadRequest {
            repo: "KittenML/kitten-tts-nano-0.1".to_string(),
            cache_dir: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"repo": "KittenML/kitten-tts-nano-0.1"})
        );
    }

    #[test]
    fn test_synthesize_request_serialize() {
        let request = SynthesizeRequest {
            repo: "KittenML/kitten-tts-nano-0.1".to_string(),
            cache_dir: Some(PathBuf::from("/cache")),
            text: "Hello".to_string(),
            voice: "expr-voice-5-m".to_string(),
            speed: 1.0,
            sample_rate: 24000,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["cache_dir"], "/cache");
        assert_eq!(json["voice"], "expr-voice-5-m");
        assert_eq!(json["sample_rate"], 24000);
    }

    #[test]
    fn test_model_info_deserialize() {
        let json = r#"{
            "repo": "KittenML/kitten-tts-nano-0.1",
            "voices": ["expr-voice-2-m", "expr-voice-2-f"],
            "sample_rate": 24000
        }"#;

        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.voices.len(), 2);
        assert_eq!(info.sample_rate, 24000);
    }

    #[test]
    fn test_unknown_voice_message_lists_choices() {
        let err = SynthesisError::UnknownVoice {
            voice: "nobody".to_string(),
            available: vec!["expr-voice-2-m".to_string(), "expr-voice-2-f".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Voice 'nobody' not available. Choose from: expr-voice-2-m, expr-voice-2-f"
        );
    }
}
