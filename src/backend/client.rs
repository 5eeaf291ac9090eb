//! HTTP client for the KittenTTS model server.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use super::TtsModel;
use super::types::{LoadRequest, ModelConfig, ModelInfo, SynthesisError, SynthesizeRequest};
use super::wav::write_wav;

/// Model handle backed by a KittenTTS inference server.
pub struct HttpModel {
    base_url: String,
    client: reqwest::blocking::Client,
    config: ModelConfig,
    info: ModelInfo,
}

impl HttpModel {
    /// Ask the server to load the configured model.
    ///
    /// The first load of a repository makes the server download its weights
    /// into the cache directory, which can take a while, so requests carry no
    /// timeout.
    pub fn load(config: &ModelConfig) -> Result<Self, SynthesisError> {
        let base_url = config.base_url();
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| SynthesisError::ConnectionFailed(e.to_string()))?;

        let url = format!("{base_url}/load");
        let request = LoadRequest {
            repo: config.repo.clone(),
            cache_dir: config.cache_dir.clone(),
        };

        info!(repo = %config.repo, server = %base_url, "loading model");

        let response = client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| SynthesisError::ConnectionFailed(e.to_string()))?;

        let response = check_status(response)?;

        let info: ModelInfo = response
            .json()
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        debug!(
            repo = %info.repo,
            voices = info.voices.len(),
            sample_rate = info.sample_rate,
            "model loaded"
        );

        Ok(Self {
            base_url,
            client,
            config: config.clone(),
            info,
        })
    }

    /// Get the base URL for this model server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model description reported by the server.
    pub fn info(&self) -> &ModelInfo {
        &self.info
    }
}

impl TtsModel for HttpModel {
    fn available_voices(&self) -> Vec<String> {
        self.info.voices.clone()
    }

    fn generate_to_file(
        &self,
        text: &str,
        path: &Path,
        voice: &str,
        speed: f32,
        sample_rate: u32,
    ) -> Result<(), SynthesisError> {
        if !self.info.voices.iter().any(|v| v == voice) {
            return Err(SynthesisError::UnknownVoice {
                voice: voice.to_string(),
                available: self.info.voices.clone(),
            });
        }

        let url = format!("{}/synthesize", self.base_url);
        let request = SynthesizeRequest {
            repo: self.config.repo.clone(),
            cache_dir: self.config.cache_dir.clone(),
            text: text.to_string(),
            voice: voice.to_string(),
            speed,
            sample_rate,
        };

        debug!(voice, speed, sample_rate, chars = text.len(), "synthesizing");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| SynthesisError::ConnectionFailed(e.to_string()))?;

        let audio = check_status(response)?
            .bytes()
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        let spec = write_wav(&audio, path, sample_rate)?;

        debug!(
            path = %path.display(),
            channels = spec.channels,
            bits = spec.bits_per_sample,
            "audio written"
        );

        Ok(())
    }
}

/// Turn a non-success response into `RequestFailed`, keeping the body text.
fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, SynthesisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text() {
        Ok(body) if !body.trim().is_empty() => format!("Status: {status}: {}", body.trim()),
        Ok(_) => format!("Status: {status}"),
        Err(e) => {
            debug!(error = %e, "failed to read error response body");
            format!("Status: {status} (body unreadable: {e})")
        }
    };

    Err(SynthesisError::RequestFailed(message))
}
