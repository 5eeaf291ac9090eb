//! WAV payload handling.

use std::io::{BufWriter, Cursor};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tempfile::NamedTempFile;

use super::types::SynthesisError;

/// Samples decoded from a payload, in the payload's own format.
enum Samples {
    Float(Vec<f32>),
    Int(Vec<i32>),
}

/// Decode a WAV payload and write it to `path`.
///
/// The payload must already be at `sample_rate`; no resampling is done.
/// Channel count, bit depth and sample format are kept as received. The
/// payload is fully decoded before anything touches the filesystem, and the
/// file is written next to `path` and renamed into place once finalized, so a
/// failure never leaves a partial file at `path`.
pub fn write_wav(bytes: &[u8], path: &Path, sample_rate: u32) -> Result<WavSpec, SynthesisError> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    if spec.sample_rate != sample_rate {
        return Err(SynthesisError::SampleRateMismatch {
            expected: sample_rate,
            actual: spec.sample_rate,
        });
    }

    let samples = match spec.sample_format {
        SampleFormat::Float => {
            Samples::Float(reader.into_samples::<f32>().collect::<Result<_, _>>()?)
        }
        SampleFormat::Int => Samples::Int(reader.into_samples::<i32>().collect::<Result<_, _>>()?),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;

    {
        let mut writer = WavWriter::new(BufWriter::new(staged.as_file_mut()), spec)?;
        match samples {
            Samples::Float(samples) => {
                for sample in samples {
                    writer.write_sample(sample)?;
                }
            }
            Samples::Int(samples) => {
                for sample in samples {
                    writer.write_sample(sample)?;
                }
            }
        }
        writer.finalize()?;
    }

    staged.persist(path).map_err(|e| e.error)?;

    Ok(spec)
}
