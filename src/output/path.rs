//! Output path resolution and directory preparation.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

/// Container mount point relative output paths are re-rooted under.
pub const DATA_DIR: &str = "/data";

/// Resolve an output path against [`DATA_DIR`].
pub fn resolve_output_path(output: &Path) -> PathBuf {
    resolve_output_path_in(Path::new(DATA_DIR), output)
}

/// Resolve an output path against an arbitrary base directory.
///
/// Absolute paths are returned unchanged. Relative paths lose every leading
/// `.`, `/` and `\` character and are joined onto `base`, so `./out.wav`,
/// `../out.wav` and `out.wav` all resolve to `base/out.wav`.
pub fn resolve_output_path_in(base: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        return output.to_path_buf();
    }

    let bytes = output.as_os_str().as_encoded_bytes();
    let start = bytes
        .iter()
        .position(|b| !matches!(b, b'.' | b'/' | b'\\'))
        .unwrap_or(bytes.len());

    // SAFETY: every stripped byte is ASCII, so `start` sits directly after a
    // valid UTF-8 substring, which is a valid split point for encoded bytes.
    let normalized = unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[start..]) };

    base.join(normalized)
}

/// Create every missing parent directory of `path`.
///
/// Succeeds when the directories already exist. Returns the directory that
/// was ensured, or `None` when `path` has no parent component.
pub fn ensure_parent_dir(path: &Path) -> io::Result<Option<PathBuf>> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(None),
    };

    std::fs::create_dir_all(parent)?;

    Ok(Some(parent.to_path_buf()))
}
