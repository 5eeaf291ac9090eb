//! Output file placement.
//!
//! Relative output paths are re-rooted under the `/data` container mount so
//! batch jobs always write to a predictable volume.

mod path;

pub use path::{DATA_DIR, ensure_parent_dir, resolve_output_path, resolve_output_path_in};
