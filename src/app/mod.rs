//! Application flow shared by the binary and its tests.

mod run;

pub use run::{RunError, execute, run};
