//! Configuration types for the dawnwatch pipeline.
//!
//! Groups the pipeline's tunable parameters into one settings struct instead
//! of scattering module-level constants, so tests can run with a small
//! coordinate count and batch size.

mod defaults;
mod settings;

pub use defaults::{DEFAULT_API_URL, DEFAULT_COORDINATE_QUANTITY, DEFAULT_PARALLEL_CALLS};
pub use settings::PipelineSettings;
