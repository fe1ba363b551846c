//! Default values for all pipeline settings.

use super::settings::PipelineSettings;

/// Default number of random coordinates sampled per run.
pub const DEFAULT_COORDINATE_QUANTITY: usize = 100;

/// Default number of requests in flight per fetch batch.
pub const DEFAULT_PARALLEL_CALLS: usize = 5;

/// Default sunrise-sunset.org JSON endpoint.
pub const DEFAULT_API_URL: &str = "https://api.sunrise-sunset.org/json";

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            coordinate_quantity: DEFAULT_COORDINATE_QUANTITY,
            parallel_calls: DEFAULT_PARALLEL_CALLS,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
