//! Settings struct for the pipeline.
//!
//! Pure data type with no parsing or serialization logic; defaults live in
//! the sibling `defaults` module.

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Number of random coordinates to sample per run.
    pub coordinate_quantity: usize,
    /// Maximum number of API requests in flight at once. The fetcher admits
    /// requests in batches of this size and waits for each batch to finish
    /// before starting the next.
    pub parallel_calls: usize,
    /// Base URL of the sunrise-sunset JSON endpoint.
    pub api_url: String,
}
