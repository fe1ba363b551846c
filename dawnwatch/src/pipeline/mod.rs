//! Pipeline facade.
//!
//! Wires the four stages together: generate coordinates, fetch twilight
//! records in bounded batches, select the earliest valid sunrise, and render
//! the report line. Fail fast throughout; a transport or parse error on any
//! request aborts the run.

use thiserror::Error;
use tracing::info;

use crate::config::PipelineSettings;
use crate::coord::{generate_coordinates, RandomSource};
use crate::fetch::fetch_all;
use crate::report::report_line;
use crate::select::{earliest_sunrise, SelectError};
use crate::twilight::{TwilightClient, TwilightError};

/// Errors that can occur while running the pipeline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    /// A fetch failed; the whole run is aborted.
    #[error(transparent)]
    Fetch(#[from] TwilightError),

    /// No fetched record carried valid data.
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Runs the full pipeline and returns the report line.
pub async fn run<C, R>(
    settings: &PipelineSettings,
    client: &C,
    random: &mut R,
) -> Result<String, PipelineError>
where
    C: TwilightClient,
    R: RandomSource,
{
    let coordinates = generate_coordinates(settings.coordinate_quantity, random);
    let records = fetch_all(client, &coordinates, settings.parallel_calls).await?;
    let winner = earliest_sunrise(&records)?;

    info!(
        sunrise = %winner.results.sunrise,
        day_length = winner.results.day_length,
        records = records.len(),
        "pipeline complete"
    );

    Ok(report_line(winner))
}
