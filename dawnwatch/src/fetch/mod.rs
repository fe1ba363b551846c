//! Batched twilight fetching.
//!
//! Requests run in consecutive batches of `batch_size`: all requests in a
//! batch are issued concurrently, and the next batch is admitted only after
//! every request in the current one has completed. This caps in-flight
//! connections at the batch size.
//!
//! Fail fast: a single failed or unparseable request fails the entire call
//! and no partial results are returned.

use futures::future::try_join_all;
use tracing::debug;

use crate::coord::Coordinate;
use crate::twilight::{TwilightClient, TwilightError, TwilightRecord};

/// Fetches a twilight record for every coordinate, in order.
///
/// The returned records are in the same order as `coordinates` regardless of
/// batch boundaries. A `batch_size` of 0 is treated as 1.
pub async fn fetch_all<C: TwilightClient>(
    client: &C,
    coordinates: &[Coordinate],
    batch_size: usize,
) -> Result<Vec<TwilightRecord>, TwilightError> {
    let batch_size = batch_size.max(1);
    let mut records = Vec::with_capacity(coordinates.len());

    for (index, batch) in coordinates.chunks(batch_size).enumerate() {
        debug!(batch = index, size = batch.len(), "fetching twilight batch");

        let batch_records =
            try_join_all(batch.iter().map(|coordinate| client.fetch(coordinate))).await?;
        records.extend(batch_records);
    }

    debug!(records = records.len(), "twilight fetch complete");
    Ok(records)
}
