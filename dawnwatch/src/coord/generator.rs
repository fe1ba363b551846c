//! Uniform random coordinate generation.

use super::random::RandomSource;
use super::types::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use tracing::debug;

/// Generates `quantity` random coordinates.
///
/// Latitude and longitude are drawn independently from uniform distributions
/// over their full valid ranges. Duplicates are permitted (and statistically
/// near-impossible at 7 decimal places).
pub fn generate_coordinates<R: RandomSource>(quantity: usize, random: &mut R) -> Vec<Coordinate> {
    let coordinates: Vec<Coordinate> = (0..quantity)
        .map(|_| {
            let latitude = random.uniform(MIN_LAT, MAX_LAT);
            let longitude = random.uniform(MIN_LON, MAX_LON);
            Coordinate::from_degrees(latitude, longitude)
        })
        .collect();

    debug!(quantity = coordinates.len(), "coordinates generated");
    coordinates
}
