//! Coordinate generation module
//!
//! Provides the [`Coordinate`] type and uniform random sampling over the
//! valid latitude/longitude ranges. Randomness is injected through the
//! [`RandomSource`] trait so tests can supply fixed coordinate sequences.

mod generator;
mod random;
mod types;

pub use generator::generate_coordinates;
pub use random::{RandomSource, ThreadRngSource};
pub use types::{Coordinate, COORDINATE_PRECISION, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
