//! Twilight data access.
//!
//! The [`TwilightClient`] trait abstracts the remote sunrise-sunset service
//! so the fetcher and pipeline can be exercised with mock clients in tests.
//! The [`SunriseSunsetClient`] implementation queries the public
//! sunrise-sunset.org JSON API via `reqwest`.

mod client;
mod error;
mod model;

pub use client::{SunriseSunsetClient, TwilightClient};
#[cfg(test)]
pub use client::tests;
pub use error::TwilightError;
pub use model::{TwilightRecord, TwilightTimes};
