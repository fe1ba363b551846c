//! Dawnwatch - earliest sunrise finder
//!
//! This library samples random geographic coordinates, queries the
//! sunrise-sunset.org API for each one in bounded parallel batches, and
//! selects the coordinate with the earliest sunrise of the day.
//!
//! # High-Level API
//!
//! For most use cases, the [`pipeline`] module provides a single entry point:
//!
//! ```ignore
//! use dawnwatch::config::PipelineSettings;
//! use dawnwatch::coord::ThreadRngSource;
//! use dawnwatch::twilight::SunriseSunsetClient;
//!
//! let settings = PipelineSettings::default();
//! let client = SunriseSunsetClient::new(settings.api_url.clone())?;
//! let report = dawnwatch::pipeline::run(&settings, &client, &mut ThreadRngSource).await?;
//! println!("{report}");
//! ```

pub mod config;
pub mod coord;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod select;
pub mod twilight;

/// Version of the dawnwatch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
