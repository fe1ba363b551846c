//! Dawnwatch CLI - Command-line interface
//!
//! Runs the pipeline with its default settings: sample 100 random
//! coordinates, fetch twilight data in batches of 5, and report the day
//! length of the coordinate with the earliest sunrise. There are no flags;
//! the only knob is `RUST_LOG` for log verbosity.

mod error;

use dawnwatch::config::PipelineSettings;
use dawnwatch::coord::ThreadRngSource;
use dawnwatch::logging::init_logging;
use dawnwatch::pipeline;
use dawnwatch::twilight::SunriseSunsetClient;

use error::CliError;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        e.exit();
    }
}

async fn run() -> Result<(), CliError> {
    init_logging().map_err(CliError::LoggingInit)?;

    let settings = PipelineSettings::default();
    let client =
        SunriseSunsetClient::new(settings.api_url.clone()).map_err(CliError::ClientCreation)?;

    println!("Fetching results please wait...");

    let report = pipeline::run(&settings, &client, &mut ThreadRngSource)
        .await
        .map_err(CliError::Pipeline)?;

    println!("{report}");
    Ok(())
}
