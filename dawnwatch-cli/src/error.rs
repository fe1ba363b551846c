//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and a nonzero exit code.

use std::fmt;
use std::process;

use dawnwatch::pipeline::PipelineError;
use dawnwatch::select::SelectError;
use dawnwatch::twilight::TwilightError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to create the HTTP client
    ClientCreation(TwilightError),
    /// Pipeline run failed
    Pipeline(PipelineError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Pipeline(PipelineError::Fetch(_)) => {
                eprintln!();
                eprintln!("The run aborts on the first failed request. Check that");
                eprintln!("api.sunrise-sunset.org is reachable and try again.");
            }
            CliError::Pipeline(PipelineError::Select(SelectError::NoValidRecords)) => {
                eprintln!();
                eprintln!("Every response was placeholder data; re-running with a fresh");
                eprintln!("coordinate sample usually resolves this.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::ClientCreation(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Pipeline(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ClientCreation(e) => Some(e),
            CliError::Pipeline(e) => Some(e),
            _ => None,
        }
    }
}
