// Error types for pitcool

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PitcoolError {
    // Errors for the summary exporter
    #[snafu(display("Error writing activation summary file"))]
    SummaryWriteError { source: io::Error },

    // Errors for the cooling hardware notifier
    #[snafu(display("Could not start runtime for hardware request"))]
    DeviceRuntimeError { source: io::Error },
    #[snafu(display("Cooling hardware request to {endpoint} failed"))]
    DeviceRequestError {
        endpoint: String,
        source: reqwest::Error,
    },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}
