use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::PitcoolError;

/// Activation summary handed to the pit crew alongside the hardware trigger.
///
/// The layout is fixed; the cooling rig's loader parses it line by line.
pub fn activation_summary(circuit: &str, rpm: u32) -> String {
    format!(
        "Circuito: {circuit}\nRPM: {rpm}\nLED 1: ON\nVentoinha 1: ON\nVentoinha 2: ON\nDuração: 3 minutos\n"
    )
}

/// Write the activation summary for a circuit to `path`
pub fn write_summary(path: &Path, circuit: &str, rpm: u32) -> Result<(), PitcoolError> {
    let summary_file =
        File::create(path).map_err(|e| PitcoolError::SummaryWriteError { source: e })?;
    let mut summary_writer = BufWriter::new(summary_file);
    summary_writer
        .write_all(activation_summary(circuit, rpm).as_bytes())
        .map_err(|e| PitcoolError::SummaryWriteError { source: e })?;
    summary_writer
        .flush()
        .map_err(|e| PitcoolError::SummaryWriteError { source: e })?;
    Ok(())
}
