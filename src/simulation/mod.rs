pub mod metrics;
pub(crate) mod race;

pub use race::{RACE_DURATION_MIN, SAMPLE_COUNT, simulate, simulate_with_rng};

/// One full run of the race temperature simulator.
///
/// Holds the two temperature curves over the same time base, produced fresh
/// on each request and discarded after rendering. Nothing here is persisted.
#[derive(Clone, Debug)]
pub struct RaceSimulation {
    /// Circuit the run was requested for, as given by the caller
    pub circuit_name: String,
    /// Ambient offset resolved from the catalog (or the default fallback)
    pub base_temp_c: f64,
    /// Sample times in minutes from the race start
    pub time_min: Vec<f64>,
    /// Turbine temperature without the cooling system (°C)
    pub without_cooling: Vec<f64>,
    /// Turbine temperature with the cooling system engaged (°C)
    pub with_cooling: Vec<f64>,
}

impl RaceSimulation {
    pub fn sample_count(&self) -> usize {
        self.time_min.len()
    }

    pub fn mean_without_cooling(&self) -> f64 {
        metrics::mean(&self.without_cooling)
    }

    pub fn mean_with_cooling(&self) -> f64 {
        metrics::mean(&self.with_cooling)
    }
}
