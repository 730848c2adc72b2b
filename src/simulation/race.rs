use rand::Rng;
use rand_distr::Normal;

use crate::circuits;

use super::RaceSimulation;

/// Race duration covered by the simulation, in minutes
pub const RACE_DURATION_MIN: f64 = 90.0;
/// Number of equally spaced samples over the race duration
pub const SAMPLE_COUNT: usize = 180;

const OSCILLATION_AMPLITUDE_C: f64 = 20.0;
const OSCILLATION_PERIOD_MIN: f64 = 20.0;
const BASELINE_NOISE_STD_C: f64 = 3.0;
const COOLING_AMPLITUDE_C: f64 = 10.0;
const COOLING_NOISE_STD_C: f64 = 2.0;

/// Simulate a race with and without the turbine cooling system.
///
/// The circuit name selects the ambient offset from the catalog; unknown
/// names use the default offset and are not an error. Each sample is
/// `base + 20·sin(2πt/20)` plus gaussian noise, and the cooled curve removes
/// half the swing plus a smaller noise term. Output is intentionally
/// non-deterministic: the simulator produces plausible curves, not
/// reproducible ones. Thread an explicit RNG through
/// [`simulate_with_rng`] when tests need repeatability.
pub fn simulate(circuit_name: &str) -> RaceSimulation {
    simulate_with_rng(circuit_name, &mut rand::rng())
}

/// Same as [`simulate`], with the RNG supplied by the caller
pub fn simulate_with_rng<R: Rng>(circuit_name: &str, rng: &mut R) -> RaceSimulation {
    let base_temp_c = circuits::base_temperature(circuit_name);
    let baseline_noise =
        Normal::new(0.0, BASELINE_NOISE_STD_C).expect("baseline noise parameters are valid");
    let cooling_noise =
        Normal::new(0.0, COOLING_NOISE_STD_C).expect("cooling noise parameters are valid");

    let mut time_min = Vec::with_capacity(SAMPLE_COUNT);
    let mut without_cooling = Vec::with_capacity(SAMPLE_COUNT);
    let mut with_cooling = Vec::with_capacity(SAMPLE_COUNT);

    for sample_no in 0..SAMPLE_COUNT {
        let t = RACE_DURATION_MIN * sample_no as f64 / (SAMPLE_COUNT - 1) as f64;
        let swing = (2.0 * std::f64::consts::PI * t / OSCILLATION_PERIOD_MIN).sin();

        let baseline = base_temp_c + OSCILLATION_AMPLITUDE_C * swing + rng.sample(baseline_noise);
        let cooled = baseline - COOLING_AMPLITUDE_C * swing - rng.sample(cooling_noise);

        time_min.push(t);
        without_cooling.push(baseline);
        with_cooling.push(cooled);
    }

    RaceSimulation {
        circuit_name: circuit_name.to_string(),
        base_temp_c,
        time_min,
        without_cooling,
        with_cooling,
    }
}
