// Derived scalar figures shown in the dashboard summary panel

/// Turbine temperature at which full performance is available (°C)
const REFERENCE_TEMP_C: f64 = 25.0;

/// Performance lost per degree above the reference temperature
const PERFORMANCE_LOSS_PCT_PER_DEG: f64 = 0.35;

/// Baseline CO₂ output per RPM per minute of racing (kg)
const CO2_KG_PER_RPM_MIN: f64 = 0.00012;

/// Share of baseline emissions removed by the cooling system
const CO2_REDUCTION_RATIO: f64 = 0.15;

/// Map a turbine temperature to a performance percentage.
///
/// Linear in the distance from the reference temperature, clamped to
/// `[0, 100]`. Running cooler than the reference does not push performance
/// past 100.
pub fn performance_pct(temp_c: f64) -> f64 {
    (100.0 - PERFORMANCE_LOSS_PCT_PER_DEG * (temp_c - REFERENCE_TEMP_C)).clamp(0.0, 100.0)
}

/// CO₂ emitted over a race window without the cooling system (kg)
pub fn co2_baseline_kg(rpm: u32, minutes: f64) -> f64 {
    rpm as f64 * minutes * CO2_KG_PER_RPM_MIN
}

/// CO₂ removed over a race window by engaging the cooling system (kg)
pub fn co2_reduction_kg(rpm: u32, minutes: f64) -> f64 {
    co2_baseline_kg(rpm, minutes) * CO2_REDUCTION_RATIO
}

/// Arithmetic mean of a sample sequence; 0 for an empty sequence
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
