// Library interface for pitcool
// This allows integration tests to access internal modules

pub mod circuits;
pub mod device;
pub mod errors;
pub mod simulation;
pub mod summary;

// Re-export commonly used types
pub use circuits::{Circuit, DEFAULT_BASE_TEMP_C, DEFAULT_RPM};
pub use device::{DeviceEvent, DeviceNotifier};
pub use errors::PitcoolError;
pub use simulation::{RaceSimulation, simulate, simulate_with_rng};
