use serde::{Deserialize, Serialize};

use pitcool::PitcoolError;
use pitcool::device::DEFAULT_DEVICE_ENDPOINT;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) device_endpoint: String,
    pub(crate) hardware_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            device_endpoint: DEFAULT_DEVICE_ENDPOINT.to_string(),
            hardware_enabled: true,
        }
    }
}

impl AppConfig {
    pub(crate) fn from_local_file() -> Option<Self> {
        let config_path = dirs::config_dir()?.join("pitcool").join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let file = std::fs::File::open(config_path).expect("Could not open config file");
            Some(serde_json::from_reader(file).expect("Could not parse config file"))
        } else {
            None
        }
    }

    pub(crate) fn save(&self) -> Result<(), PitcoolError> {
        let config_path = dirs::config_dir()
            .ok_or(PitcoolError::NoConfigDir)?
            .join("pitcool")
            .join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            std::fs::create_dir_all(config_path.parent().unwrap())
                .map_err(|e| PitcoolError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(config_path)
            .map_err(|e| PitcoolError::ConfigIOError { source: e })?;
        serde_json::to_writer(file, self)
            .map_err(|e| PitcoolError::ConfigSerializeError { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.device_endpoint, DEFAULT_DEVICE_ENDPOINT);
        assert!(config.hardware_enabled);
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig {
            device_endpoint: "http://10.1.1.20/cooling".to_string(),
            hardware_enabled: false,
        };
        let json = serde_json::to_string(&config).expect("could not serialize config");
        let restored: AppConfig = serde_json::from_str(&json).expect("could not parse config");
        assert_eq!(restored.device_endpoint, config.device_endpoint);
        assert_eq!(restored.hardware_enabled, config.hardware_enabled);
    }
}
