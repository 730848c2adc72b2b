use std::{
    sync::mpsc::{Receiver, Sender, channel},
    thread::{self, JoinHandle},
};

use log::{error, info};
use serde::Serialize;

use crate::PitcoolError;

/// Address the cooling rig listens on when the pit box access point is up
pub const DEFAULT_DEVICE_ENDPOINT: &str = "http://192.168.4.1/cooling";

/// Values forwarded to the cooling hardware when a circuit is armed
#[derive(Clone, Debug, Serialize)]
pub struct ActivationRequest {
    pub circuit: String,
    pub rpm: u32,
}

/// Outcome of one hardware notification, reported back to the dashboard
#[derive(Clone, Debug, PartialEq)]
pub enum DeviceEvent {
    Delivered { circuit: String },
    Failed { circuit: String },
}

/// Best-effort notifier for the pit cooling hardware.
///
/// Each notification is a single unauthenticated POST of an
/// [`ActivationRequest`], posted from a worker thread so the dashboard never
/// blocks on the network. Failures are logged and reported as a
/// [`DeviceEvent`]; they are never retried. One request is in flight at a
/// time; the hardware serializes activations anyway.
pub struct DeviceNotifier {
    endpoint: String,
    events_tx: Sender<DeviceEvent>,
    events_rx: Receiver<DeviceEvent>,
    worker: Option<JoinHandle<()>>,
}

impl DeviceNotifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            endpoint: endpoint.into(),
            events_tx,
            events_rx,
            worker: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    /// Fire an activation notification for `circuit`.
    ///
    /// Returns immediately. The outcome arrives later through
    /// [`DeviceNotifier::try_event`]. A notification requested while another
    /// is still in flight is dropped.
    pub fn notify(&mut self, circuit: &str, rpm: u32) {
        if let Some(handle) = self.worker.take() {
            if handle.is_finished() {
                let _ = handle.join();
            } else {
                self.worker = Some(handle);
                info!(
                    "Hardware notification still in flight, dropping activation for {}",
                    circuit
                );
                return;
            }
        }

        let request = ActivationRequest {
            circuit: circuit.to_string(),
            rpm,
        };
        let endpoint = self.endpoint.clone();
        let events_tx = self.events_tx.clone();
        self.worker = Some(thread::spawn(move || {
            match post_activation(&endpoint, &request) {
                Ok(()) => {
                    info!(
                        "Cooling hardware armed for {} at {} RPM",
                        request.circuit, request.rpm
                    );
                    let _ = events_tx.send(DeviceEvent::Delivered {
                        circuit: request.circuit,
                    });
                }
                Err(e) => {
                    error!("Could not reach cooling hardware: {}", e);
                    let _ = events_tx.send(DeviceEvent::Failed {
                        circuit: request.circuit,
                    });
                }
            }
        }));
    }

    /// Next pending outcome, if any. Never blocks.
    pub fn try_event(&self) -> Option<DeviceEvent> {
        self.events_rx.try_recv().ok()
    }
}

impl Drop for DeviceNotifier {
    fn drop(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

fn post_activation(endpoint: &str, request: &ActivationRequest) -> Result<(), PitcoolError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| PitcoolError::DeviceRuntimeError { source: e })?;

    runtime
        .block_on(reqwest::Client::new().post(endpoint).json(request).send())
        .and_then(|response| response.error_for_status())
        .map_err(|e| PitcoolError::DeviceRequestError {
            endpoint: endpoint.to_string(),
            source: e,
        })?;
    Ok(())
}
