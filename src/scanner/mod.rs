//! BLE scanner interface.
//!
//! The scanner is an external producer: it owns all Bluetooth state and
//! yields [`Advertisement`] values over a channel. The rest of the crate
//! never touches the radio; everything downstream of the channel is plain
//! synchronous code.

pub mod bluer;

use crate::advertisement::Advertisement;
use thiserror::Error;
use tokio::sync::mpsc;

/// Error type for scanner operations.
///
/// Scanner errors only surface at startup; once the advertisement channel is
/// handed out, backend trouble shows up as the channel closing.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Bluetooth/adapter related error
    #[error("Bluetooth error: {0}")]
    Bluetooth(String),
}

/// Channel buffer size for advertisements.
pub const ADVERTISEMENT_CHANNEL_BUFFER_SIZE: usize = 100;

/// Start scanning for nearby BLE devices.
///
/// Initializes the Bluetooth adapter and starts continuous LE discovery.
/// Fails only at startup; after a successful return, advertisements arrive on
/// the channel until the process ends.
pub async fn start_scan() -> Result<mpsc::Receiver<Advertisement>, ScanError> {
    bluer::start_scan().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::Bluetooth("adapter powered off".to_string());
        assert_eq!(format!("{}", err), "Bluetooth error: adapter powered off");
    }
}
