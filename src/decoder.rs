//! Decoder for the ATC MiThermometer advertising payload.
//!
//! Thermometers running the atc1441 custom firmware broadcast their readings
//! as service data under the Environmental Sensing service (16-bit UUID
//! `0x181A`). This module finds that block in an advertisement and decodes
//! the fixed binary layout into sensor values.

use crate::advertisement::Advertisement;
use thiserror::Error;

/// 16-bit Environmental Sensing service UUID used by the ATC firmware,
/// matched case-insensitively against advertised service-data UUIDs.
pub const SENSOR_SERVICE_UUID: &str = "181a";

/// Minimum payload length covering all decoded fields.
pub const SENSOR_PAYLOAD_MIN_LEN: usize = 10;

/// Error types for decoding a sensor payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload does not cover the full fixed layout. Short payloads are
    /// rejected up front instead of being read out of bounds.
    #[error("sensor payload too short: {0} bytes, expected at least {SENSOR_PAYLOAD_MIN_LEN}")]
    TooShort(usize),
}

/// Values decoded from a sensor payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorValues {
    /// Temperature in Celsius with one decimal of precision.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Battery level in percent.
    pub battery: u8,
}

/// Find the ATC sensor service-data payload in an advertisement, if present.
///
/// A missing block is the normal negative result for a device that is not
/// advertising sensor data, not an error.
pub fn find_sensor_payload(advertisement: &Advertisement) -> Option<&[u8]> {
    advertisement
        .service_data
        .iter()
        .find(|block| block.uuid.eq_ignore_ascii_case(SENSOR_SERVICE_UUID))
        .map(|block| block.data.as_slice())
}

/// Decode the fixed ATC advertising layout.
///
/// https://github.com/atc1441/ATC_MiThermometer#advertising-format-of-the-custom-firmware
/// - bytes 0-5: sensor MAC (already known from the advertisement, ignored)
/// - bytes 6-7: temperature, big-endian signed 16-bit, 0.1 °C resolution
/// - byte 8:    humidity percent
/// - byte 9:    battery percent
///
/// Humidity and battery are passed through unclamped; the firmware keeps them
/// in 0-100 and raw-byte noise is left visible rather than masked.
pub fn decode_payload(data: &[u8]) -> Result<SensorValues, DecodeError> {
    if data.len() < SENSOR_PAYLOAD_MIN_LEN {
        return Err(DecodeError::TooShort(data.len()));
    }

    let raw_temperature = i16::from_be_bytes([data[6], data[7]]);

    Ok(SensorValues {
        temperature: f64::from(raw_temperature) / 10.0,
        humidity: data[8],
        battery: data[9],
    })
}
