//! Latest reading from a recognized thermometer.

use crate::decoder::SensorValues;
use crate::mac_address::MacAddress;

/// A decoded sensor reading together with where and when it was seen.
///
/// `seen_at` carries the already-formatted display timestamp; readings are
/// only ever shown, never computed with.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// MAC address of the thermometer.
    pub mac: MacAddress,
    /// Temperature in Celsius, one decimal of precision.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Battery level in percent.
    pub battery: u8,
    /// Display timestamp of the latest sighting.
    pub seen_at: String,
}

impl SensorReading {
    /// Combine decoded values with the advertising device's identity and a
    /// display timestamp.
    pub fn new(mac: MacAddress, values: SensorValues, seen_at: String) -> Self {
        Self {
            mac,
            temperature: values.temperature,
            humidity: values.humidity,
            battery: values.battery,
            seen_at,
        }
    }
}
