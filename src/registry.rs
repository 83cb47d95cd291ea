//! Registry of the latest reading per thermometer.
//!
//! A plain overwrite-on-address store: readings never expire and are only
//! replaced by a newer reading from the same device. Iteration order is the
//! order in which each address was first seen, which keeps the rendered
//! blocks from jumping around between redraws.

use crate::mac_address::MacAddress;
use crate::reading::SensorReading;
use std::collections::HashMap;

/// Store of the most recent [`SensorReading`] per device.
#[derive(Debug, Default)]
pub struct SensorRegistry {
    /// First-seen order of addresses; parallel to `readings` keys.
    order: Vec<MacAddress>,
    readings: HashMap<MacAddress, SensorReading>,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the reading for its device.
    pub fn upsert(&mut self, reading: SensorReading) {
        if !self.readings.contains_key(&reading.mac) {
            self.order.push(reading.mac);
        }
        self.readings.insert(reading.mac, reading);
    }

    /// Current readings in first-seen order of their devices.
    pub fn snapshot(&self) -> impl Iterator<Item = &SensorReading> {
        self.order.iter().filter_map(|mac| self.readings.get(mac))
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
