//! Device classification and tracking state.
//!
//! The [`Tracker`] owns both stores and the alias table, and routes every
//! incoming advertisement to exactly one of them: devices whose address
//! carries the thermometer vendor prefix go through the payload decoder into
//! the [`SensorRegistry`], everything else refreshes the [`RecencyCache`].
//! A prefixed device without a decodable sensor payload is dropped — a
//! partial sensor packet is not generic-device noise.

use crate::advertisement::Advertisement;
use crate::alias::AliasMap;
use crate::cache::{FoundDevice, RecencyCache};
use crate::decoder::{self, DecodeError};
use crate::mac_address::MacAddress;
use crate::output;
use crate::reading::SensorReading;
use crate::registry::SensorRegistry;
use std::time::Instant;

/// OUI prefix of the supported thermometers (a4:c1:38, Telink).
pub const SENSOR_ADDRESS_PREFIX: [u8; 3] = [0xA4, 0xC1, 0x38];

/// Whether an address is eligible for sensor decoding at all.
pub fn is_sensor_address(mac: &MacAddress) -> bool {
    mac.oui() == SENSOR_ADDRESS_PREFIX
}

/// What happened to one observed advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Decoded a sensor payload; the registry now holds the new reading.
    SensorUpdated,
    /// Sensor-prefixed device without a sensor service block; dropped.
    NotSensor,
    /// Sensor payload present but malformed; dropped, nothing stored.
    Malformed(DecodeError),
    /// Any other device; the recency cache was refreshed.
    DeviceSeen,
}

/// Tracking state for everything currently on the air.
#[derive(Debug)]
pub struct Tracker {
    registry: SensorRegistry,
    cache: RecencyCache,
    aliases: AliasMap,
}

impl Tracker {
    pub fn new(aliases: AliasMap) -> Self {
        Self {
            registry: SensorRegistry::new(),
            cache: RecencyCache::new(),
            aliases,
        }
    }

    /// Classify one advertisement and update the matching store.
    pub fn observe(&mut self, advertisement: &Advertisement) -> Observation {
        self.observe_at(advertisement, output::local_timestamp(), Instant::now())
    }

    /// Classify against explicit timestamps, for deterministic tests.
    pub fn observe_at(
        &mut self,
        advertisement: &Advertisement,
        seen_at: String,
        now: Instant,
    ) -> Observation {
        if is_sensor_address(&advertisement.mac) {
            let Some(payload) = decoder::find_sensor_payload(advertisement) else {
                return Observation::NotSensor;
            };
            match decoder::decode_payload(payload) {
                Ok(values) => {
                    self.registry
                        .upsert(SensorReading::new(advertisement.mac, values, seen_at));
                    Observation::SensorUpdated
                }
                Err(error) => Observation::Malformed(error),
            }
        } else {
            self.cache.upsert_at(
                FoundDevice {
                    mac: advertisement.mac,
                    local_name: advertisement.local_name.clone(),
                    seen_at,
                },
                now,
            );
            Observation::DeviceSeen
        }
    }

    /// Compose the display frame for the current state.
    ///
    /// Taking the cache snapshot drops expired entries, so this needs `&mut`;
    /// neither store is otherwise modified.
    pub fn frame(&mut self, timestamp: &str) -> String {
        self.frame_at(timestamp, Instant::now())
    }

    /// Compose the display frame against an explicit clock.
    pub fn frame_at(&mut self, timestamp: &str, now: Instant) -> String {
        let Tracker {
            registry,
            cache,
            aliases,
        } = self;
        output::compose_frame(timestamp, registry, cache.snapshot_at(now), aliases)
    }

    pub fn registry(&self) -> &SensorRegistry {
        &self.registry
    }

    pub fn found_devices(&self) -> &RecencyCache {
        &self.cache
    }
}
