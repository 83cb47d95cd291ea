//! `thermometer-watch` library.
//!
//! The binary (`src/main.rs`) is responsible for CLI parsing and process exit
//! codes. The core “business logic” lives in [`crate::app`] where it can be
//! tested deterministically with injected scanner + injected output streams.

pub mod advertisement;
pub mod alias;
pub mod app;
pub mod cache;
pub mod decoder;
pub mod mac_address;
pub mod output;
pub mod reading;
pub mod registry;
pub mod scanner;
pub mod throttle;
pub mod tracker;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types at the crate root
pub use advertisement::{Advertisement, ServiceData};
pub use alias::{Alias, AliasMap, default_aliases, parse_alias, resolve_name, to_map};
pub use cache::{FOUND_DEVICE_CAPACITY, FOUND_DEVICE_TTL, FoundDevice, RecencyCache};
pub use decoder::{DecodeError, SensorValues, decode_payload, find_sensor_payload};
pub use mac_address::MacAddress;
pub use reading::SensorReading;
pub use registry::SensorRegistry;
pub use scanner::ScanError;
pub use throttle::{Throttle, parse_duration};
pub use tracker::{Observation, Tracker};
