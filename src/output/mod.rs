//! Display frame composition.
//!
//! Builds the text frame for the current tracking state: a timestamp header,
//! then either one block per known thermometer or, while no reading exists
//! yet, the flat list of other devices seen on the air. Frame composition is
//! a pure read of the stores; putting the frame on screen is the job of
//! [`terminal::Painter`].

pub mod terminal;

use crate::alias::{AliasMap, resolve_name};
use crate::cache::FoundDevice;
use crate::reading::SensorReading;
use crate::registry::SensorRegistry;
use chrono::Local;

/// Divider drawn between sensor blocks.
pub const BLOCK_DIVIDER: &str = "--------------------";

/// Display timestamp format: `D. M. YYYY. HH:MM:SS`
const TIMESTAMP_FORMAT: &str = "%-d. %-m. %Y. %H:%M:%S";

/// Current local time formatted for display.
pub fn local_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn sensor_block(reading: &SensorReading, aliases: &AliasMap) -> String {
    format!(
        "|->     Address: {}\n\
         |->          At: {}\n\
         |-> Temperature: {:.1}°C\n\
         |->    Humidity: {}%\n\
         |->     Battery: {}%",
        resolve_name(&reading.mac, aliases),
        reading.seen_at,
        reading.temperature,
        reading.humidity,
        reading.battery,
    )
}

fn found_line(device: &FoundDevice) -> String {
    match &device.local_name {
        Some(name) => format!(" - {} ({}) [{}]", device.mac, name, device.seen_at),
        None => format!(" - {} [{}]", device.mac, device.seen_at),
    }
}

/// Compose the full display frame.
///
/// Sensor readings take priority: as soon as the registry holds anything,
/// only sensor blocks are shown, regardless of what the recency cache
/// contains. Every line ends with a newline, so the frame's height is its
/// newline count.
pub fn compose_frame<'a, I>(
    timestamp: &str,
    registry: &SensorRegistry,
    found: I,
    aliases: &AliasMap,
) -> String
where
    I: IntoIterator<Item = &'a FoundDevice>,
{
    let mut frame = format!("{timestamp}\n\n");

    if registry.is_empty() {
        frame.push_str("Found:\n");
        for device in found {
            frame.push_str(&found_line(device));
            frame.push('\n');
        }
    } else {
        let blocks: Vec<String> = registry
            .snapshot()
            .map(|reading| sensor_block(reading, aliases))
            .collect();
        frame.push_str(&blocks.join(&format!("\n{BLOCK_DIVIDER}\n")));
        frame.push('\n');
    }

    frame
}
