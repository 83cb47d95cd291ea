//! Inbound BLE advertisement events.
//!
//! An [`Advertisement`] is the unit of work delivered by the scanner: the
//! advertising device's address, its local name if one was broadcast, and the
//! service-data blocks carried in the advertisement. The core only ever reads
//! these values; the scanning backend owns their production.

use crate::mac_address::MacAddress;

/// A single service-data block from an advertisement.
///
/// `uuid` holds the short lowercase 16-bit form (e.g. `"181a"`) when the
/// service UUID lies in the Bluetooth base range, the full hyphenated form
/// otherwise. Matching against it is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceData {
    pub uuid: String,
    pub data: Vec<u8>,
}

/// A broadcast packet observed from a nearby device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    /// Hardware address of the advertising device.
    pub mac: MacAddress,
    /// Human-readable name, if the device broadcasts one.
    pub local_name: Option<String>,
    /// Service-data blocks in advertisement order.
    pub service_data: Vec<ServiceData>,
}

