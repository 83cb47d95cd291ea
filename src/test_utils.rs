use crate::advertisement::{Advertisement, ServiceData};
use crate::mac_address::MacAddress;

/// A stable thermometer address for unit tests (carries the sensor OUI).
pub const TEST_SENSOR_MAC: MacAddress = MacAddress([0xA4, 0xC1, 0x38, 0xAA, 0xBB, 0xCC]);

/// A fixed display timestamp for unit tests.
pub fn timestamp() -> String {
    "21. 3. 2026. 12:00:00".to_string()
}

/// Build an advertisement from an address, optional name and
/// `(uuid, payload)` service-data pairs.
pub fn advertisement(
    mac: MacAddress,
    local_name: Option<&str>,
    service_data: Vec<(&str, Vec<u8>)>,
) -> Advertisement {
    Advertisement {
        mac,
        local_name: local_name.map(str::to_string),
        service_data: service_data
            .into_iter()
            .map(|(uuid, data)| ServiceData {
                uuid: uuid.to_string(),
                data,
            })
            .collect(),
    }
}

/// Build a 10-byte ATC sensor payload: the test MAC, then temperature in
/// decidegrees (big-endian signed), humidity and battery.
pub fn sensor_payload(decidegrees: i16, humidity: u8, battery: u8) -> Vec<u8> {
    let mut data = TEST_SENSOR_MAC.0.to_vec();
    data.extend_from_slice(&decidegrees.to_be_bytes());
    data.push(humidity);
    data.push(battery);
    data
}
