//! Per-device event throttling.
//!
//! Limits how often advertisements from a single device are processed. BLE
//! devices broadcast several times a second while readings change slowly, so
//! an optional interval keeps the display from redrawing constantly in busy
//! environments.

use crate::mac_address::MacAddress;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A throttle that limits the rate of events per device.
///
/// Each device is tracked independently, allowing at most one event per
/// `interval`. The first event for a device is always allowed; blocked
/// events do not reset the timer.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_seen: HashMap<MacAddress, Instant>,
}

impl Throttle {
    /// Create a new throttle with the specified minimum interval between
    /// events.
    pub fn new(interval: Duration) -> Self {
        Throttle {
            interval,
            last_seen: HashMap::new(),
        }
    }

    /// Check if an event from the given device should be processed.
    ///
    /// Returns `true` if enough time has passed since the last allowed event
    /// from this device (or if this is the first one); the internal timer for
    /// the device is reset only in that case.
    pub fn should_emit(&mut self, mac: MacAddress) -> bool {
        let now = Instant::now();

        match self.last_seen.get(&mac) {
            Some(last) if now.duration_since(*last) < self.interval => false,
            _ => {
                self.last_seen.insert(mac, now);
                true
            }
        }
    }
}

/// Parse a duration from a human-readable string.
///
/// Supports the following suffixes:
/// - `s` or no suffix: seconds
/// - `m`: minutes
/// - `h`: hours
/// - `ms`: milliseconds
///
/// # Examples
/// ```
/// use thermometer_watch::throttle::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("3s").unwrap(), Duration::from_secs(3));
/// assert_eq!(parse_duration("1m").unwrap(), Duration::from_secs(60));
/// assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
/// ```
pub fn parse_duration(src: &str) -> Result<Duration, String> {
    let src = src.trim();

    if src.is_empty() {
        return Err("empty duration string".to_string());
    }

    if let Some(num) = src.strip_suffix("ms") {
        let millis: u64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid milliseconds: {}", num))?;
        return Ok(Duration::from_millis(millis));
    }

    if let Some(num) = src.strip_suffix('h') {
        let hours: u64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid hours: {}", num))?;
        return Ok(Duration::from_secs(hours * 3600));
    }

    if let Some(num) = src.strip_suffix('m') {
        let minutes: u64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid minutes: {}", num))?;
        return Ok(Duration::from_secs(minutes * 60));
    }

    if let Some(num) = src.strip_suffix('s') {
        let secs: u64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid seconds: {}", num))?;
        return Ok(Duration::from_secs(secs));
    }

    // No suffix, treat as seconds
    let secs: u64 = src
        .parse()
        .map_err(|_| format!("invalid duration: {}", src))?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC_A: MacAddress = MacAddress([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    const MAC_B: MacAddress = MacAddress([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);

    #[test]
    fn test_throttle_first_event_allowed() {
        let mut throttle = Throttle::new(Duration::from_secs(1));
        assert!(throttle.should_emit(MAC_A));
    }

    #[test]
    fn test_throttle_immediate_second_event_blocked() {
        let mut throttle = Throttle::new(Duration::from_secs(1));
        assert!(throttle.should_emit(MAC_A));
        assert!(!throttle.should_emit(MAC_A));
    }

    #[test]
    fn test_throttle_different_devices_independent() {
        let mut throttle = Throttle::new(Duration::from_secs(1));
        assert!(throttle.should_emit(MAC_A));
        assert!(throttle.should_emit(MAC_B));
        assert!(!throttle.should_emit(MAC_A));
        assert!(!throttle.should_emit(MAC_B));
    }

    #[test]
    fn test_throttle_zero_interval() {
        let mut throttle = Throttle::new(Duration::ZERO);
        assert!(throttle.should_emit(MAC_A));
        assert!(throttle.should_emit(MAC_A));
    }

    #[test]
    fn test_throttle_allowed_after_interval_passes() {
        let mut throttle = Throttle::new(Duration::from_millis(10));
        assert!(throttle.should_emit(MAC_A));
        assert!(!throttle.should_emit(MAC_A));

        std::thread::sleep(Duration::from_millis(15));

        assert!(throttle.should_emit(MAC_A));
    }

    #[test]
    fn test_throttle_blocked_event_does_not_reset_timer() {
        let mut throttle = Throttle::new(Duration::from_millis(30));

        assert!(throttle.should_emit(MAC_A)); // t=0, timer starts

        std::thread::sleep(Duration::from_millis(10));
        assert!(!throttle.should_emit(MAC_A)); // t=10, blocked, timer NOT reset

        std::thread::sleep(Duration::from_millis(10));
        assert!(!throttle.should_emit(MAC_A)); // t=20, still blocked

        std::thread::sleep(Duration::from_millis(15));
        // t=35, now past the 30ms interval from t=0
        assert!(throttle.should_emit(MAC_A));
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("3s").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_duration("1m").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_duration_no_suffix() {
        assert_eq!(parse_duration("10").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_duration_with_whitespace() {
        assert_eq!(parse_duration(" 3s ").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_duration("3 s").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("-1s").is_err());
    }
}
