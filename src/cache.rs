//! Recency-bounded cache of generic (non-sensor) devices.
//!
//! Entries live for a fixed TTL from their last sighting and the cache holds
//! at most a fixed number of distinct devices; inserting beyond capacity
//! evicts the least-recently-seen entry. Expiry is evaluated lazily: nothing
//! runs in the background, expired entries are dropped when a snapshot is
//! taken. All methods have `*_at` variants taking an explicit clock so
//! eviction timing can be tested deterministically.

use crate::mac_address::MacAddress;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of distinct devices kept.
pub const FOUND_DEVICE_CAPACITY: usize = 20;

/// How long an entry stays alive without being refreshed.
pub const FOUND_DEVICE_TTL: Duration = Duration::from_secs(60);

/// A device sighted on the air that did not classify as a thermometer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundDevice {
    pub mac: MacAddress,
    /// Advertised local name, if any.
    pub local_name: Option<String>,
    /// Display timestamp of the latest sighting.
    pub seen_at: String,
}

#[derive(Debug)]
struct Slot {
    device: FoundDevice,
    expires_at: Instant,
}

/// Fixed-capacity store with per-entry TTL and least-recently-used eviction.
///
/// Slots are kept in use order: front is the least recently seen device,
/// back the most recent.
#[derive(Debug)]
pub struct RecencyCache {
    capacity: usize,
    ttl: Duration,
    slots: VecDeque<Slot>,
}

impl Default for RecencyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyCache {
    pub fn new() -> Self {
        Self::with_limits(FOUND_DEVICE_CAPACITY, FOUND_DEVICE_TTL)
    }

    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            slots: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert or refresh a device sighting.
    pub fn upsert(&mut self, device: FoundDevice) {
        self.upsert_at(device, Instant::now());
    }

    /// Insert or refresh a device sighting against an explicit clock.
    ///
    /// A refresh restarts the entry's TTL and moves it to the most recently
    /// used position; it never counts against capacity. A new device first
    /// drops already-expired entries and then, if the cache is still full,
    /// evicts the least recently used one.
    pub fn upsert_at(&mut self, device: FoundDevice, now: Instant) {
        if let Some(position) = self.slots.iter().position(|s| s.device.mac == device.mac) {
            self.slots.remove(position);
        } else {
            self.slots.retain(|slot| slot.expires_at > now);
            if self.slots.len() >= self.capacity {
                self.slots.pop_front();
            }
        }

        self.slots.push_back(Slot {
            device,
            expires_at: now + self.ttl,
        });
    }

    /// Live entries in use order, least recently seen first.
    pub fn snapshot(&mut self) -> impl Iterator<Item = &FoundDevice> {
        self.snapshot_at(Instant::now())
    }

    /// Live entries against an explicit clock.
    ///
    /// Dropping expired entries happens here, as a side effect of taking the
    /// snapshot; an expired entry stays in memory until the next snapshot
    /// observes it.
    pub fn snapshot_at(&mut self, now: Instant) -> impl Iterator<Item = &FoundDevice> {
        self.slots.retain(|slot| slot.expires_at > now);
        self.slots.iter().map(|slot| &slot.device)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(index: u8) -> FoundDevice {
        FoundDevice {
            mac: MacAddress([0x00, 0x11, 0x22, 0x33, 0x44, index]),
            local_name: Some(format!("Device {index}")),
            seen_at: "1. 1. 2026. 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_upsert_and_snapshot() {
        let mut cache = RecencyCache::new();
        let now = Instant::now();
        cache.upsert_at(device(1), now);
        cache.upsert_at(device(2), now);

        let macs: Vec<MacAddress> = cache.snapshot_at(now).map(|d| d.mac).collect();
        assert_eq!(macs, vec![device(1).mac, device(2).mac]);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let mut cache = RecencyCache::new();
        let now = Instant::now();
        for i in 0..20 {
            cache.upsert_at(device(i), now);
        }
        // Refresh device 0 so device 1 becomes the least recently used.
        cache.upsert_at(device(0), now);
        cache.upsert_at(device(20), now);

        assert_eq!(cache.len(), 20);
        let macs: Vec<MacAddress> = cache.snapshot_at(now).map(|d| d.mac).collect();
        assert!(!macs.contains(&device(1).mac));
        assert!(macs.contains(&device(0).mac));
        assert!(macs.contains(&device(20).mac));
    }

    #[test]
    fn test_refresh_never_counts_against_capacity() {
        let mut cache = RecencyCache::new();
        let now = Instant::now();
        for i in 0..20 {
            cache.upsert_at(device(i), now);
        }
        for i in 0..20 {
            cache.upsert_at(device(i), now);
        }
        assert_eq!(cache.len(), 20);
        assert_eq!(cache.snapshot_at(now).count(), 20);
    }

    #[test]
    fn test_refresh_moves_entry_to_most_recent() {
        let mut cache = RecencyCache::with_limits(3, FOUND_DEVICE_TTL);
        let now = Instant::now();
        cache.upsert_at(device(1), now);
        cache.upsert_at(device(2), now);
        cache.upsert_at(device(3), now);
        cache.upsert_at(device(1), now);

        let macs: Vec<MacAddress> = cache.snapshot_at(now).map(|d| d.mac).collect();
        assert_eq!(macs, vec![device(2).mac, device(3).mac, device(1).mac]);

        // Device 2 is now the oldest and goes first under pressure.
        cache.upsert_at(device(4), now);
        let macs: Vec<MacAddress> = cache.snapshot_at(now).map(|d| d.mac).collect();
        assert_eq!(macs, vec![device(3).mac, device(1).mac, device(4).mac]);
    }

    #[test]
    fn test_entries_expire_after_ttl() {
        let mut cache = RecencyCache::new();
        let start = Instant::now();
        cache.upsert_at(device(1), start);
        cache.upsert_at(device(2), start + Duration::from_secs(30));

        // 61 seconds after device 1 was last seen: only device 2 survives.
        let later = start + Duration::from_secs(61);
        let macs: Vec<MacAddress> = cache.snapshot_at(later).map(|d| d.mac).collect();
        assert_eq!(macs, vec![device(2).mac]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_refresh_restarts_ttl() {
        let mut cache = RecencyCache::new();
        let start = Instant::now();
        cache.upsert_at(device(1), start);
        cache.upsert_at(device(1), start + Duration::from_secs(50));

        // 90 seconds from the first sighting, 40 from the refresh.
        let later = start + Duration::from_secs(90);
        assert_eq!(cache.snapshot_at(later).count(), 1);
    }

    #[test]
    fn test_expired_entries_do_not_block_capacity() {
        let mut cache = RecencyCache::with_limits(3, FOUND_DEVICE_TTL);
        let start = Instant::now();
        cache.upsert_at(device(1), start);
        cache.upsert_at(device(2), start);
        cache.upsert_at(device(3), start);

        // All three are expired when device 4 arrives; none of the live
        // entries should have been evicted for capacity.
        let later = start + Duration::from_secs(61);
        cache.upsert_at(device(4), later);
        let macs: Vec<MacAddress> = cache.snapshot_at(later).map(|d| d.mac).collect();
        assert_eq!(macs, vec![device(4).mac]);
    }

    #[test]
    fn test_snapshot_refresh_updates_name_and_timestamp() {
        let mut cache = RecencyCache::new();
        let now = Instant::now();
        cache.upsert_at(device(1), now);

        let mut refreshed = device(1);
        refreshed.local_name = Some("Renamed".to_string());
        refreshed.seen_at = "1. 1. 2026. 00:01:00".to_string();
        cache.upsert_at(refreshed.clone(), now);

        let entries: Vec<&FoundDevice> = cache.snapshot_at(now).collect();
        assert_eq!(entries, vec![&refreshed]);
    }
}
