//! Compact MAC address type for Bluetooth devices.
//!
//! Stores the address as a 6-byte array so it can be copied freely and used
//! as a key in both hash and ordered maps, independent of any specific
//! Bluetooth library.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// A Bluetooth MAC address stored as a compact 6-byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// The vendor (OUI) portion of the address: the first three bytes.
    pub fn oui(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// Errors returned when parsing a MAC address string.
#[derive(Error, Debug, PartialEq)]
pub enum ParseMacError {
    #[error("invalid MAC address: expected 6 parts, got {0}")]
    InvalidLength(usize),
    #[error("invalid MAC address: part {0} has wrong length")]
    InvalidPartLength(usize),
    #[error("invalid MAC address: '{0}' is not valid hex")]
    InvalidHex(String),
}

impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 {
            return Err(ParseMacError::InvalidLength(parts.len()));
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            if part.len() != 2 {
                return Err(ParseMacError::InvalidPartLength(i));
            }
            bytes[i] = u8::from_str_radix(part, 16)
                .map_err(|_| ParseMacError::InvalidHex(part.to_string()))?;
        }

        Ok(MacAddress(bytes))
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl From<bluer::Address> for MacAddress {
    fn from(addr: bluer::Address) -> Self {
        Self(addr.0)
    }
}

impl From<MacAddress> for bluer::Address {
    fn from(addr: MacAddress) -> Self {
        bluer::Address(addr.0)
    }
}
