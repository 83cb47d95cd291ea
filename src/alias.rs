//! Display names for known thermometers.
//!
//! Maps MAC addresses to human-readable labels, consulted only at render
//! time. A built-in table covers the home deployment; `--alias` entries add
//! to or override it.

use crate::mac_address::MacAddress;
use std::collections::BTreeMap;

/// A type alias for MAC-to-name mappings.
pub type AliasMap = BTreeMap<MacAddress, String>;

/// A parsed alias mapping a MAC address to a human-readable name.
#[derive(Debug, Clone)]
pub struct Alias {
    pub address: MacAddress,
    /// The human-readable name (e.g. "Dnevna")
    pub name: String,
}

/// Built-in labels for the known thermometers.
const DEFAULT_ALIASES: [([u8; 6], &str); 2] = [
    ([0xA4, 0xC1, 0x38, 0x59, 0x00, 0x11], "Dnevna"),
    ([0xA4, 0xC1, 0x38, 0x15, 0xE4, 0xE7], "Lođa"),
];

/// Parse an alias from a string in the format "MAC=NAME".
///
/// # Example
/// ```
/// use thermometer_watch::alias::parse_alias;
///
/// let alias = parse_alias("A4:C1:38:AA:BB:CC=Kitchen").unwrap();
/// assert_eq!(alias.name, "Kitchen");
/// ```
pub fn parse_alias(src: &str) -> Result<Alias, String> {
    let (address, name) = src
        .split_once('=')
        .ok_or_else(|| "invalid alias: expected format MAC=NAME".to_string())?;

    let address: MacAddress = address.parse().map_err(|e| format!("{e}"))?;

    Ok(Alias {
        address,
        name: name.into(),
    })
}

/// Convert a slice of Alias values into an AliasMap.
pub fn to_map(aliases: &[Alias]) -> AliasMap {
    aliases
        .iter()
        .map(|a| (a.address, a.name.clone()))
        .collect()
}

/// The built-in alias table.
pub fn default_aliases() -> AliasMap {
    DEFAULT_ALIASES
        .iter()
        .map(|(bytes, name)| (MacAddress(*bytes), (*name).to_string()))
        .collect()
}

/// Resolve the display name for an address, falling back to the address
/// itself when no alias is known.
pub fn resolve_name(mac: &MacAddress, aliases: &AliasMap) -> String {
    match aliases.get(mac) {
        Some(name) => name.clone(),
        None => mac.to_string(),
    }
}
