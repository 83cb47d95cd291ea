//! BlueZ D-Bus backend.
//!
//! Uses the `bluer` crate to talk to the BlueZ daemon. Discovery runs with
//! duplicate data enabled so repeated advertisements from the same device
//! keep flowing; on top of the device-added events, a per-device watcher
//! re-emits an [`Advertisement`] whenever the device's service data, name or
//! RSSI changes, which is how fresh broadcasts from an already-known device
//! become visible.

use super::{ADVERTISEMENT_CHANNEL_BUFFER_SIZE, ScanError};
use crate::advertisement::{Advertisement, ServiceData};
use bluer::{
    Adapter, AdapterEvent, Address, DeviceEvent, DeviceProperty, DiscoveryFilter,
    DiscoveryTransport, Session, Uuid,
};
use futures::StreamExt;
use tokio::sync::mpsc;

impl From<bluer::Error> for ScanError {
    fn from(err: bluer::Error) -> Self {
        ScanError::Bluetooth(err.to_string())
    }
}

/// Bluetooth base UUID with the 16-bit short field zeroed.
const BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// Mask of the 16-bit short UUID field within the base UUID.
const SHORT_UUID_MASK: u128 = 0xFFFF << 96;

/// Render a service UUID the way advertisements name it: the short lowercase
/// 16-bit form when the UUID lies in the Bluetooth base range, the full
/// hyphenated form otherwise.
fn service_uuid_label(uuid: Uuid) -> String {
    let value = uuid.as_u128();
    if value & !SHORT_UUID_MASK == BASE_UUID {
        format!("{:04x}", (value >> 96) as u16)
    } else {
        uuid.to_string()
    }
}

/// Start scanning using the BlueZ D-Bus backend.
///
/// Powers the default adapter, applies an LE discovery filter and spawns a
/// task that owns all Bluetooth state for the life of the channel.
pub async fn start_scan() -> Result<mpsc::Receiver<Advertisement>, ScanError> {
    let session = Session::new().await?;
    let adapter = session.default_adapter().await?;
    adapter.set_powered(true).await?;

    let filter = DiscoveryFilter {
        transport: DiscoveryTransport::Le,
        duplicate_data: true,
        ..Default::default()
    };
    adapter.set_discovery_filter(filter).await?;

    let (tx, rx) = mpsc::channel(ADVERTISEMENT_CHANNEL_BUFFER_SIZE);
    let mut events = adapter.discover_devices().await?;

    tokio::spawn(async move {
        // Keep all Bluetooth state alive by moving it into this task
        let _session = session;

        while let Some(event) = events.next().await {
            if let AdapterEvent::DeviceAdded(address) = event {
                tokio::spawn(watch_device(adapter.clone(), address, tx.clone()));
            }
        }
    });

    Ok(rx)
}

/// Emit the device's current advertisement, then keep re-emitting on every
/// advertisement-relevant property change until the device goes away or the
/// receiver is dropped.
async fn watch_device(adapter: Adapter, address: Address, tx: mpsc::Sender<Advertisement>) {
    let Ok(device) = adapter.device(address) else {
        return;
    };

    if let Ok(advertisement) = read_advertisement(&adapter, address).await
        && tx.send(advertisement).await.is_err()
    {
        return;
    }

    let Ok(mut changes) = device.events().await else {
        return;
    };

    while let Some(DeviceEvent::PropertyChanged(property)) = changes.next().await {
        let fresh_broadcast = matches!(
            property,
            DeviceProperty::ServiceData(_) | DeviceProperty::Name(_) | DeviceProperty::Rssi(_)
        );
        if !fresh_broadcast {
            continue;
        }
        match read_advertisement(&adapter, address).await {
            Ok(advertisement) => {
                if tx.send(advertisement).await.is_err() {
                    return;
                }
            }
            // Device vanished between the event and the read; the watcher
            // ends with its event stream.
            Err(_) => return,
        }
    }
}

/// Assemble an [`Advertisement`] from the device's current properties.
async fn read_advertisement(
    adapter: &Adapter,
    address: Address,
) -> Result<Advertisement, ScanError> {
    let device = adapter.device(address)?;
    let local_name = device.name().await?;

    let service_data = device
        .service_data()
        .await?
        .unwrap_or_default()
        .into_iter()
        .map(|(uuid, data)| ServiceData {
            uuid: service_uuid_label(uuid),
            data,
        })
        .collect();

    Ok(Advertisement {
        mac: address.into(),
        local_name,
        service_data,
    })
}
