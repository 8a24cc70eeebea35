//! Static device-identifier ⇄ phone-number directory.

use crate::error::DirectoryError;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Immutable two-way mapping between satellite device IMEIs and phone numbers.
///
/// Both directions are built independently and checked against each other at
/// construction, so every registered phone number belongs to exactly one
/// device.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    device_to_phone: HashMap<String, String>,
    phone_to_device: HashMap<String, String>,
}

impl Directory {
    /// Build a directory from `(device_id, phone_number)` pairs.
    pub fn from_entries<I, D, P>(entries: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = (D, P)>,
        D: Into<String>,
        P: Into<String>,
    {
        let mut device_to_phone = HashMap::new();
        let mut phone_to_device: HashMap<String, String> = HashMap::new();

        for (device_id, phone_number) in entries {
            let device_id = device_id.into().trim().to_string();
            let phone_number = phone_number.into().trim().to_string();

            if device_id.is_empty() || phone_number.is_empty() {
                return Err(DirectoryError::EmptyEntry {
                    device_id,
                    phone_number,
                });
            }

            if let Some(first) = phone_to_device.get(&phone_number) {
                return Err(DirectoryError::DuplicatePhoneNumber {
                    phone_number,
                    first: first.clone(),
                    second: device_id,
                });
            }

            if device_to_phone.contains_key(&device_id) {
                return Err(DirectoryError::DuplicateDevice(device_id));
            }

            device_to_phone.insert(device_id.clone(), phone_number.clone());
            phone_to_device.insert(phone_number, device_id);
        }

        Ok(Self {
            device_to_phone,
            phone_to_device,
        })
    }

    /// Load a directory from a JSON object of `{ "<imei>": "<phone number>" }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let DirectoryFile(entries) = serde_json::from_str::<DirectoryFile>(&contents)?;

        debug!(path = %path.display(), entries = entries.len(), "Parsed directory file");
        Self::from_entries(entries)
    }

    /// Phone number registered for a device, if any.
    pub fn resolve_device_to_phone(&self, device_id: &str) -> Option<&str> {
        self.device_to_phone.get(device_id).map(String::as_str)
    }

    /// Device registered for a phone number, if any.
    pub fn resolve_phone_to_device(&self, phone_number: &str) -> Option<&str> {
        self.phone_to_device.get(phone_number).map(String::as_str)
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.device_to_phone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.device_to_phone.is_empty()
    }
}

/// JSON object entries in file order, repeated keys included.
struct DirectoryFile(Vec<(String, String)>);

impl<'de> Deserialize<'de> for DirectoryFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DirectoryFile;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of device IMEI to phone number")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(DirectoryFile(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
