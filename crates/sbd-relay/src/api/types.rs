//! API request and response types.

use crate::error::RelayError;
use crate::relay::SatelliteMessage;
use serde::{Deserialize, Serialize};

/// RockBLOCK mobile-originated delivery form.
///
/// Only the device id and `data` drive the relay. The rest is logged as
/// received, so a blank or odd value there never rejects a delivery.
#[derive(Debug, Default, Deserialize)]
pub struct MoForm {
    /// Device IMEI
    pub imei: Option<String>,

    /// Device IMEI under its legacy name
    pub emei: Option<String>,

    /// Hex-encoded payload
    pub data: Option<String>,

    /// Mobile-originated message sequence number
    pub momsn: Option<String>,

    pub transmit_time: Option<String>,
    pub iridium_latitude: Option<String>,
    pub iridium_longitude: Option<String>,
    pub iridium_cep: Option<String>,
}

impl MoForm {
    /// Device id, preferring `imei` over `emei`.
    pub fn device_id(&self) -> Option<&str> {
        self.imei.as_deref().or(self.emei.as_deref())
    }
}

impl TryFrom<MoForm> for SatelliteMessage {
    type Error = RelayError;

    fn try_from(form: MoForm) -> Result<Self, Self::Error> {
        let device_id = form
            .imei
            .or(form.emei)
            .ok_or_else(|| RelayError::Malformed("missing field `imei`".into()))?;
        let hex_payload = form
            .data
            .ok_or_else(|| RelayError::Malformed("missing field `data`".into()))?;

        Ok(SatelliteMessage {
            device_id,
            hex_payload,
        })
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub directory_entries: usize,
}
