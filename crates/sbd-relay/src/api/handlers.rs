//! HTTP request handlers.

use super::types::{HealthResponse, MoForm};
use super::AppState;
use crate::error::{RelayError, RelayResult};
use crate::origin::Origin;
use crate::relay::{RelayResponse, SatelliteMessage, TelephoneRequest};
use axum::{
    extract::{FromRequest, Request, State},
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use tracing::debug;
use twilio_client::SIGNATURE_HEADER;

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        directory_entries: state.relay.directory().len(),
    })
}

/// Single webhook endpoint shared by both networks.
pub async fn webhook(State(state): State<AppState>, request: Request) -> Response {
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    let origin = Origin::classify(user_agent);
    debug!(?origin, "Inbound webhook");

    match origin {
        Origin::Telephone => from_telephone(&state, request).await.into_response(),
        Origin::Satellite => from_satellite(&state, request).await.into_response(),
    }
}

async fn from_satellite(state: &AppState, request: Request) -> RelayResult<RelayResponse> {
    let Form(form) = Form::<MoForm>::from_request(request, state)
        .await
        .map_err(|rejection| RelayError::Malformed(rejection.body_text()))?;

    debug!(
        imei = ?form.device_id(),
        momsn = ?form.momsn,
        transmit_time = ?form.transmit_time,
        latitude = ?form.iridium_latitude,
        longitude = ?form.iridium_longitude,
        cep = ?form.iridium_cep,
        "RockBLOCK MO delivery"
    );

    let message = SatelliteMessage::try_from(form)?;
    state.relay.relay_to_sms(message).await
}

async fn from_telephone(state: &AppState, request: Request) -> RelayResult<RelayResponse> {
    let signature = request
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let url = state.request_url(request.headers(), request.uri())?;

    let Form(params) = Form::<Vec<(String, String)>>::from_request(request, state)
        .await
        .map_err(|rejection| RelayError::Malformed(rejection.body_text()))?;

    state
        .relay
        .relay_to_satellite(TelephoneRequest {
            url,
            signature,
            params,
        })
        .await
}
