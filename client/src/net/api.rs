//! REST helpers for the shipping gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the gateway's session cookie rides along.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; envelope-wrapped responses with
//! `success: false` are surfaced as `ApiError::Rejected`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use percent_encoding::{AsciiSet, CONTROLS, PercentEncode, utf8_percent_encode};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::Envelope;
use super::types::{
    AddTrackingStatusRequest, CreateUserRequest, CreatedShipment, Credentials, Identity, NotifyUserRequest,
    ProofKind, Shipment, ShipmentRequest, Tracking, UpdateUserRequest, UserRecord,
};

pub const ME_ENDPOINT: &str = "/auth/me";
pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const SHIPPING_ENDPOINT: &str = "/api/shipping";
pub const USERS_ENDPOINT: &str = "/api/users";

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Bytes escaped when a user-typed id becomes one path segment.
#[cfg(any(test, feature = "hydrate"))]
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[cfg(any(test, feature = "hydrate"))]
fn segment(raw: &str) -> PercentEncode<'_> {
    utf8_percent_encode(raw, PATH_SEGMENT)
}

#[cfg(any(test, feature = "hydrate"))]
fn shipment_endpoint(shipment_id: &str) -> String {
    format!("{SHIPPING_ENDPOINT}/{}", segment(shipment_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn tracking_endpoint(tracking_number: &str) -> String {
    format!("/api/tracking/{}", segment(tracking_number))
}

#[cfg(any(test, feature = "hydrate"))]
fn add_tracking_endpoint(tracking_number: &str) -> String {
    format!("/api/tracking/{}/add", segment(tracking_number))
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: i64) -> String {
    format!("{USERS_ENDPOINT}/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn notify_user_endpoint(user_id: i64) -> String {
    format!("{USERS_ENDPOINT}/{user_id}/notify")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_proof_endpoint(shipment_id: &str) -> String {
    format!("/api/store/{}/upload-proof", segment(shipment_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn download_proof_endpoint(shipment_id: &str, kind: ProofKind) -> String {
    format!("/api/store/{}/proof/{}", segment(shipment_id), kind.as_str())
}

/// File name offered to the browser when saving a downloaded proof.
#[must_use]
pub fn proof_download_filename(shipment_id: &str, kind: ProofKind) -> String {
    format!("{}-{shipment_id}", kind.as_str())
}

// =============================================================================
// DECODING
// =============================================================================

/// Unwrap a gateway envelope if the body is one; otherwise pass the body
/// through untouched. `Ok(None)` means a successful envelope without data.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_envelope(body: serde_json::Value) -> Result<Option<serde_json::Value>, ApiError> {
    let is_envelope = body.as_object().is_some_and(|map| map.contains_key("success"));
    if !is_envelope {
        return Ok(if body.is_null() { None } else { Some(body) });
    }
    let envelope: Envelope = serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected { message: envelope.failure_message() });
    }
    Ok(envelope.data.filter(|data| !data.is_null()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a payload that may or may not be envelope-wrapped.
#[cfg(any(test, feature = "hydrate"))]
fn decode_payload<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ApiError> {
    match unwrap_envelope(body)? {
        Some(data) => decode(data),
        None => Err(ApiError::Decode("empty response".to_owned())),
    }
}

/// `/auth/me` answers `null` when there is no session.
#[cfg(any(test, feature = "hydrate"))]
fn decode_identity(body: serde_json::Value) -> Result<Option<Identity>, ApiError> {
    if body.is_null() {
        return Ok(None);
    }
    decode::<Identity>(body).map(Some)
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use web_sys::RequestCredentials;

    use super::ApiError;

    pub(super) fn get(url: &str) -> RequestBuilder {
        Request::get(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn post(url: &str) -> RequestBuilder {
        Request::post(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn put(url: &str) -> RequestBuilder {
        Request::put(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn delete(url: &str) -> RequestBuilder {
        Request::delete(url).credentials(RequestCredentials::Include)
    }

    fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            Ok(resp)
        } else {
            Err(ApiError::Status { status: resp.status() })
        }
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        check(resp)
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        check(resp)
    }

    pub(super) async fn send_form(builder: RequestBuilder, form: web_sys::FormData) -> Result<Response, ApiError> {
        let request = builder.body(form).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        check(resp)
    }

    /// Read the body as JSON, treating an empty body as `null`.
    pub(super) async fn read_json(resp: Response) -> Result<serde_json::Value, ApiError> {
        let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the identity bound to the current session cookie.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status or a malformed body.
pub async fn fetch_current_identity() -> Result<Option<Identity>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get(ME_ENDPOINT)).await?;
        decode_identity(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status or a malformed body.
pub async fn login(credentials: &Credentials) -> Result<Identity, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(http::post(LOGIN_ENDPOINT), credentials).await?;
        decode_identity(http::read_json(resp).await?)?.ok_or_else(|| ApiError::Decode("empty identity".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the server session via `POST /auth/logout`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::send(http::post(LOGOUT_ENDPOINT)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// SHIPMENTS
// =============================================================================

/// Create a shipment; returns the ids the gateway assigned, when echoed.
///
/// # Errors
///
/// Returns an error if the request fails or the envelope reports failure.
pub async fn create_shipment(request: &ShipmentRequest) -> Result<CreatedShipment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(http::post(SHIPPING_ENDPOINT), request).await?;
        match unwrap_envelope(http::read_json(resp).await?)? {
            Some(data) => Ok(decode(data).unwrap_or_default()),
            None => Ok(CreatedShipment::default()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// List every shipment visible to the session.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a shipment list.
pub async fn fetch_shipments() -> Result<Vec<Shipment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get(SHIPPING_ENDPOINT)).await?;
        match unwrap_envelope(http::read_json(resp).await?)? {
            Some(data) => decode(data),
            None => Ok(Vec::new()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single shipment.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a shipment.
pub async fn fetch_shipment(shipment_id: &str) -> Result<Shipment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get(&shipment_endpoint(shipment_id))).await?;
        decode_payload(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = shipment_id;
        Err(ApiError::Unavailable)
    }
}

/// Replace a shipment's editable fields.
///
/// # Errors
///
/// Returns an error if the request fails or the envelope reports failure.
pub async fn update_shipment(shipment_id: &str, request: &ShipmentRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(http::put(&shipment_endpoint(shipment_id)), request).await?;
        unwrap_envelope(http::read_json(resp).await?).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (shipment_id, request);
        Err(ApiError::Unavailable)
    }
}

/// Delete a shipment (administrators only, enforced by the gateway).
///
/// # Errors
///
/// Returns an error if the request fails or the envelope reports failure.
pub async fn delete_shipment(shipment_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::delete(&shipment_endpoint(shipment_id))).await?;
        unwrap_envelope(http::read_json(resp).await?).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = shipment_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// TRACKING
// =============================================================================

/// Look up a shipment's status and history by tracking number.
///
/// # Errors
///
/// Returns an error if the request fails, the number is unknown, or the
/// payload is malformed.
pub async fn track_shipment(tracking_number: &str) -> Result<Tracking, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get(&tracking_endpoint(tracking_number))).await?;
        decode_payload(http::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tracking_number;
        Err(ApiError::Unavailable)
    }
}

/// Append a status entry to a shipment's history.
///
/// # Errors
///
/// Returns an error if the request fails or the envelope reports failure.
pub async fn add_tracking_status(request: &AddTrackingStatusRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = add_tracking_endpoint(&request.tracking_number);
        let resp = http::send_json(http::post(&url), request).await?;
        unwrap_envelope(http::read_json(resp).await?).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// USERS
// =============================================================================

/// List all accounts (administrators only).
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a user list.
pub async fn fetch_users() -> Result<Vec<UserRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get(USERS_ENDPOINT)).await?;
        match unwrap_envelope(http::read_json(resp).await?)? {
            Some(data) => decode(data),
            None => Ok(Vec::new()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create an account.
///
/// # Errors
///
/// Returns an error if the request fails or the gateway rejects it.
pub async fn create_user(request: &CreateUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(http::post(USERS_ENDPOINT), request).await?;
        unwrap_envelope(http::read_json(resp).await?).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Update an account's profile and role.
///
/// # Errors
///
/// Returns an error if the request fails or the gateway rejects it.
pub async fn update_user(user_id: i64, request: &UpdateUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(http::put(&user_endpoint(user_id)), request).await?;
        unwrap_envelope(http::read_json(resp).await?).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, request);
        Err(ApiError::Unavailable)
    }
}

/// Delete an account.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_user(user_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::delete(&user_endpoint(user_id))).await?;
        unwrap_envelope(http::read_json(resp).await?).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

/// Send a notification message to an account holder.
///
/// # Errors
///
/// Returns an error if the request fails or the gateway rejects it.
pub async fn notify_user(user_id: i64, request: &NotifyUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(http::post(&notify_user_endpoint(user_id)), request).await?;
        unwrap_envelope(http::read_json(resp).await?).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, request);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// PROOFS
// =============================================================================

/// Upload a deposit or delivery proof as `multipart/form-data`.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// gateway rejects the file.
#[cfg(feature = "hydrate")]
pub async fn upload_proof(shipment_id: &str, kind: ProofKind, file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    form.append_with_str("type", kind.as_str())
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    let resp = http::send_form(http::post(&upload_proof_endpoint(shipment_id)), form).await?;
    unwrap_envelope(http::read_json(resp).await?).map(|_| ())
}

/// Download a proof file and hand it to the browser as a save-as download.
///
/// # Errors
///
/// Returns an error if the proof does not exist or the browser refuses the
/// object URL.
pub async fn download_proof(shipment_id: &str, kind: ProofKind) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let resp = http::send(http::get(&download_proof_endpoint(shipment_id, kind))).await?;
        let bytes = resp.binary().await.map_err(|e| ApiError::Transport(e.to_string()))?;

        let js_err = |e: wasm_bindgen::JsValue| ApiError::Decode(format!("{e:?}"));
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ApiError::Decode("no document".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ApiError::Decode("anchor element".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(&proof_download_filename(shipment_id, kind));
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (shipment_id, kind);
        Err(ApiError::Unavailable)
    }
}
