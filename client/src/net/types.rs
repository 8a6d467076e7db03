//! Wire DTOs for the shipping gateway.
//!
//! DESIGN
//! ======
//! Field names follow the gateway's camelCase JSON. Optional-in-transit text
//! fields collapse `null`/missing to an empty string so views never branch on
//! presence for display-only values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Closed set of account roles issued by the gateway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Wire spelling (`"USER"` / `"ADMIN"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse the wire spelling; anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// The signed-in principal as returned by `/auth/me` and `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    pub role: Role,
}

/// Login request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// =============================================================================
// SHIPMENTS
// =============================================================================

/// Sender or receiver of a parcel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

/// One step of a shipment's tracking history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Shipment record as listed by `GET /api/shipping`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub shipment_id: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: ContactInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub receiver: ContactInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carrier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_history: Vec<StatusEntry>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Shipment {
    /// Status shown to users: the newest history entry wins over the stored
    /// `status` field, which the backend does not always advance.
    #[must_use]
    pub fn display_status(&self) -> &str {
        self.status_history
            .last()
            .map_or(self.status.as_str(), |entry| entry.status.as_str())
    }
}

/// Body for `POST /api/shipping` and `PUT /api/shipping/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub sender: ContactInfo,
    pub receiver: ContactInfo,
    pub carrier: String,
    pub weight: f64,
}

impl ShipmentRequest {
    /// Prefill an edit form from an existing shipment.
    #[must_use]
    pub fn from_shipment(shipment: &Shipment) -> Self {
        Self {
            shipment_id: Some(shipment.shipment_id.clone()),
            user_id: shipment.user_id,
            sender: shipment.sender.clone(),
            receiver: shipment.receiver.clone(),
            carrier: shipment.carrier.clone(),
            weight: shipment.weight,
        }
    }
}

/// Payload returned by `POST /api/shipping` inside the gateway envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedShipment {
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
}

// =============================================================================
// TRACKING
// =============================================================================

/// Result of `GET /api/tracking/{trackingNumber}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipment_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<StatusEntry>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Body for `POST /api/tracking/{trackingNumber}/add`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTrackingStatusRequest {
    pub status: String,
    pub location: String,
    pub note: String,
    pub tracking_number: String,
    pub timestamp: String,
    pub user_id: i64,
}

// =============================================================================
// USERS
// =============================================================================

/// Account row listed on the administration page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /api/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: Role,
    pub password: String,
}

/// Body for `PUT /api/users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: Role,
}

impl UpdateUserRequest {
    #[must_use]
    pub fn from_record(user: &UserRecord) -> Self {
        Self { name: user.name.clone(), email: user.email.clone(), address: user.address.clone(), role: user.role }
    }
}

/// Body for `POST /api/users/{id}/notify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NotifyUserRequest {
    pub message: String,
}

// =============================================================================
// PROOFS
// =============================================================================

/// Which proof file a shipment slot refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProofKind {
    Deposit,
    Delivery,
}

impl ProofKind {
    /// Value of the multipart `type` field and the download path segment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "depositProof",
            Self::Delivery => "deliveryProof",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit proof",
            Self::Delivery => "Delivery proof",
        }
    }
}

// =============================================================================
// GATEWAY ENVELOPE
// =============================================================================

/// Error detail nested in a failed envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EnvelopeError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{success, data, error, message}` wrapper the gateway uses for
/// message-bus backed operations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<EnvelopeError>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Best human-readable reason for a failed envelope.
    #[must_use]
    pub fn failure_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone().or_else(|| e.code.clone()))
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "request rejected".to_owned())
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
