//! Form validation for shipment, tracking, login and user-admin inputs.
//!
//! Every validator trims text inputs and returns either the cleaned request
//! or the message(s) to show under the form.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{ContactInfo, CreateUserRequest, Role, ShipmentRequest, UpdateUserRequest, UserRecord};

/// Heaviest parcel the service accepts.
pub const MAX_WEIGHT_KG: f64 = 9.0;

// =============================================================================
// SHIPMENTS
// =============================================================================

/// Raw text of the shipment form, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipmentForm {
    pub carrier: String,
    pub weight: String,
    pub sender_name: String,
    pub sender_address: String,
    pub receiver_name: String,
    pub receiver_address: String,
}

impl ShipmentForm {
    /// Prefill from an existing shipment for editing.
    #[must_use]
    pub fn from_request(request: &ShipmentRequest) -> Self {
        Self {
            carrier: request.carrier.clone(),
            weight: request.weight.to_string(),
            sender_name: request.sender.name.clone(),
            sender_address: request.sender.address.clone(),
            receiver_name: request.receiver.name.clone(),
            receiver_address: request.receiver.address.clone(),
        }
    }
}

/// Inputs of the shipment form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipmentField {
    Carrier,
    Weight,
    SenderName,
    SenderAddress,
    ReceiverName,
    ReceiverAddress,
}

impl ShipmentField {
    pub const ALL: [Self; 6] = [
        Self::Carrier,
        Self::Weight,
        Self::SenderName,
        Self::SenderAddress,
        Self::ReceiverName,
        Self::ReceiverAddress,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Carrier => "Carrier",
            Self::Weight => "Weight (kg)",
            Self::SenderName => "Sender name",
            Self::SenderAddress => "Sender address",
            Self::ReceiverName => "Receiver name",
            Self::ReceiverAddress => "Receiver address",
        }
    }
}

impl ShipmentForm {
    #[must_use]
    pub fn field(&self, field: ShipmentField) -> &str {
        match field {
            ShipmentField::Carrier => &self.carrier,
            ShipmentField::Weight => &self.weight,
            ShipmentField::SenderName => &self.sender_name,
            ShipmentField::SenderAddress => &self.sender_address,
            ShipmentField::ReceiverName => &self.receiver_name,
            ShipmentField::ReceiverAddress => &self.receiver_address,
        }
    }

    pub fn set_field(&mut self, field: ShipmentField, value: String) {
        let slot = match field {
            ShipmentField::Carrier => &mut self.carrier,
            ShipmentField::Weight => &mut self.weight,
            ShipmentField::SenderName => &mut self.sender_name,
            ShipmentField::SenderAddress => &mut self.sender_address,
            ShipmentField::ReceiverName => &mut self.receiver_name,
            ShipmentField::ReceiverAddress => &mut self.receiver_address,
        };
        *slot = value;
    }
}

/// Parse a weight in kilograms; accepts `,` as the decimal separator.
///
/// # Errors
///
/// Returns the message to display when the weight is missing, not a number,
/// not positive, or above [`MAX_WEIGHT_KG`].
pub fn parse_weight(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Weight is required");
    }
    let weight: f64 = raw.replace(',', ".").parse().map_err(|_| "Weight must be a number")?;
    if !weight.is_finite() {
        return Err("Weight must be a number");
    }
    if weight <= 0.0 {
        return Err("Weight must be greater than 0");
    }
    if weight > MAX_WEIGHT_KG {
        return Err("Weight cannot exceed 9 kg");
    }
    Ok(weight)
}

/// Validate every field and collect all messages at once.
///
/// # Errors
///
/// Returns one message per invalid field, in form order.
pub fn validate_shipment(form: &ShipmentForm) -> Result<ShipmentRequest, Vec<&'static str>> {
    let mut errors = Vec::new();

    let carrier = form.carrier.trim();
    if carrier.is_empty() {
        errors.push("Carrier is required");
    }
    let weight = match parse_weight(&form.weight) {
        Ok(weight) => Some(weight),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let required = [
        (&form.sender_name, "Sender name is required"),
        (&form.sender_address, "Sender address is required"),
        (&form.receiver_name, "Receiver name is required"),
        (&form.receiver_address, "Receiver address is required"),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            errors.push(message);
        }
    }

    match weight {
        Some(weight) if errors.is_empty() => Ok(ShipmentRequest {
            shipment_id: None,
            user_id: None,
            sender: ContactInfo {
                name: form.sender_name.trim().to_owned(),
                address: form.sender_address.trim().to_owned(),
            },
            receiver: ContactInfo {
                name: form.receiver_name.trim().to_owned(),
                address: form.receiver_address.trim().to_owned(),
            },
            carrier: carrier.to_owned(),
            weight,
        }),
        _ => Err(errors),
    }
}

// =============================================================================
// TRACKING
// =============================================================================

/// # Errors
///
/// Returns a message when the tracking number is blank.
pub fn validate_tracking_number(raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("Enter a tracking number");
    }
    Ok(value.to_owned())
}

/// # Errors
///
/// Returns a message when the shipment id is blank.
pub fn validate_shipment_id(raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("Enter a shipment id");
    }
    Ok(value.to_owned())
}

/// Status entry typed into the add-tracking dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingStatusInput {
    pub status: String,
    pub location: String,
    pub note: String,
}

/// # Errors
///
/// Returns a message when the status or location is blank.
pub fn validate_tracking_status(status: &str, location: &str, note: &str) -> Result<TrackingStatusInput, &'static str> {
    let status = status.trim();
    if status.is_empty() {
        return Err("Status is required");
    }
    let location = location.trim();
    if location.is_empty() {
        return Err("Location is required");
    }
    Ok(TrackingStatusInput { status: status.to_owned(), location: location.to_owned(), note: note.trim().to_owned() })
}

// =============================================================================
// LOGIN
// =============================================================================

/// # Errors
///
/// Returns a message when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

// =============================================================================
// USERS
// =============================================================================

/// Raw text of the create/update user dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: Role,
    pub password: String,
}

impl UserForm {
    /// Prefill the update dialog; the password stays blank.
    #[must_use]
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            address: user.address.clone(),
            role: user.role,
            password: String::new(),
        }
    }
}

fn validate_profile(form: &UserForm) -> Result<(String, String, String), &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("A valid email is required");
    }
    let address = form.address.trim();
    if address.is_empty() {
        return Err("Address is required");
    }
    Ok((name.to_owned(), email.to_owned(), address.to_owned()))
}

/// # Errors
///
/// Returns a message for the first invalid field; a password is mandatory.
pub fn validate_create_user(form: &UserForm) -> Result<CreateUserRequest, &'static str> {
    let (name, email, address) = validate_profile(form)?;
    if form.password.is_empty() {
        return Err("Password is required");
    }
    Ok(CreateUserRequest { name, email, address, role: form.role, password: form.password.clone() })
}

/// # Errors
///
/// Returns a message for the first invalid field.
pub fn validate_update_user(form: &UserForm) -> Result<UpdateUserRequest, &'static str> {
    let (name, email, address) = validate_profile(form)?;
    Ok(UpdateUserRequest { name, email, address, role: form.role })
}

/// # Errors
///
/// Returns a message when the notification text is blank.
pub fn validate_notify_message(raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("Message cannot be empty");
    }
    Ok(value.to_owned())
}
