use super::*;
use crate::net::types::Role;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn shipment_endpoints_format_expected_paths() {
    assert_eq!(shipment_endpoint("S-1"), "/api/shipping/S-1");
    assert_eq!(tracking_endpoint("TN42"), "/api/tracking/TN42");
    assert_eq!(add_tracking_endpoint("TN42"), "/api/tracking/TN42/add");
}

#[test]
fn typed_ids_cannot_escape_their_path_segment() {
    assert_eq!(tracking_endpoint("../users"), "/api/tracking/..%2Fusers");
    assert_eq!(tracking_endpoint("TN1?x=1#y"), "/api/tracking/TN1%3Fx=1%23y");
    assert_eq!(add_tracking_endpoint("a/b"), "/api/tracking/a%2Fb/add");
    assert_eq!(shipment_endpoint("S 1%"), "/api/shipping/S%201%25");
    assert_eq!(upload_proof_endpoint("x/y"), "/api/store/x%2Fy/upload-proof");
    assert_eq!(download_proof_endpoint("x?", ProofKind::Deposit), "/api/store/x%3F/proof/depositProof");
}

#[test]
fn user_endpoints_format_expected_paths() {
    assert_eq!(user_endpoint(12), "/api/users/12");
    assert_eq!(notify_user_endpoint(12), "/api/users/12/notify");
}

#[test]
fn proof_endpoints_use_kind_wire_value() {
    assert_eq!(upload_proof_endpoint("S-1"), "/api/store/S-1/upload-proof");
    assert_eq!(download_proof_endpoint("S-1", ProofKind::Deposit), "/api/store/S-1/proof/depositProof");
    assert_eq!(download_proof_endpoint("S-1", ProofKind::Delivery), "/api/store/S-1/proof/deliveryProof");
    assert_eq!(proof_download_filename("S-1", ProofKind::Delivery), "deliveryProof-S-1");
}

// =============================================================
// Envelope handling
// =============================================================

#[test]
fn unwrap_envelope_passes_raw_bodies_through() {
    let body = serde_json::json!([{ "shipmentId": "a" }]);
    assert_eq!(unwrap_envelope(body.clone()), Ok(Some(body)));
}

#[test]
fn unwrap_envelope_returns_data_on_success() {
    let body = serde_json::json!({ "success": true, "data": { "trackingNumber": "TN1" } });
    assert_eq!(unwrap_envelope(body), Ok(Some(serde_json::json!({ "trackingNumber": "TN1" }))));
}

#[test]
fn unwrap_envelope_maps_null_data_to_none() {
    let body = serde_json::json!({ "success": true, "data": null });
    assert_eq!(unwrap_envelope(body), Ok(None));
    assert_eq!(unwrap_envelope(serde_json::Value::Null), Ok(None));
}

#[test]
fn unwrap_envelope_rejects_failed_envelope() {
    let body = serde_json::json!({
        "success": false,
        "error": { "code": "TRACKING_NUMBER_NOT_FOUND", "message": "unknown trackingNumber" }
    });
    assert_eq!(
        unwrap_envelope(body),
        Err(ApiError::Rejected { message: "unknown trackingNumber".to_owned() })
    );
}

#[test]
fn decode_payload_reads_tracking_inside_envelope() {
    let body = serde_json::json!({
        "success": true,
        "data": {
            "shipmentId": "S-1",
            "currentStatus": "IN_TRANSIT",
            "history": [{ "status": "CREATED", "timestamp": "2024-03-01T10:00:00Z" }],
            "userId": 3
        }
    });
    let tracking: Tracking = decode_payload(body).unwrap();
    assert_eq!(tracking.current_status, "IN_TRANSIT");
    assert_eq!(tracking.history.len(), 1);
}

#[test]
fn decode_payload_errors_on_empty_success() {
    let body = serde_json::json!({ "success": true });
    assert!(matches!(decode_payload::<Tracking>(body), Err(ApiError::Decode(_))));
}

// =============================================================
// Identity decoding
// =============================================================

#[test]
fn decode_identity_treats_null_as_no_session() {
    assert_eq!(decode_identity(serde_json::Value::Null), Ok(None));
}

#[test]
fn decode_identity_parses_user() {
    let body = serde_json::json!({ "userId": 5, "name": "Bo", "email": "bo@x.io", "role": "USER" });
    let identity = decode_identity(body).unwrap().unwrap();
    assert_eq!(identity.user_id, 5);
    assert_eq!(identity.role, Role::User);
}

#[test]
fn decode_identity_rejects_garbage() {
    let body = serde_json::json!({ "role": "USER" });
    assert!(matches!(decode_identity(body), Err(ApiError::Decode(_))));
}

// =============================================================
// Server-side stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn auth_calls_are_unavailable_without_browser() {
    futures::executor::block_on(async {
        assert_eq!(fetch_current_identity().await, Err(ApiError::Unavailable));
        assert_eq!(logout().await, Err(ApiError::Unavailable));
    });
}

#[test]
fn api_error_user_message_maps_auth_statuses() {
    assert_eq!(ApiError::Status { status: 401 }.user_message(), "You must be signed in to do that.");
    assert_eq!(ApiError::Status { status: 403 }.user_message(), "You do not have permission to do that.");
    assert_eq!(ApiError::Status { status: 500 }.user_message(), "request failed: 500");
}
