use super::*;

#[test]
fn format_timestamp_strips_fraction_and_zone() {
    assert_eq!(format_timestamp("2024-03-01T10:15:30.123Z"), "2024-03-01 10:15:30");
    assert_eq!(format_timestamp("2024-03-01T10:15:30+02:00"), "2024-03-01 10:15:30");
}

#[test]
fn format_timestamp_passes_through_unknown_shapes() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp("2024-03-01"), "2024-03-01");
}

#[test]
fn format_optional_timestamp_uses_dash_for_missing() {
    assert_eq!(format_optional_timestamp(None), "—");
    assert_eq!(format_optional_timestamp(Some("2024-03-01T00:00:00Z")), "2024-03-01 00:00:00");
}

#[test]
fn format_weight_appends_unit() {
    assert_eq!(format_weight(2.5), "2.5 kg");
    assert_eq!(format_weight(3.0), "3 kg");
}
