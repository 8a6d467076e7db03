//! Display formatting for timestamps and weights.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO-8601 instant as `YYYY-MM-DD HH:MM:SS`, dropping fractional
/// seconds and the zone designator. Unrecognised input is returned as-is.
#[must_use]
pub fn format_timestamp(iso: &str) -> String {
    let trimmed = iso.trim();
    let looks_iso = trimmed.len() >= 19 && trimmed.as_bytes().get(10) == Some(&b'T');
    match trimmed.get(..19) {
        Some(head) if looks_iso => head.replacen('T', " ", 1),
        _ => trimmed.to_owned(),
    }
}

/// Optional timestamp cell; `—` when missing.
#[must_use]
pub fn format_optional_timestamp(iso: Option<&str>) -> String {
    iso.map_or_else(|| "—".to_owned(), format_timestamp)
}

#[must_use]
pub fn format_weight(kg: f64) -> String {
    format!("{kg} kg")
}

/// Current instant in RFC 3339, as reported by the browser clock.
#[must_use]
pub fn now_rfc3339() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
