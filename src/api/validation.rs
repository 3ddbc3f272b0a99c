use crate::api::error::ApiError;

pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{} cannot be empty", field_name)));
    }
    Ok(())
}

/// Zones are provider identifiers such as `IN`, `DE` or `US-CAL-CISO`.
pub fn validate_zone(zone: &str) -> Result<String, ApiError> {
    validate_not_empty(zone, "zone")?;

    let zone = zone.trim();
    if !zone.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ApiError::bad_request(format!("Invalid zone '{}'", zone)));
    }
    Ok(zone.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_zone() {
        assert_eq!(validate_zone("IN").unwrap(), "IN");
        assert_eq!(validate_zone(" US-CAL-CISO ").unwrap(), "US-CAL-CISO");
        assert!(validate_zone("").is_err());
        assert!(validate_zone("   ").is_err());
        assert!(validate_zone("IN&start=0").is_err());
    }
}
