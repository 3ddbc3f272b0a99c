use serde_json::Value;

/// Numeric reading of a JSON value, `None` for anything that is not a
/// finite number. Strings are not parsed: `"50"` is malformed, not 50.
pub fn numeric_value(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Missing, null and non-numeric inputs all read as zero.
///
/// This is the only place the zero default is applied. A record without a
/// carbon intensity therefore pulls the series average down instead of
/// being left out of it.
pub fn coerce_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(numeric_value).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&json!(42)), Some(42.0));
        assert_eq!(numeric_value(&json!(-1.5)), Some(-1.5));
        assert_eq!(numeric_value(&json!("42")), None);
        assert_eq!(numeric_value(&json!(null)), None);
        assert_eq!(numeric_value(&json!(true)), None);
        assert_eq!(numeric_value(&json!({"v": 1})), None);
    }

    #[test]
    fn test_coerce_or_zero() {
        assert_eq!(coerce_or_zero(None), 0.0);
        assert_eq!(coerce_or_zero(Some(&json!(null))), 0.0);
        assert_eq!(coerce_or_zero(Some(&json!("bad"))), 0.0);
        assert_eq!(coerce_or_zero(Some(&json!(412))), 412.0);
    }
}
