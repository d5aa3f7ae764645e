//! Validation utilities for the FarmAssist dashboard
//!
//! Only presence checks and the risk score policy live here; the dashboard does not
//! validate inputs beyond that.

use chrono::NaiveDate;

// ============================================================================
// Risk Score
// ============================================================================

/// Bring a backend risk score into the [0, 1] range.
///
/// Out-of-range values are clamped, non-finite values are rejected.
pub fn normalize_risk_score(score: f64) -> Result<f64, &'static str> {
    if !score.is_finite() {
        return Err("Risk score must be a finite number");
    }
    Ok(score.clamp(0.0, 1.0))
}

/// Check if a score lies in the [0, 1] range without adjustment
pub fn is_risk_score_in_range(score: f64) -> bool {
    (0.0..=1.0).contains(&score)
}

// ============================================================================
// Form Presence Checks
// ============================================================================

/// Validate that a form field is filled in
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("This field is required");
    }
    Ok(())
}

/// Parse a date input value (`YYYY-MM-DD`)
pub fn parse_date_input(value: &str) -> Result<NaiveDate, &'static str> {
    validate_required(value)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| "Date must be YYYY-MM-DD")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_range_is_untouched() {
        assert_eq!(normalize_risk_score(0.42), Ok(0.42));
        assert_eq!(normalize_risk_score(0.0), Ok(0.0));
        assert_eq!(normalize_risk_score(1.0), Ok(1.0));
    }

    #[test]
    fn test_normalize_clamps_out_of_range() {
        assert_eq!(normalize_risk_score(-0.3), Ok(0.0));
        assert_eq!(normalize_risk_score(1.7), Ok(1.0));
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        assert!(normalize_risk_score(f64::NAN).is_err());
        assert!(normalize_risk_score(f64::INFINITY).is_err());
    }

    #[test]
    fn test_required() {
        assert!(validate_required("Aphids").is_ok());
        assert!(validate_required("").is_err());
        assert!(validate_required("   ").is_err());
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-01-16"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap())
        );
        assert!(parse_date_input("16/01/2024").is_err());
        assert!(parse_date_input("").is_err());
    }
}
