//! Required-parameter validation.
//!
//! Every operation validates its parameters in a fixed declared order before
//! building a request, so a missing field fails fast with the field's
//! human-readable label and no HTTP activity. Two message templates apply:
//! one for a parameter that was never supplied, one for a parameter supplied
//! blank.

use crate::error::CmciError;

/// Checks a required string parameter, returning its value.
///
/// `None` means the caller never supplied the parameter; a present but
/// all-whitespace value counts as blank. Call sites chain these with `?` in
/// the operation's declared field order.
pub fn required<'a>(value: Option<&'a str>, label: &'static str) -> Result<&'a str, CmciError> {
    match value {
        None => Err(CmciError::MissingParameter { label }),
        Some(v) if v.trim().is_empty() => Err(CmciError::BlankParameter { label }),
        Some(v) => Ok(v),
    }
}

/// Checks a required boolean parameter, returning its value.
pub fn required_flag(value: Option<bool>, label: &'static str) -> Result<bool, CmciError> {
    value.ok_or(CmciError::MissingParameter { label })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_names_the_field() {
        let err = required(None, "CICS Program name").unwrap_err();
        assert_eq!(err.to_string(), "CICS Program name is required");
    }

    #[test]
    fn blank_value_uses_the_blank_template() {
        let err = required(Some(""), "CICS Program name").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required parameter 'CICS Program name' must not be blank"
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let err = required(Some("   "), "CICS Region name").unwrap_err();
        assert!(matches!(err, CmciError::BlankParameter { .. }));
    }

    #[test]
    fn present_value_passes_through_unchanged() {
        assert_eq!(required(Some("PGM1"), "CICS Program name").unwrap(), "PGM1");
    }

    #[test]
    fn missing_flag_names_the_field() {
        let err = required_flag(None, "CICS web service validation flag").unwrap_err();
        assert_eq!(
            err.to_string(),
            "CICS web service validation flag is required"
        );
    }

    #[test]
    fn present_flag_passes_through() {
        assert!(required_flag(Some(true), "flag").unwrap());
        assert!(!required_flag(Some(false), "flag").unwrap());
    }
}
