//! PhoneNumber value object.

use super::errors::FormatError;
use phonenumber::Mode;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number held in canonical E.164 form.
///
/// Construction parses the input without assuming a default region, so the
/// country calling code must be present. Once built, the stored string is
/// always canonical and is never normalized again.
///
/// # Example
///
/// ```
/// use userverse_models::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+1 202-555-0123").unwrap();
/// assert_eq!(phone.as_str(), "+12025550123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and normalize a raw phone number.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Unparseable` when the input is not a phone number
    /// at all and `FormatError::InvalidNumber` when it parses but is not valid
    /// for its country.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let parsed = phonenumber::parse(None, raw).map_err(|source| {
            tracing::debug!(input = raw, error = %source, "Rejected unparseable phone number");
            FormatError::Unparseable {
                input: raw.to_string(),
                source,
            }
        })?;

        if !phonenumber::is_valid(&parsed) {
            tracing::debug!(input = raw, "Rejected invalid phone number");
            return Err(FormatError::InvalidNumber(raw.to_string()));
        }

        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Normalize an optional raw phone number to E.164.
///
/// Absent and empty input are returned unchanged.
pub fn validate_phone_number_format(phone: Option<&str>) -> Result<Option<String>, FormatError> {
    match phone {
        None => Ok(None),
        Some("") => Ok(Some(String::new())),
        Some(raw) => PhoneNumber::parse(raw).map(|p| Some(p.into_inner())),
    }
}

/// Deserialize an optional phone field, treating `null` and `""` as absent.
///
/// Use together with `#[serde(default)]` so a missing key is also absent.
pub fn deserialize_optional_phone<'de, D>(deserializer: D) -> Result<Option<PhoneNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => PhoneNumber::parse(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with normalization
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_canonical_is_unchanged() {
        let phone = PhoneNumber::parse("+12025550123").unwrap();
        assert_eq!(phone.as_str(), "+12025550123");
    }

    #[test]
    fn test_phone_strips_separators() {
        let phone = PhoneNumber::parse("+1 (202) 555-0123").unwrap();
        assert_eq!(phone.as_str(), "+12025550123");
    }

    #[test]
    fn test_phone_uk_number() {
        let phone = PhoneNumber::parse("+441234567890").unwrap();
        assert_eq!(phone.as_str(), "+441234567890");
    }

    #[test]
    fn test_phone_normalization_is_idempotent() {
        let once = PhoneNumber::parse("+1 202 555 0123").unwrap();
        let twice = PhoneNumber::parse(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_phone_rejects_without_country_code() {
        assert!(PhoneNumber::parse("123").is_err());
    }

    #[test]
    fn test_phone_rejects_non_numeric() {
        let err = PhoneNumber::parse("not-a-number").unwrap_err();
        assert!(matches!(err, FormatError::Unparseable { .. }));
    }

    #[test]
    fn test_validate_passes_through_absent_and_empty() {
        assert_eq!(validate_phone_number_format(None).unwrap(), None);
        assert_eq!(
            validate_phone_number_format(Some("")).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn test_validate_formats_to_e164() {
        assert_eq!(
            validate_phone_number_format(Some("+12025550123")).unwrap(),
            Some("+12025550123".to_string())
        );
        assert!(validate_phone_number_format(Some("123")).is_err());
        assert!(validate_phone_number_format(Some("not-a-number")).is_err());
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::parse("+12025550123").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+12025550123\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional_phone")]
        phone: Option<PhoneNumber>,
    }

    #[test]
    fn test_optional_phone_field() {
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert!(h.phone.is_none());

        let h: Holder = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert!(h.phone.is_none());

        let h: Holder = serde_json::from_str(r#"{"phone": ""}"#).unwrap();
        assert!(h.phone.is_none());

        let h: Holder = serde_json::from_str(r#"{"phone": "+1 202 555 0123"}"#).unwrap();
        assert_eq!(h.phone.unwrap().as_str(), "+12025550123");

        let result: Result<Holder, _> = serde_json::from_str(r#"{"phone": "123"}"#);
        assert!(result.is_err());
    }
}
