//! Deserialization helpers for Slack's boolean `ok` discriminant.

use serde::de::{Deserialize, Deserializer, Error};

/// Accept only `true`, so that a struct tagged with this can't accidentally
/// deserialize from an error response.
pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b {
            Ok(b)
        } else {
            Err(Error::custom("invalid bool: false"))
        }
    })
}

/// The inverse of [only_true], for error responses.
pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b {
            Err(Error::custom("invalid bool: true"))
        } else {
            Ok(b)
        }
    })
}

#[cfg(test)]
mod tests {
    #[derive(Debug, PartialEq, Eq, serde::Deserialize)]
    struct T {
        #[serde(deserialize_with = "super::only_true")]
        val: bool,
    }

    #[derive(Debug, PartialEq, Eq, serde::Deserialize)]
    struct F {
        #[serde(deserialize_with = "super::only_false")]
        val: bool,
    }

    #[test]
    fn test_only_true() {
        assert_eq!(
            serde_json::from_str::<T>(r#"{"val": true}"#).unwrap(),
            T { val: true },
        );

        assert!(serde_json::from_str::<T>(r#"{"val": false}"#).is_err());
    }

    #[test]
    fn test_only_false() {
        assert_eq!(
            serde_json::from_str::<F>(r#"{"val": false}"#).unwrap(),
            F { val: false },
        );

        assert!(serde_json::from_str::<F>(r#"{"val": true}"#).is_err());
    }
}
