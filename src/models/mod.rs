//! Immutable domain records decoded from sportsdata.io JSON responses.
//!
//! Wire property names are UpperCamelCase and mapped per field; unknown
//! properties are ignored so new API fields never break decoding. Required
//! fields are plain values (a missing one fails the decode), optional fields
//! are `Option` and default to absent.

pub mod conference;
pub mod player;
pub mod player_game;
pub mod season;
pub mod stadium;
pub mod team;

pub use conference::Conference;
pub use player::Player;
pub use player_game::PlayerGame;
pub use season::Season;
pub use stadium::Stadium;
pub use team::Team;

use serde::{Deserialize, Deserializer, de::Error};

/// Guard for required string fields that must also be non-empty (keys and
/// names). An empty value is as malformed as a missing one.
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(D::Error::custom("required string field must be non-empty"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::non_empty_string")]
        value: String,
    }

    #[test]
    fn test_non_empty_string_accepts_value() {
        let decoded: Wrapper = serde_json::from_str(r#"{"value":"SMU"}"#).unwrap();
        assert_eq!(decoded.value, "SMU");
    }

    #[test]
    fn test_non_empty_string_rejects_empty() {
        let result = serde_json::from_str::<Wrapper>(r#"{"value":""}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("non-empty"), "unexpected error: {message}");
    }

    #[test]
    fn test_non_empty_string_rejects_missing() {
        let result = serde_json::from_str::<Wrapper>("{}");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field"), "unexpected error: {message}");
    }
}
