use serde::{Deserialize, Serialize};

use crate::models::Stadium;

/// An NCAA Men's Basketball team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "TeamID")]
    pub team_id: i32,
    /// Abbreviation of the team (e.g. SMU, TTU), used to reference the team in
    /// API endpoints
    #[serde(rename = "Key", deserialize_with = "crate::models::non_empty_string")]
    pub key: String,
    #[serde(rename = "Active")]
    pub active: bool,
    /// Unique across all sports and leagues covered by the provider
    #[serde(rename = "GlobalTeamID")]
    pub global_team_id: i32,
    #[serde(rename = "School", default)]
    pub school: Option<String>,
    /// The mascot of the team (e.g. Mustangs, Owls)
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "ApRank", default)]
    pub ap_rank: Option<i32>,
    #[serde(rename = "Wins", default)]
    pub wins: Option<i32>,
    #[serde(rename = "Losses", default)]
    pub losses: Option<i32>,
    #[serde(rename = "ConferenceWins", default)]
    pub conference_wins: Option<i32>,
    #[serde(rename = "ConferenceLosses", default)]
    pub conference_losses: Option<i32>,
    #[serde(rename = "ConferenceID", default)]
    pub conference_id: Option<i32>,
    #[serde(rename = "Conference", default)]
    pub conference: Option<String>,
    #[serde(rename = "TeamLogoUrl", default)]
    pub team_logo_url: Option<String>,
    #[serde(rename = "ShortDisplayName", default)]
    pub short_display_name: Option<String>,
    /// The team's home stadium, embedded in the response when known
    #[serde(rename = "Stadium", default)]
    pub stadium: Option<Stadium>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_FIXTURE: &str = r#"{
        "TeamID": 1,
        "Key": "SMU",
        "Active": true,
        "School": "SMU",
        "Name": "Mustangs",
        "ApRank": null,
        "Wins": 12,
        "Losses": 3,
        "ConferenceWins": 2,
        "ConferenceLosses": 1,
        "GlobalTeamID": 60000001,
        "ConferenceID": 1,
        "Conference": "American Athletic",
        "TeamLogoUrl": "https://s3-us-west-2.amazonaws.com/static.fantasydata.com/logos/ncaa/1.png",
        "ShortDisplayName": "SMU",
        "Stadium": {
            "StadiumID": 101,
            "Active": true,
            "Name": "Moody Coliseum",
            "City": "Dallas",
            "State": "TX",
            "Capacity": 7000
        }
    }"#;

    #[test]
    fn test_team_full_decode() {
        let team: Team = serde_json::from_str(FULL_FIXTURE).unwrap();
        assert_eq!(team.team_id, 1);
        assert_eq!(team.key, "SMU");
        assert!(team.active);
        assert_eq!(team.global_team_id, 60000001);
        assert_eq!(team.school.as_deref(), Some("SMU"));
        assert_eq!(team.name.as_deref(), Some("Mustangs"));
        assert!(team.ap_rank.is_none());
        assert_eq!(team.wins, Some(12));
        assert_eq!(team.losses, Some(3));
        assert_eq!(team.conference_wins, Some(2));
        assert_eq!(team.conference_losses, Some(1));
        assert_eq!(team.conference_id, Some(1));
        assert_eq!(team.conference.as_deref(), Some("American Athletic"));
        assert_eq!(team.short_display_name.as_deref(), Some("SMU"));

        let stadium = team.stadium.as_ref().unwrap();
        assert_eq!(stadium.stadium_id, 101);
        assert_eq!(stadium.name, "Moody Coliseum");
        assert_eq!(stadium.capacity, Some(7000));
    }

    #[test]
    fn test_team_without_stadium() {
        let team: Team = serde_json::from_str(
            r#"{"TeamID":2,"Key":"TEMPL","Active":true,"GlobalTeamID":60000002}"#,
        )
        .unwrap();
        assert!(team.stadium.is_none());
        assert!(team.school.is_none());
        assert!(team.wins.is_none());
    }

    #[test]
    fn test_team_missing_required_field_fails() {
        for omitted in ["TeamID", "Key", "Active", "GlobalTeamID"] {
            let mut value: serde_json::Value = serde_json::from_str(FULL_FIXTURE).unwrap();
            value.as_object_mut().unwrap().remove(omitted);
            assert!(
                serde_json::from_value::<Team>(value).is_err(),
                "decode should fail without {omitted}"
            );
        }
    }

    #[test]
    fn test_team_empty_key_fails() {
        let result = serde_json::from_str::<Team>(
            r#"{"TeamID":1,"Key":"","Active":true,"GlobalTeamID":60000001}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_team_invalid_embedded_stadium_fails() {
        // An embedded stadium missing its own required fields poisons the team
        let result = serde_json::from_str::<Team>(
            r#"{"TeamID":1,"Key":"SMU","Active":true,"GlobalTeamID":60000001,"Stadium":{"StadiumID":101}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_team_ignores_unknown_fields() {
        let team: Team = serde_json::from_str(
            r#"{"TeamID":1,"Key":"SMU","Active":true,"GlobalTeamID":60000001,"SeasonWinProbability":0.42}"#,
        )
        .unwrap();
        assert_eq!(team.key, "SMU");
    }

    #[test]
    fn test_team_equality() {
        let a: Team = serde_json::from_str(FULL_FIXTURE).unwrap();
        let b: Team = serde_json::from_str(FULL_FIXTURE).unwrap();
        assert_eq!(a, b);

        let mut different = b;
        different.ap_rank = Some(17);
        assert_ne!(a, different);
    }
}
