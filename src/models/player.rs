use serde::{Deserialize, Serialize};

/// An NCAA Men's Basketball player. Only the player ID is guaranteed; every
/// other attribute may be absent from the wire payload.
///
/// The player references their team weakly, by [`team_id`](Self::team_id) and
/// [`team`](Self::team) key, with no embedded object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "PlayerID")]
    pub player_id: i32,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "TeamID", default)]
    pub team_id: Option<i32>,
    /// Key/abbreviation of the team this player is employed by
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "Jersey", default)]
    pub jersey: Option<i32>,
    /// Eligible position(s). Possible values: C, F, F-C, G, G-F
    #[serde(rename = "Position", default)]
    pub position: Option<String>,
    /// The class of the player (Freshman, Sophomore, Junior, or Senior).
    /// Decoded from the wire property `Class`.
    #[serde(rename = "Class", default)]
    pub player_class: Option<String>,
    /// Height in inches
    #[serde(rename = "Height", default)]
    pub height: Option<i32>,
    /// Weight in pounds
    #[serde(rename = "Weight", default)]
    pub weight: Option<i32>,
    #[serde(rename = "BirthCity", default)]
    pub birth_city: Option<String>,
    #[serde(rename = "BirthState", default)]
    pub birth_state: Option<String>,
    #[serde(rename = "HighSchool", default)]
    pub high_school: Option<String>,
    /// Cross-reference player ID for the SportRadar API
    #[serde(rename = "SportRadarPlayerID", default)]
    pub sport_radar_player_id: Option<String>,
    #[serde(rename = "RotoworldPlayerID", default)]
    pub rotoworld_player_id: Option<i32>,
    #[serde(rename = "RotoWirePlayerID", default)]
    pub roto_wire_player_id: Option<i32>,
    #[serde(rename = "FantasyAlarmPlayerID", default)]
    pub fantasy_alarm_player_id: Option<i32>,
    #[serde(rename = "GlobalTeamID", default)]
    pub global_team_id: Option<i32>,
}
