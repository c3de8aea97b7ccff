use serde::{Deserialize, Serialize};

use crate::models::Team;

/// An NCAA Men's Basketball conference and its member teams, as returned by
/// the league hierarchy endpoint. Teams keep the order the API sent them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conference {
    #[serde(rename = "ConferenceID")]
    pub conference_id: i32,
    #[serde(rename = "Name", deserialize_with = "crate::models::non_empty_string")]
    pub name: String,
    #[serde(rename = "Teams", default)]
    pub teams: Vec<Team>,
}
