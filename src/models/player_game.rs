use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stats for one player in one game, or a projection for a game that has not
/// started yet. Both the stats and the projection endpoints return this shape.
///
/// Timestamps arrive as naive US Eastern wall-clock times and are stored as
/// UTC instants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerGame {
    /// The unique ID of the stat line
    #[serde(rename = "StatID")]
    pub stat_id: i32,
    #[serde(rename = "TeamID", default)]
    pub team_id: Option<i32>,
    #[serde(rename = "GlobalTeamID", default)]
    pub global_team_id: Option<i32>,
    #[serde(rename = "GameID", default)]
    pub game_id: Option<i32>,
    #[serde(rename = "GlobalGameID", default)]
    pub global_game_id: Option<i32>,
    #[serde(rename = "PlayerID", default)]
    pub player_id: Option<i32>,
    /// 1=Regular Season, 2=Preseason, 3=Postseason, 4=Offseason, 5=AllStar
    #[serde(rename = "SeasonType", default)]
    pub season_type: Option<i32>,
    #[serde(rename = "Season", default)]
    pub season: Option<i32>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Key/abbreviation of the player's team
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    /// Position for this game or season. Possible values: C, F, FC, G, GF, PF, PG, SF, SG
    #[serde(rename = "Position", default)]
    pub position: Option<String>,
    /// Probable, Questionable, Doubtful, Out
    #[serde(rename = "InjuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(rename = "InjuryBodyPart", default)]
    pub injury_body_part: Option<String>,
    #[serde(
        rename = "InjuryStartDate",
        default,
        with = "crate::date_format::flexible_date"
    )]
    pub injury_start_date: Option<NaiveDate>,
    #[serde(rename = "InjuryNotes", default)]
    pub injury_notes: Option<String>,
    #[serde(rename = "OpponentID", default)]
    pub opponent_id: Option<i32>,
    #[serde(rename = "GlobalOpponentID", default)]
    pub global_opponent_id: Option<i32>,
    /// Key/abbreviation of the opponent
    #[serde(rename = "Opponent", default)]
    pub opponent: Option<String>,
    #[serde(rename = "OpponentRank", default)]
    pub opponent_rank: Option<i32>,
    #[serde(rename = "OpponentPositionRank", default)]
    pub opponent_position_rank: Option<i32>,
    /// When the game starts, as an absolute instant
    #[serde(
        rename = "DateTime",
        default,
        with = "crate::date_format::eastern_datetime"
    )]
    pub date_time: Option<DateTime<Utc>>,
    /// Raw home/away indicator. Valid values: HOME, AWAY
    #[serde(rename = "HomeOrAway", default)]
    pub home_or_away: Option<String>,
    #[serde(rename = "IsGameOver", default)]
    pub is_game_over: bool,
    /// When this record was last updated, as an absolute instant
    #[serde(
        rename = "Updated",
        default,
        with = "crate::date_format::eastern_datetime"
    )]
    pub updated: Option<DateTime<Utc>>,
    #[serde(rename = "Games", default)]
    pub games: Option<i32>,
    #[serde(rename = "FanDuelPosition", default)]
    pub fan_duel_position: Option<String>,
    #[serde(rename = "DraftKingsPosition", default)]
    pub draft_kings_position: Option<String>,
    #[serde(rename = "YahooPosition", default)]
    pub yahoo_position: Option<String>,
}

impl PlayerGame {
    /// Whether the player's team was at home, derived from the home/away
    /// indicator (case-insensitive). Absent when the indicator is absent.
    pub fn is_home(&self) -> Option<bool> {
        self.home_or_away
            .as_deref()
            .map(|side| side.eq_ignore_ascii_case("HOME"))
    }

    /// Key of the home team in this matchup
    pub fn home_team(&self) -> Option<&str> {
        if self.is_home()? {
            self.team.as_deref()
        } else {
            self.opponent.as_deref()
        }
    }

    /// Key of the away team in this matchup
    pub fn away_team(&self) -> Option<&str> {
        if self.is_home()? {
            self.opponent.as_deref()
        } else {
            self.team.as_deref()
        }
    }
}
