//! URL building for the sportsdata.io CBB V3 endpoints.
//!
//! All paths live under the `v3/cbb` prefix. Integer ids and team keys are
//! substituted verbatim; date parameters must already be formatted with
//! [`to_date_path_param`](crate::date_format::to_date_path_param).

/// Builds the URL asking whether any games are currently in progress.
///
/// # Example
/// ```
/// use sportsdata_cbb::api::build_games_in_progress_url;
///
/// let url = build_games_in_progress_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/v3/cbb/scores/json/AreAnyGamesInProgress");
/// ```
pub fn build_games_in_progress_url(base_url: &str) -> String {
    format!("{base_url}/v3/cbb/scores/json/AreAnyGamesInProgress")
}

/// Builds the URL for the current season.
///
/// # Example
/// ```
/// use sportsdata_cbb::api::build_current_season_url;
///
/// let url = build_current_season_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/v3/cbb/scores/json/CurrentSeason");
/// ```
pub fn build_current_season_url(base_url: &str) -> String {
    format!("{base_url}/v3/cbb/scores/json/CurrentSeason")
}

/// Builds the URL for the conference and team hierarchy.
pub fn build_league_hierarchy_url(base_url: &str) -> String {
    format!("{base_url}/v3/cbb/scores/json/LeagueHierarchy")
}

/// Builds the URL listing all available players.
pub fn build_players_url(base_url: &str) -> String {
    format!("{base_url}/v3/cbb/scores/json/Players")
}

/// Builds the URL listing all available players on one team.
///
/// # Example
/// ```
/// use sportsdata_cbb::api::build_players_by_team_url;
///
/// let url = build_players_by_team_url("https://api.example.com", "SMU");
/// assert_eq!(url, "https://api.example.com/v3/cbb/scores/json/Players/SMU");
/// ```
pub fn build_players_by_team_url(base_url: &str, team_key: &str) -> String {
    format!("{base_url}/v3/cbb/scores/json/Players/{team_key}")
}

/// Builds the URL for one player's detail record.
///
/// # Example
/// ```
/// use sportsdata_cbb::api::build_player_url;
///
/// let url = build_player_url("https://api.example.com", 60007054);
/// assert_eq!(url, "https://api.example.com/v3/cbb/scores/json/Player/60007054");
/// ```
pub fn build_player_url(base_url: &str, player_id: i32) -> String {
    format!("{base_url}/v3/cbb/scores/json/Player/{player_id}")
}

/// Builds the URL listing all available stadiums.
pub fn build_stadiums_url(base_url: &str) -> String {
    format!("{base_url}/v3/cbb/scores/json/Stadiums")
}

/// Builds the URL listing all available teams.
pub fn build_teams_url(base_url: &str) -> String {
    format!("{base_url}/v3/cbb/scores/json/Teams")
}

/// Builds the URL for one player's game stats on one day.
///
/// # Example
/// ```
/// use sportsdata_cbb::api::build_player_game_stats_by_player_url;
///
/// let url = build_player_game_stats_by_player_url("https://api.example.com", "2020-FEB-08", 60008866);
/// assert_eq!(
///     url,
///     "https://api.example.com/v3/cbb/stats/json/PlayerGameStatsByPlayer/2020-FEB-08/60008866"
/// );
/// ```
pub fn build_player_game_stats_by_player_url(
    base_url: &str,
    date_param: &str,
    player_id: i32,
) -> String {
    format!("{base_url}/v3/cbb/stats/json/PlayerGameStatsByPlayer/{date_param}/{player_id}")
}

/// Builds the URL for all players' game stats on one day.
pub fn build_player_game_stats_by_date_url(base_url: &str, date_param: &str) -> String {
    format!("{base_url}/v3/cbb/stats/json/PlayerGameStatsByDate/{date_param}")
}

/// Builds the URL for one player's projected game stats on one day.
///
/// # Example
/// ```
/// use sportsdata_cbb::api::build_player_game_projections_by_player_url;
///
/// let url = build_player_game_projections_by_player_url("https://api.example.com", "2020-NOV-01", 123);
/// assert_eq!(
///     url,
///     "https://api.example.com/v3/cbb/stats/json/PlayerGameProjectionStatsByPlayer/2020-NOV-01/123"
/// );
/// ```
pub fn build_player_game_projections_by_player_url(
    base_url: &str,
    date_param: &str,
    player_id: i32,
) -> String {
    format!(
        "{base_url}/v3/cbb/stats/json/PlayerGameProjectionStatsByPlayer/{date_param}/{player_id}"
    )
}

/// Builds the URL for all players' projected game stats on one day.
pub fn build_player_game_projections_by_date_url(base_url: &str, date_param: &str) -> String {
    format!("{base_url}/v3/cbb/stats/json/PlayerGameProjectionStatsByDate/{date_param}")
}
