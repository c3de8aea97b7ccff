use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS;
use crate::date_format::to_date_path_param;
use crate::error::ApiError;
use crate::models::{Conference, Player, PlayerGame, Season, Stadium, Team};

use super::fetch_utils::{fetch, fetch_list, fetch_optional};
use super::http_client::create_http_client;
use super::urls::{
    build_current_season_url, build_games_in_progress_url, build_league_hierarchy_url,
    build_player_game_projections_by_date_url, build_player_game_projections_by_player_url,
    build_player_game_stats_by_date_url, build_player_game_stats_by_player_url, build_player_url,
    build_players_by_team_url, build_players_url, build_stadiums_url, build_teams_url,
};

/// Client for the sportsdata.io NCAA Men's Basketball (CBB) V3 API.
///
/// Every request is a GET carrying the subscription key header. Lookups of a
/// single resource return `Ok(None)` when the API reports 404; collection
/// lookups return an empty `Vec` instead. Any other non-2xx status is an
/// [`ApiError::UnexpectedStatus`].
///
/// The client is immutable once constructed and cheap to clone; clones share
/// the underlying connection pool and may be used concurrently.
#[derive(Debug, Clone)]
pub struct CbbApiClient {
    client: Client,
    base_url: String,
}

impl CbbApiClient {
    /// Creates a client with the default request timeout.
    ///
    /// Fails immediately, before any network activity, if the base URL or API
    /// key is empty.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, api_key, DEFAULT_HTTP_TIMEOUT_SECONDS)
    }

    /// Creates a client with an explicit request timeout in seconds.
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.trim().is_empty() {
            return Err(ApiError::config_error("Base API URL must be non-empty"));
        }
        if api_key.trim().is_empty() {
            return Err(ApiError::config_error("API key must be non-empty"));
        }

        let client = create_http_client(&api_key, timeout_seconds)?;
        let base_url = base_url.trim_end_matches('/').to_string();
        debug!("Created CBB API client for {base_url}");

        Ok(Self { client, base_url })
    }

    /// The normalized base URL this client dispatches against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true if at least one game is being played at the time of the
    /// request.
    pub async fn are_any_games_in_progress(&self) -> Result<bool, ApiError> {
        fetch(&self.client, &build_games_in_progress_url(&self.base_url)).await
    }

    /// Returns the current season, or `None` if there is no current season.
    pub async fn current_season(&self) -> Result<Option<Season>, ApiError> {
        fetch_optional(&self.client, &build_current_season_url(&self.base_url)).await
    }

    /// Returns the conference and team hierarchy.
    pub async fn league_hierarchy(&self) -> Result<Vec<Conference>, ApiError> {
        fetch_list(&self.client, &build_league_hierarchy_url(&self.base_url)).await
    }

    /// Returns all available players.
    pub async fn players(&self) -> Result<Vec<Player>, ApiError> {
        fetch_list(&self.client, &build_players_url(&self.base_url)).await
    }

    /// Returns all available players on the team with the given key
    /// abbreviation.
    pub async fn players_by_team(&self, team_key: &str) -> Result<Vec<Player>, ApiError> {
        fetch_list(
            &self.client,
            &build_players_by_team_url(&self.base_url, team_key),
        )
        .await
    }

    /// Returns all available players on the given team. Delegates to
    /// [`players_by_team`](Self::players_by_team) with the team's key.
    pub async fn players_for_team(&self, team: &Team) -> Result<Vec<Player>, ApiError> {
        self.players_by_team(&team.key).await
    }

    /// Returns detailed information for one player, or `None` if the player is
    /// unknown.
    pub async fn player(&self, player_id: i32) -> Result<Option<Player>, ApiError> {
        fetch_optional(&self.client, &build_player_url(&self.base_url, player_id)).await
    }

    /// Returns all available stadiums.
    pub async fn stadiums(&self) -> Result<Vec<Stadium>, ApiError> {
        fetch_list(&self.client, &build_stadiums_url(&self.base_url)).await
    }

    /// Returns all available teams.
    pub async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        fetch_list(&self.client, &build_teams_url(&self.base_url)).await
    }

    /// Gets a player's game stats for the given day, or `None` if the player
    /// has no stat line for that day.
    pub async fn player_game_stats_by_player(
        &self,
        player_id: i32,
        date: NaiveDate,
    ) -> Result<Option<PlayerGame>, ApiError> {
        self.player_game_stats_by_player_raw(player_id, &to_date_path_param(date))
            .await
    }

    /// Same as [`player_game_stats_by_player`](Self::player_game_stats_by_player)
    /// but takes a pre-formatted date path parameter such as `2020-FEB-08`.
    pub async fn player_game_stats_by_player_raw(
        &self,
        player_id: i32,
        date_param: &str,
    ) -> Result<Option<PlayerGame>, ApiError> {
        fetch_optional(
            &self.client,
            &build_player_game_stats_by_player_url(&self.base_url, date_param, player_id),
        )
        .await
    }

    /// Gets all players' game stats for the given day.
    pub async fn player_game_stats_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<PlayerGame>, ApiError> {
        self.player_game_stats_by_date_raw(&to_date_path_param(date))
            .await
    }

    /// Same as [`player_game_stats_by_date`](Self::player_game_stats_by_date)
    /// but takes a pre-formatted date path parameter.
    pub async fn player_game_stats_by_date_raw(
        &self,
        date_param: &str,
    ) -> Result<Vec<PlayerGame>, ApiError> {
        fetch_list(
            &self.client,
            &build_player_game_stats_by_date_url(&self.base_url, date_param),
        )
        .await
    }

    /// Gets a player's projected game stats for the given day, or `None` if
    /// none exist.
    pub async fn player_game_projections_by_player(
        &self,
        player_id: i32,
        date: NaiveDate,
    ) -> Result<Option<PlayerGame>, ApiError> {
        self.player_game_projections_by_player_raw(player_id, &to_date_path_param(date))
            .await
    }

    /// Same as
    /// [`player_game_projections_by_player`](Self::player_game_projections_by_player)
    /// but takes a pre-formatted date path parameter.
    pub async fn player_game_projections_by_player_raw(
        &self,
        player_id: i32,
        date_param: &str,
    ) -> Result<Option<PlayerGame>, ApiError> {
        fetch_optional(
            &self.client,
            &build_player_game_projections_by_player_url(&self.base_url, date_param, player_id),
        )
        .await
    }

    /// Gets all players' projected game stats for the given day.
    pub async fn player_game_projections_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<PlayerGame>, ApiError> {
        self.player_game_projections_by_date_raw(&to_date_path_param(date))
            .await
    }

    /// Same as
    /// [`player_game_projections_by_date`](Self::player_game_projections_by_date)
    /// but takes a pre-formatted date path parameter.
    pub async fn player_game_projections_by_date_raw(
        &self,
        date_param: &str,
    ) -> Result<Vec<PlayerGame>, ApiError> {
        fetch_list(
            &self.client,
            &build_player_game_projections_by_date_url(&self.base_url, date_param),
        )
        .await
    }
}
