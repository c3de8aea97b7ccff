//! Typed async client for the sportsdata.io NCAA Men's Basketball (CBB) V3 API.
//!
//! Every endpoint is exposed as one method on [`CbbApiClient`], returning
//! immutable typed records decoded from the API's JSON. The subscription key
//! is attached to every request; 404 responses are not errors but a typed
//! absence (`None` for single-resource lookups, an empty `Vec` for
//! collections). Timestamps in responses are naive US Eastern wall-clock
//! times on the wire and surface as UTC instants.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use sportsdata_cbb::{ApiError, CbbApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     let client = CbbApiClient::new("https://api.sportsdata.io", "my-subscription-key")?;
//!
//!     if let Some(season) = client.current_season().await? {
//!         println!("current season: {}", season.season);
//!     }
//!
//!     for conference in client.league_hierarchy().await? {
//!         println!("{} ({} teams)", conference.name, conference.teams.len());
//!     }
//!
//!     let date = NaiveDate::from_ymd_opt(2020, 2, 8).unwrap();
//!     for game in client.player_game_stats_by_date(date).await? {
//!         println!("{:?} vs {:?}", game.home_team(), game.away_team());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod constants;
pub mod date_format;
pub mod error;
pub mod models;

// Re-export commonly used types for convenience
pub use api::CbbApiClient;
pub use error::ApiError;
pub use models::{Conference, Player, PlayerGame, Season, Stadium, Team};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
