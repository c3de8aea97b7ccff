use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One season of NCAA Men's Basketball.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "Season")]
    pub season: i32,
    #[serde(rename = "StartYear")]
    pub start_year: i32,
    #[serde(rename = "EndYear")]
    pub end_year: i32,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(
        rename = "RegularSeasonStartDate",
        default,
        with = "crate::date_format::flexible_date"
    )]
    pub regular_season_start_date: Option<NaiveDate>,
    #[serde(
        rename = "PostSeasonStartDate",
        default,
        with = "crate::date_format::flexible_date"
    )]
    pub post_season_start_date: Option<NaiveDate>,
    /// The value to pass as the season parameter in subsequent API calls,
    /// e.g. `2020REG`.
    #[serde(rename = "ApiSeason", default)]
    pub api_season: Option<String>,
}
