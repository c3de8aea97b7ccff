//! Request dispatch for the sportsdata.io CBB V3 API

pub mod urls;
mod core;
mod fetch_utils;
mod http_client;

// Re-export URL utilities
pub use urls::*;
// Re-export the API client
pub use self::core::CbbApiClient;
