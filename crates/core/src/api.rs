//! The seam between the dashboard and the analytics backend.
//!
//! Hosts implement [`DashboardApi`] on top of whatever HTTP stack they have
//! (reqwest in the terminal, `fetch` in the browser); everything above this
//! module is written against the trait.

use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TOP_LIMIT: u32 = 10;

pub const SUMMARY: &str = "/api/summary";
pub const TOP_LOCATIONS: &str = "/api/top-locations";
pub const AVG_FARE_BY_BOROUGH: &str = "/api/avg-fare-by-borough";
pub const FILTER: &str = "/api/filter";
pub const PEAK_TIMES: &str = "/api/peak-times";
pub const BUSIEST_WEEKDAY: &str = "/api/busiest-weekday";
pub const PAYMENT_TYPES: &str = "/api/payment-types";
pub const AVAILABLE_DATES: &str = "/api/available-dates";
pub const TRIPS_OVER_TIME: &str = "/api/trips-over-time";
pub const TIME_METRICS: &str = "/api/time-metrics";

pub type Query = [(&'static str, String)];

/// Failures at the HTTP boundary. Every variant is local to the widget that
/// issued the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },

    /// The body was not the JSON shape we expected.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// Issues one GET against `path` (relative to the API base) and decodes
    /// the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Query)
        -> Result<T, FetchError>;

    /// Loads the raw zone-boundary GeoJSON document.
    async fn zone_document(&self) -> Result<String, FetchError>;
}

/// Joins a base URL and an endpoint path. Query strings are left to the
/// host's HTTP stack.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
