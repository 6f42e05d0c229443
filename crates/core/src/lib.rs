//! Taxi trip dashboard: aggregate fetchers, zone lookup, pickup markers,
//! search pipeline and the session that holds it all together. Front ends
//! provide a [`DashboardApi`] and draw the session however they like.

pub mod animation;
pub mod api;
pub mod charts;
pub mod cycle;
pub mod de;
pub mod fetchers;
pub mod format;
pub mod markers;
pub mod models;
pub mod search;
pub mod session;
pub mod toggle;
pub mod view;
pub mod zones;

#[cfg(test)]
mod testing;

pub use api::{DashboardApi, FetchError};
pub use fetchers::{execute, initial_requests, DashboardRequest, DashboardUpdate};
pub use session::{CounterTiming, DashboardSession, Diagnostic};
