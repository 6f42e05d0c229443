//! One async function per aggregate view, plus the request/update vocabulary
//! hosts use to run them concurrently.

use crate::api::{self, DashboardApi, FetchError};
use crate::de::normalise_date_label;
use crate::models::{
    BoroughFare, HourlyTripCount, LocationAggregate, LocationKind, PaymentType, PeakTimes,
    SummaryStats, TimeMetric, TimeMetricPoint, WeekdayInsight,
};
use crate::search::{search_trips, FilterQuery, SearchOutcome};
use crate::zones::ZoneLookup;

/// Everything the dashboard can ask the backend for.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardRequest {
    Summary,
    TopLocations { kind: LocationKind, limit: u32 },
    AvgFareByBorough,
    Insights,
    PaymentTypes,
    /// Top pickups and the zone lookup, joined before either is applied.
    PickupsAndZones { limit: u32 },
    AvailableDates,
    TripsChart { date: String },
    TimeMetric(TimeMetric),
    Search(FilterQuery),
}

impl DashboardRequest {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::TopLocations {
                kind: LocationKind::Pickup,
                ..
            } => "top pickups",
            Self::TopLocations {
                kind: LocationKind::Dropoff,
                ..
            } => "top drop offs",
            Self::AvgFareByBorough => "average fare by borough",
            Self::Insights => "insights",
            Self::PaymentTypes => "payment types",
            Self::PickupsAndZones { .. } => "pickups and zones",
            Self::AvailableDates => "available dates",
            Self::TripsChart { .. } => "trips chart",
            Self::TimeMetric(_) => "time metric",
            Self::Search(_) => "search",
        }
    }
}

/// Result of one request, ready to be applied to the session.
#[derive(Debug, Clone)]
pub enum DashboardUpdate {
    Summary(Result<SummaryStats, FetchError>),
    TopLocations {
        kind: LocationKind,
        result: Result<Vec<LocationAggregate>, FetchError>,
    },
    AvgFareByBorough(Result<Vec<BoroughFare>, FetchError>),
    Insights(Result<(PeakTimes, WeekdayInsight), FetchError>),
    PaymentTypes(Result<Vec<PaymentType>, FetchError>),
    /// Both sides of the marker join, applied together.
    PickupsAndZones {
        pickups: Result<Vec<LocationAggregate>, FetchError>,
        zones: Result<ZoneLookup, FetchError>,
    },
    AvailableDates(Result<Vec<String>, FetchError>),
    TripsChart {
        date: String,
        result: Result<Vec<HourlyTripCount>, FetchError>,
    },
    TimeMetric {
        metric: TimeMetric,
        result: Result<Vec<TimeMetricPoint>, FetchError>,
    },
    Search(SearchOutcome),
}

/// Requests issued when the dashboard first opens. None depends on another.
pub fn initial_requests(limit: u32) -> Vec<DashboardRequest> {
    vec![
        DashboardRequest::Summary,
        DashboardRequest::TopLocations {
            kind: LocationKind::Dropoff,
            limit,
        },
        DashboardRequest::AvgFareByBorough,
        DashboardRequest::Insights,
        DashboardRequest::PaymentTypes,
        DashboardRequest::PickupsAndZones { limit },
        DashboardRequest::AvailableDates,
        DashboardRequest::TimeMetric(TimeMetric::default()),
    ]
}

/// Runs one request. The returned updates are applied in order.
pub async fn execute<A: DashboardApi>(api: &A, request: DashboardRequest) -> Vec<DashboardUpdate> {
    log::debug!("Loading {}", request.name());

    match request {
        DashboardRequest::Summary => vec![DashboardUpdate::Summary(load_summary(api).await)],
        DashboardRequest::TopLocations { kind, limit } => vec![DashboardUpdate::TopLocations {
            kind,
            result: load_top_locations(api, kind, limit).await,
        }],
        DashboardRequest::AvgFareByBorough => vec![DashboardUpdate::AvgFareByBorough(
            load_avg_fare_by_borough(api).await,
        )],
        DashboardRequest::Insights => vec![DashboardUpdate::Insights(load_insights(api).await)],
        DashboardRequest::PaymentTypes => {
            vec![DashboardUpdate::PaymentTypes(load_payment_types(api).await)]
        }
        DashboardRequest::PickupsAndZones { limit } => {
            let (pickups, zones) = futures::join!(
                load_top_locations(api, LocationKind::Pickup, limit),
                load_zone_lookup(api)
            );
            vec![DashboardUpdate::PickupsAndZones { pickups, zones }]
        }
        DashboardRequest::AvailableDates => {
            vec![DashboardUpdate::AvailableDates(load_available_dates(api).await)]
        }
        DashboardRequest::TripsChart { date } => {
            let result = load_trips_over_time(api, &date).await;
            vec![DashboardUpdate::TripsChart { date, result }]
        }
        DashboardRequest::TimeMetric(metric) => vec![DashboardUpdate::TimeMetric {
            metric,
            result: load_time_metric(api, metric).await,
        }],
        DashboardRequest::Search(query) => {
            vec![DashboardUpdate::Search(search_trips(api, &query).await)]
        }
    }
}

pub async fn load_summary<A: DashboardApi>(api: &A) -> Result<SummaryStats, FetchError> {
    api.get_json(api::SUMMARY, &[]).await
}

pub async fn load_top_locations<A: DashboardApi>(
    api: &A,
    kind: LocationKind,
    limit: u32,
) -> Result<Vec<LocationAggregate>, FetchError> {
    api.get_json(
        api::TOP_LOCATIONS,
        &[
            ("type", kind.as_str().to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await
}

pub async fn load_avg_fare_by_borough<A: DashboardApi>(
    api: &A,
) -> Result<Vec<BoroughFare>, FetchError> {
    api.get_json(api::AVG_FARE_BY_BOROUGH, &[]).await
}

/// Peak hour first, then the busiest weekday. Either failing fails both.
pub async fn load_insights<A: DashboardApi>(
    api: &A,
) -> Result<(PeakTimes, WeekdayInsight), FetchError> {
    let peak = api.get_json(api::PEAK_TIMES, &[]).await?;
    let weekday = api.get_json(api::BUSIEST_WEEKDAY, &[]).await?;
    Ok((peak, weekday))
}

pub async fn load_payment_types<A: DashboardApi>(api: &A) -> Result<Vec<PaymentType>, FetchError> {
    api.get_json(api::PAYMENT_TYPES, &[]).await
}

pub async fn load_zone_lookup<A: DashboardApi>(api: &A) -> Result<ZoneLookup, FetchError> {
    let document = api.zone_document().await?;
    ZoneLookup::from_geojson_str(&document).map_err(|error| FetchError::Decode(error.to_string()))
}

/// Dates as `YYYY-MM-DD`, most recent first as sent by the server.
pub async fn load_available_dates<A: DashboardApi>(api: &A) -> Result<Vec<String>, FetchError> {
    let dates: Vec<String> = api.get_json(api::AVAILABLE_DATES, &[]).await?;
    Ok(dates.iter().map(|date| normalise_date_label(date)).collect())
}

pub async fn load_trips_over_time<A: DashboardApi>(
    api: &A,
    date: &str,
) -> Result<Vec<HourlyTripCount>, FetchError> {
    api.get_json(
        api::TRIPS_OVER_TIME,
        &[
            ("start", format!("{date} 00:00:00")),
            ("end", format!("{date} 23:59:59")),
            ("group", "hour".to_string()),
        ],
    )
    .await
}

pub async fn load_time_metric<A: DashboardApi>(
    api: &A,
    metric: TimeMetric,
) -> Result<Vec<TimeMetricPoint>, FetchError> {
    api.get_json(api::TIME_METRICS, &[("metric", metric.as_str().to_string())])
        .await
}
