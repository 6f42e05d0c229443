//! Trip search: form validation, query construction, results modal.

use chrono::NaiveDate;

use crate::api::{self, DashboardApi, FetchError};
use crate::format;
use crate::models::TripRecord;
use crate::toggle::Disclosure;
use crate::view::TableRegion;

pub const NO_RESULTS: &str = "No results found for this search.";
pub const REQUEST_ERROR: &str = "Error in the search request created. Please try again.";
pub const SEARCH_FAILED: &str = "Something went wrong while searching.";

pub const RESULT_HEADERS: [&str; 5] = ["Trip ID", "Pickup Time", "Fare", "Distance", "Passengers"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMethod {
    Date,
    Payment,
    Fare,
    Distance,
}

impl SearchMethod {
    pub const ALL: [Self; 4] = [Self::Date, Self::Payment, Self::Fare, Self::Distance];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Payment => "payment",
            Self::Fare => "fare",
            Self::Distance => "distance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Date Range",
            Self::Payment => "Payment Method",
            Self::Fare => "Fare Range",
            Self::Distance => "Distance Range",
        }
    }
}

/// A validated search. Range bounds always satisfy `min <= max`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterQuery {
    DateRange { start: NaiveDate, end: NaiveDate },
    Payment { payment_type_id: String },
    FareRange { min: f64, max: f64 },
    DistanceRange { min: f64, max: f64 },
}

impl FilterQuery {
    /// Query parameters for `/api/filter`. Date bounds cover whole days.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::DateRange { start, end } => vec![
                ("start", format!("{} 00:00:00", start.format("%Y-%m-%d"))),
                ("end", format!("{} 23:59:59", end.format("%Y-%m-%d"))),
            ],
            Self::Payment { payment_type_id } => {
                vec![("payment_type_id", payment_type_id.clone())]
            }
            Self::FareRange { min, max } => {
                vec![("min_fare", min.to_string()), ("max_fare", max.to_string())]
            }
            Self::DistanceRange { min, max } => vec![
                ("min_distance", min.to_string()),
                ("max_distance", max.to_string()),
            ],
        }
    }

    pub const fn method(&self) -> SearchMethod {
        match self {
            Self::DateRange { .. } => SearchMethod::Date,
            Self::Payment { .. } => SearchMethod::Payment,
            Self::FareRange { .. } => SearchMethod::Fare,
            Self::DistanceRange { .. } => SearchMethod::Distance,
        }
    }
}

/// Rejections raised before any request is sent. The display text is what
/// the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a search method.")]
    NoMethod,
    #[error("Please select the search start date.")]
    MissingStartDate,
    #[error("Please select the search end date.")]
    MissingEndDate,
    #[error("Please enter dates as YYYY-MM-DD.")]
    InvalidDate,
    #[error("Your Start date cannot be after the end date.")]
    StartAfterEnd,
    #[error("Please select a payment method.")]
    MissingPayment,
    #[error("Please enter both minimum and maximum fare.")]
    MissingFare,
    #[error("Minimum fare cannot be greater than maximum fare.")]
    FareInverted,
    #[error("Please enter both minimum and maximum distance.")]
    MissingDistance,
    #[error("Minimum distance cannot be greater than maximum distance.")]
    DistanceInverted,
}

/// Editable inputs of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    StartDate,
    EndDate,
    PaymentType,
    MinFare,
    MaxFare,
    MinDistance,
    MaxDistance,
}

impl SearchField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartDate => "Start date",
            Self::EndDate => "End date",
            Self::PaymentType => "Payment type",
            Self::MinFare => "Minimum fare",
            Self::MaxFare => "Maximum fare",
            Self::MinDistance => "Minimum distance",
            Self::MaxDistance => "Maximum distance",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    MethodSelected(SearchMethod),
    Dispatched(FilterQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    method: Option<SearchMethod>,
    pub start_date: String,
    pub end_date: String,
    pub payment_type_id: String,
    pub min_fare: String,
    pub max_fare: String,
    pub min_distance: String,
    pub max_distance: String,
    phase: SearchPhase,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            method: None,
            start_date: String::new(),
            end_date: String::new(),
            payment_type_id: String::new(),
            min_fare: String::new(),
            max_fare: String::new(),
            min_distance: String::new(),
            max_distance: String::new(),
            phase: SearchPhase::Idle,
        }
    }
}

impl SearchForm {
    pub const fn method(&self) -> Option<SearchMethod> {
        self.method
    }

    pub const fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn select_method(&mut self, method: Option<SearchMethod>) {
        self.method = method;
        self.phase = method.map_or(SearchPhase::Idle, SearchPhase::MethodSelected);
    }

    /// Inputs shown for the selected method; all other sections are hidden.
    pub fn visible_fields(&self) -> &'static [SearchField] {
        match self.method {
            None => &[],
            Some(SearchMethod::Date) => &[SearchField::StartDate, SearchField::EndDate],
            Some(SearchMethod::Payment) => &[SearchField::PaymentType],
            Some(SearchMethod::Fare) => &[SearchField::MinFare, SearchField::MaxFare],
            Some(SearchMethod::Distance) => &[SearchField::MinDistance, SearchField::MaxDistance],
        }
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::StartDate => &self.start_date,
            SearchField::EndDate => &self.end_date,
            SearchField::PaymentType => &self.payment_type_id,
            SearchField::MinFare => &self.min_fare,
            SearchField::MaxFare => &self.max_fare,
            SearchField::MinDistance => &self.min_distance,
            SearchField::MaxDistance => &self.max_distance,
        }
    }

    pub fn field_mut(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::StartDate => &mut self.start_date,
            SearchField::EndDate => &mut self.end_date,
            SearchField::PaymentType => &mut self.payment_type_id,
            SearchField::MinFare => &mut self.min_fare,
            SearchField::MaxFare => &mut self.max_fare,
            SearchField::MinDistance => &mut self.min_distance,
            SearchField::MaxDistance => &mut self.max_distance,
        }
    }

    /// Checks only the active method's inputs.
    pub fn validate(&self) -> Result<FilterQuery, ValidationError> {
        let method = self.method.ok_or(ValidationError::NoMethod)?;

        match method {
            SearchMethod::Date => {
                let start = self.start_date.trim();
                let end = self.end_date.trim();
                if start.is_empty() {
                    return Err(ValidationError::MissingStartDate);
                }
                if end.is_empty() {
                    return Err(ValidationError::MissingEndDate);
                }
                let start = parse_day(start)?;
                let end = parse_day(end)?;
                if start > end {
                    return Err(ValidationError::StartAfterEnd);
                }
                Ok(FilterQuery::DateRange { start, end })
            }
            SearchMethod::Payment => {
                let payment_type_id = self.payment_type_id.trim();
                if payment_type_id.is_empty() {
                    return Err(ValidationError::MissingPayment);
                }
                Ok(FilterQuery::Payment {
                    payment_type_id: payment_type_id.to_string(),
                })
            }
            SearchMethod::Fare => {
                let (min, max) = parse_range(&self.min_fare, &self.max_fare)
                    .ok_or(ValidationError::MissingFare)?;
                if min > max {
                    return Err(ValidationError::FareInverted);
                }
                Ok(FilterQuery::FareRange { min, max })
            }
            SearchMethod::Distance => {
                let (min, max) = parse_range(&self.min_distance, &self.max_distance)
                    .ok_or(ValidationError::MissingDistance)?;
                if min > max {
                    return Err(ValidationError::DistanceInverted);
                }
                Ok(FilterQuery::DistanceRange { min, max })
            }
        }
    }

    /// Validates and moves to `Dispatched` on success. On failure the form
    /// drops back to `Idle` and nothing may be sent.
    pub fn submit(&mut self) -> Result<FilterQuery, ValidationError> {
        match self.validate() {
            Ok(query) => {
                self.phase = SearchPhase::Dispatched(query.clone());
                Ok(query)
            }
            Err(error) => {
                self.phase = SearchPhase::Idle;
                Err(error)
            }
        }
    }

    /// Ready for the next search once results (or an error) came back.
    pub fn finish(&mut self) {
        self.phase = self
            .method
            .map_or(SearchPhase::Idle, SearchPhase::MethodSelected);
    }
}

fn parse_day(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

fn parse_range(min: &str, max: &str) -> Option<(f64, f64)> {
    let min = min.trim().parse::<f64>().ok().filter(|value| value.is_finite())?;
    let max = max.trim().parse::<f64>().ok().filter(|value| value.is_finite())?;
    Some((min, max))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Rows(Vec<TripRecord>),
    Empty,
    RequestRejected { status: u16 },
    Failed(String),
}

impl SearchOutcome {
    /// Message for the blocking notice, if this outcome needs one.
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Rows(_) => None,
            Self::Empty => Some(NO_RESULTS),
            Self::RequestRejected { .. } => Some(REQUEST_ERROR),
            Self::Failed(_) => Some(SEARCH_FAILED),
        }
    }
}

/// Sends one GET to the filter endpoint with exactly the query's parameters.
pub async fn search_trips<A: DashboardApi>(api: &A, query: &FilterQuery) -> SearchOutcome {
    let params = query.query_params();
    match api.get_json::<Vec<TripRecord>>(api::FILTER, &params).await {
        Ok(rows) if rows.is_empty() => SearchOutcome::Empty,
        Ok(rows) => {
            log::debug!("Search returned {} trips", rows.len());
            SearchOutcome::Rows(rows)
        }
        Err(FetchError::Status { status }) => {
            log::error!("Search request rejected with HTTP {status}");
            SearchOutcome::RequestRejected { status }
        }
        Err(error) => {
            log::error!("Search error: {error}");
            SearchOutcome::Failed(error.to_string())
        }
    }
}

/// Modal holding the row-level search results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsModal {
    pub visibility: Disclosure,
    pub table: TableRegion,
    pub trips: Vec<TripRecord>,
}

impl Default for ResultsModal {
    fn default() -> Self {
        Self {
            visibility: Disclosure::default(),
            table: TableRegion::new(&RESULT_HEADERS, NO_RESULTS),
            trips: Vec::new(),
        }
    }
}

impl ResultsModal {
    /// Fills the table and opens the modal. An empty result still opens the
    /// modal with a single "no results" row.
    pub fn show(&mut self, trips: Vec<TripRecord>) {
        self.table.fill(trips.iter().map(trip_row));
        self.trips = trips;
        self.visibility.open();
    }

    pub const fn is_open(&self) -> bool {
        self.visibility.is_open()
    }
}

pub fn trip_row(trip: &TripRecord) -> Vec<String> {
    vec![
        trip.trip_id.clone(),
        trip.pickup_datetime.clone(),
        format::currency(trip.fare_amount),
        format::miles(trip.trip_distance),
        trip.passenger_count
            .map_or_else(|| "-".to_string(), |count| count.to_string()),
    ]
}
