//! Page-lifetime dashboard state.
//!
//! [`DashboardSession`] is the only writer of every render target. Hosts run
//! [`DashboardRequest`]s however they like and hand the resulting
//! [`DashboardUpdate`]s to [`DashboardSession::apply`], in whatever order they
//! complete.

use std::collections::VecDeque;
use std::time::Duration;

use crate::animation::{CardKind, CounterTween, IntroOverlay};
use crate::api::{FetchError, DEFAULT_TOP_LIMIT};
use crate::charts::{self, ChartSpec};
use crate::fetchers::{initial_requests, DashboardRequest, DashboardUpdate};
use crate::format;
use crate::markers::{MapState, MarkerJoin};
use crate::models::{LocationAggregate, LocationKind, TimeMetric};
use crate::search::{ResultsModal, SearchForm, SearchOutcome};
use crate::toggle::{Disclosure, Section};
use crate::view::{
    InsightsPanel, SelectControl, SelectOption, SummaryCards, TableRegion, UNAVAILABLE,
};
use crate::zones::ZoneLookup;

pub const LOCATION_HEADERS: [&str; 2] = ["Zone", "Trips"];
pub const BOROUGH_HEADERS: [&str; 2] = ["Borough", "Average Fare"];
pub const NO_PICKUPS: &str = "No Top Pickups Data Available";
pub const NO_DROPOFFS: &str = "No Top Drop off Data Available";
pub const NO_BOROUGHS: &str = "No Average Fare by Borough Data Available";
pub const PAYMENT_PROMPT: &str = "Select Payment Method";

const DIAGNOSTICS_CAPACITY: usize = 64;

/// How the summary counters advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterTiming {
    /// A hundredth of the target per frame.
    #[default]
    Stepped,
    /// Reach the target after `duration`, one step every `frame`.
    Timed { duration: Duration, frame: Duration },
}

impl CounterTiming {
    fn tween(self, card: CardKind, target: f64) -> CounterTween {
        match self {
            Self::Stepped => CounterTween::new(card, target),
            Self::Timed { duration, frame } => CounterTween::timed(card, target, duration, frame),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub source: &'static str,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DashboardSession {
    pub top_limit: u32,
    pub counter_timing: CounterTiming,
    pub cards: SummaryCards,
    pub top_pickups: TableRegion,
    pub top_dropoffs: TableRegion,
    pub borough_fares: TableRegion,
    pub insights: InsightsPanel,
    pub payment_types: SelectControl,
    pub dates: SelectControl,
    pub hourly_chart: Option<ChartSpec>,
    pub metric: TimeMetric,
    pub metric_chart: Option<ChartSpec>,
    pub map: MapState,
    pub join: MarkerJoin,
    pub search: SearchForm,
    pub results: ResultsModal,
    pub results_chart: Option<ChartSpec>,
    pub notice: Option<String>,
    pub section: Section,
    pub menu: Disclosure,
    pub dropdown: Disclosure,
    pub intro: IntroOverlay,
    diagnostics: VecDeque<Diagnostic>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_LIMIT)
    }
}

impl DashboardSession {
    pub fn new(top_limit: u32) -> Self {
        Self {
            top_limit,
            counter_timing: CounterTiming::default(),
            cards: SummaryCards::default(),
            top_pickups: TableRegion::new(&LOCATION_HEADERS, NO_PICKUPS),
            top_dropoffs: TableRegion::new(&LOCATION_HEADERS, NO_DROPOFFS),
            borough_fares: TableRegion::new(&BOROUGH_HEADERS, NO_BOROUGHS),
            insights: InsightsPanel::default(),
            payment_types: SelectControl::default(),
            dates: SelectControl::default(),
            hourly_chart: None,
            metric: TimeMetric::default(),
            metric_chart: None,
            map: MapState::default(),
            join: MarkerJoin::default(),
            search: SearchForm::default(),
            results: ResultsModal::default(),
            results_chart: None,
            notice: None,
            section: Section::default(),
            menu: Disclosure::default(),
            dropdown: Disclosure::default(),
            intro: IntroOverlay::default(),
            diagnostics: VecDeque::with_capacity(DIAGNOSTICS_CAPACITY),
        }
    }

    #[must_use]
    pub const fn with_counter_timing(mut self, timing: CounterTiming) -> Self {
        self.counter_timing = timing;
        self
    }

    pub fn initial_requests(&self) -> Vec<DashboardRequest> {
        initial_requests(self.top_limit)
    }

    /// Writes one completed load into its region. Returns the loads that
    /// depend on it.
    pub fn apply(&mut self, update: DashboardUpdate) -> Vec<DashboardRequest> {
        match update {
            DashboardUpdate::Summary(Ok(summary)) => {
                self.cards.load(&summary);
                let timing = self.counter_timing;
                self.cards
                    .start_counters(|card, target| timing.tween(card, target));
            }
            DashboardUpdate::Summary(Err(error)) => self.record("summary", &error),

            DashboardUpdate::TopLocations { kind, result } => self.apply_locations(kind, result),

            DashboardUpdate::AvgFareByBorough(Ok(rows)) => {
                self.borough_fares.fill(
                    rows.iter()
                        .map(|row| vec![row.borough_name.clone(), format::currency(row.avg_fare)]),
                );
            }
            DashboardUpdate::AvgFareByBorough(Err(error)) => {
                self.record("average fare by borough", &error);
            }

            DashboardUpdate::Insights(Ok((peak, weekday))) => {
                self.insights.peak_hour = format::hour_12(peak.peak_hour.peak_hour);
                self.insights.busiest_day = weekday.weekday;
                self.insights.avg_daily_trips = format::rounded_thousands(weekday.avg_daily_trips);
            }
            DashboardUpdate::Insights(Err(error)) => {
                self.record("insights", &error);
                UNAVAILABLE.clone_into(&mut self.insights.peak_hour);
                UNAVAILABLE.clone_into(&mut self.insights.busiest_day);
            }

            DashboardUpdate::PaymentTypes(Ok(types)) => {
                let prompt = SelectOption {
                    value: String::new(),
                    label: PAYMENT_PROMPT.to_string(),
                };
                self.payment_types
                    .replace(std::iter::once(prompt).chain(types.into_iter().map(|payment| {
                        SelectOption {
                            value: payment.payment_type_id,
                            label: payment.description,
                        }
                    }))
                    .collect());
            }
            DashboardUpdate::PaymentTypes(Err(error)) => self.record("payment types", &error),

            DashboardUpdate::PickupsAndZones { pickups, zones } => {
                self.resolve_pickups(pickups);
                self.resolve_zones(zones);
                self.render_markers();
            }

            DashboardUpdate::AvailableDates(Ok(dates)) => {
                self.dates.replace(
                    dates
                        .into_iter()
                        .map(|date| SelectOption {
                            value: date.clone(),
                            label: date,
                        })
                        .collect(),
                );
                if let Some(first) = self.dates.selected() {
                    return vec![DashboardRequest::TripsChart {
                        date: first.value.clone(),
                    }];
                }
            }
            DashboardUpdate::AvailableDates(Err(error)) => self.record("available dates", &error),

            DashboardUpdate::TripsChart { date, result } => {
                let is_current = self
                    .dates
                    .selected()
                    .is_some_and(|option| option.value == date);
                match result {
                    Ok(counts) if is_current => {
                        self.hourly_chart = Some(charts::hourly_chart(&counts));
                    }
                    Ok(_) => log::debug!("Dropping stale trips chart for {date}"),
                    Err(error) => self.record("trips chart", &error),
                }
            }

            DashboardUpdate::TimeMetric { metric, result } => match result {
                Ok(points) if metric == self.metric => {
                    self.metric_chart = Some(charts::metric_chart(metric, &points));
                }
                Ok(_) => log::debug!("Dropping stale {} series", metric.as_str()),
                Err(error) => self.record("time metric", &error),
            },

            DashboardUpdate::Search(outcome) => self.apply_search(outcome),
        }

        Vec::new()
    }

    fn apply_locations(
        &mut self,
        kind: LocationKind,
        result: Result<Vec<LocationAggregate>, FetchError>,
    ) {
        match (kind, result) {
            (LocationKind::Pickup, result) => {
                self.resolve_pickups(result);
                self.render_markers();
            }
            (LocationKind::Dropoff, Ok(rows)) => {
                self.top_dropoffs.fill(rows.iter().map(location_row));
            }
            (LocationKind::Dropoff, Err(error)) => self.record("top drop offs", &error),
        }
    }

    /// Pickups side of the marker join. Also fills the pickups table.
    fn resolve_pickups(&mut self, result: Result<Vec<LocationAggregate>, FetchError>) {
        match result {
            Ok(rows) => {
                self.top_pickups.fill(rows.iter().map(location_row));
                self.join.resolve_pickups(rows);
            }
            Err(error) => {
                self.record("top pickups", &error);
                self.join.pickups_failed();
            }
        }
    }

    fn resolve_zones(&mut self, result: Result<ZoneLookup, FetchError>) {
        match result {
            Ok(zones) => {
                log::debug!("Zone lookup holds {} zones", zones.len());
                self.join.resolve_zones(zones);
            }
            Err(error) => {
                self.record("zone lookup", &error);
                self.join.zones_failed();
            }
        }
    }

    fn apply_search(&mut self, outcome: SearchOutcome) {
        self.search.finish();
        self.notice = outcome.notice().map(str::to_string);

        match outcome {
            SearchOutcome::Rows(trips) => {
                self.results_chart = Some(charts::fare_distance_scatter(&trips));
                self.results.show(trips);
            }
            SearchOutcome::Empty => {
                self.results_chart = None;
                self.results.show(Vec::new());
            }
            SearchOutcome::RequestRejected { status } => {
                self.push_diagnostic("search", format!("request rejected with HTTP {status}"));
            }
            SearchOutcome::Failed(message) => self.push_diagnostic("search", message),
        }
    }

    fn render_markers(&mut self) {
        if let Some(placed) = self.join.render_if_ready(&mut self.map) {
            log::debug!(
                "Placed {placed} pickup markers (redraw {})",
                self.map.redraws
            );
        }
    }

    /// Validates the form. On failure the message becomes the notice and no
    /// request is produced.
    pub fn submit_search(&mut self) -> Option<DashboardRequest> {
        match self.search.submit() {
            Ok(query) => {
                self.notice = None;
                Some(DashboardRequest::Search(query))
            }
            Err(error) => {
                self.notice = Some(error.to_string());
                None
            }
        }
    }

    /// Selects a date by index. Returns its chart request when the choice
    /// changed.
    pub fn select_date(&mut self, index: usize) -> Option<DashboardRequest> {
        if index == self.dates.selected_index() {
            return None;
        }
        let option = self.dates.select(index)?;
        Some(DashboardRequest::TripsChart {
            date: option.value.clone(),
        })
    }

    pub fn select_metric(&mut self, metric: TimeMetric) -> Option<DashboardRequest> {
        if metric == self.metric {
            return None;
        }
        self.metric = metric;
        Some(DashboardRequest::TimeMetric(metric))
    }

    /// Shows a section and closes the collapsible menu.
    pub fn navigate(&mut self, section: Section) {
        self.section = section;
        self.menu.close();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn close_results(&mut self) {
        self.results.visibility.close();
    }

    /// Advances the summary counters one frame. Returns whether any is still
    /// running.
    pub fn tick(&mut self) -> bool {
        self.cards.tick()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Hands the buffered diagnostics to the host and empties the buffer.
    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain(..).collect()
    }

    fn record(&mut self, source: &'static str, error: &FetchError) {
        log::error!("Error loading {source}: {error}");
        self.push_diagnostic(source, error.to_string());
    }

    fn push_diagnostic(&mut self, source: &'static str, message: String) {
        if self.diagnostics.len() == DIAGNOSTICS_CAPACITY {
            self.diagnostics.pop_front();
        }
        self.diagnostics.push_back(Diagnostic { source, message });
    }
}

fn location_row(row: &LocationAggregate) -> Vec<String> {
    vec![row.zone.clone(), format::thousands(row.trip_count)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BoroughFare, HourlyTripCount, PaymentType, PeakHour, PeakTimes, SummaryStats,
        WeekdayInsight,
    };
    use crate::search::{SearchMethod, NO_RESULTS, REQUEST_ERROR};
    use crate::testing::StubApi;
    use crate::view::{TableRow, PENDING};
    use crate::zones::tests::{collection, polygon_feature};
    use crate::zones::ZoneLookup;
    use futures::executor::block_on;

    fn pickups(zones: &[&str]) -> DashboardUpdate {
        DashboardUpdate::TopLocations {
            kind: LocationKind::Pickup,
            result: Ok(zones
                .iter()
                .map(|zone| LocationAggregate {
                    zone: (*zone).to_string(),
                    trip_count: 1_500,
                })
                .collect()),
        }
    }

    fn lookup() -> Result<ZoneLookup, FetchError> {
        let document = collection(&[
            polygon_feature("Midtown Center", -73.98, 40.75),
            polygon_feature("JFK Airport", -73.78, 40.64),
        ]);
        ZoneLookup::from_geojson_str(&document).map_err(|error| FetchError::Decode(error.to_string()))
    }

    fn joined(zones: &[&str], lookup: Result<ZoneLookup, FetchError>) -> DashboardUpdate {
        let DashboardUpdate::TopLocations { result, .. } = pickups(zones) else {
            unreachable!("pickups() builds a TopLocations update");
        };
        DashboardUpdate::PickupsAndZones {
            pickups: result,
            zones: lookup,
        }
    }

    fn network_error() -> FetchError {
        FetchError::Network("connection refused".to_string())
    }

    #[test]
    fn summary_fills_cards_then_counts_up() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::Summary(Ok(SummaryStats {
            total_trips: 1_234,
            avg_fare: 12.346,
            avg_distance: 3.1,
            avg_speed: 11.0,
            avg_total_amount: 18.999,
        })));

        assert!(session.cards.cards().iter().all(|card| card.is_animating()));
        assert_eq!(session.cards.text(CardKind::AvgFare), "0");

        while session.tick() {}

        assert_eq!(session.cards.text(CardKind::TotalTrips), "1,234");
        assert_eq!(session.cards.text(CardKind::AvgFare), "$12.35");
        assert_eq!(session.cards.text(CardKind::AvgDistance), "3.10 miles");
        assert_eq!(session.cards.text(CardKind::AvgSpeed), "11.00 mph");
        assert_eq!(session.cards.text(CardKind::TotalRevenue), "$19.00");
    }

    #[test]
    fn failed_summary_leaves_cards_pending() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::Summary(Err(network_error())));

        assert_eq!(session.cards.text(CardKind::TotalTrips), PENDING);
        assert_eq!(session.diagnostics().count(), 1);
    }

    #[test]
    fn empty_locations_render_a_placeholder() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::TopLocations {
            kind: LocationKind::Dropoff,
            result: Ok(Vec::new()),
        });

        assert_eq!(
            session.top_dropoffs.rows(),
            [TableRow::Placeholder {
                text: NO_DROPOFFS.to_string(),
                colspan: 2,
            }]
        );
    }

    #[test]
    fn location_rows_group_thousands() {
        let mut session = DashboardSession::default();
        session.apply(pickups(&["Astoria"]));

        assert_eq!(
            session.top_pickups.rows(),
            [TableRow::Cells(vec![
                "Astoria".to_string(),
                "1,500".to_string()
            ])]
        );
    }

    #[test]
    fn borough_fares_use_currency() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::AvgFareByBorough(Ok(vec![BoroughFare {
            borough_name: "Queens".to_string(),
            avg_fare: 21.5,
        }])));

        assert_eq!(
            session.borough_fares.rows(),
            [TableRow::Cells(vec![
                "Queens".to_string(),
                "$21.50".to_string()
            ])]
        );
    }

    #[test]
    fn one_failure_does_not_touch_other_regions() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::AvgFareByBorough(Err(network_error())));
        session.apply(pickups(&["Astoria"]));

        assert!(!session.borough_fares.is_loaded());
        assert_eq!(session.top_pickups.data_row_count(), 1);
    }

    #[test]
    fn markers_wait_for_zone_lookup() {
        let mut session = DashboardSession::default();
        session.apply(pickups(&["Midtown Center", "Nowhere", "JFK Airport"]));
        assert!(session.map.layer.is_empty());
        assert_eq!(session.map.redraws, 0);

        session.apply(joined(&["Midtown Center", "Nowhere", "JFK Airport"], lookup()));
        assert_eq!(session.map.layer.len(), 2);
        assert_eq!(session.map.redraws, 1);
    }

    #[test]
    fn joined_update_draws_the_layer_once() {
        let mut session = DashboardSession::default();
        session.apply(joined(&["JFK Airport"], lookup()));

        assert_eq!(session.map.layer.len(), 1);
        assert_eq!(session.map.redraws, 1);
        assert_eq!(session.top_pickups.data_row_count(), 1);
    }

    #[test]
    fn reload_redraws_markers_once_per_batch() {
        let api = StubApi::default()
            .respond(
                crate::api::TOP_LOCATIONS,
                r#"[{"zone": "Midtown Center", "trip_count": 12},
                    {"zone": "JFK Airport", "trip_count": 9}]"#,
            )
            .zones(Ok(collection(&[
                polygon_feature("Midtown Center", -73.98, 40.75),
                polygon_feature("JFK Airport", -73.78, 40.64),
            ])));
        let request = DashboardRequest::PickupsAndZones {
            limit: DEFAULT_TOP_LIMIT,
        };
        let mut session = DashboardSession::default();

        for update in block_on(crate::fetchers::execute(&api, request.clone())) {
            session.apply(update);
        }
        assert_eq!(session.map.redraws, 1);

        for update in block_on(crate::fetchers::execute(&api, request)) {
            session.apply(update);
        }
        assert_eq!(session.map.redraws, 2);
        assert_eq!(session.map.layer.len(), 2);
    }

    #[test]
    fn refreshed_pickups_replace_markers() {
        let mut session = DashboardSession::default();
        session.apply(joined(&["Midtown Center", "JFK Airport"], lookup()));
        session.apply(pickups(&["JFK Airport"]));

        assert_eq!(session.map.layer.len(), 1);
        assert_eq!(session.map.redraws, 2);
    }

    #[test]
    fn zone_failure_still_fills_pickups_table() {
        let mut session = DashboardSession::default();
        session.apply(joined(&["Astoria"], Err(network_error())));

        assert!(session.map.layer.is_empty());
        assert_eq!(session.top_pickups.data_row_count(), 1);
        assert_eq!(session.diagnostics().count(), 1);
    }

    #[test]
    fn pickups_failure_still_resolves_the_join() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::PickupsAndZones {
            pickups: Err(network_error()),
            zones: lookup(),
        });

        assert!(session.map.layer.is_empty());
        assert_eq!(session.map.redraws, 1);
        assert!(!session.top_pickups.is_loaded());
    }

    #[test]
    fn insights_format_hour_and_trips() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::Insights(Ok((
            PeakTimes {
                peak_hour: PeakHour { peak_hour: 18 },
            },
            WeekdayInsight {
                weekday: "Friday".to_string(),
                avg_daily_trips: 98_765.4,
            },
        ))));

        assert_eq!(session.insights.peak_hour, "6:00 PM");
        assert_eq!(session.insights.busiest_day, "Friday");
        assert_eq!(session.insights.avg_daily_trips, "98,765");
    }

    #[test]
    fn insights_failure_reads_unavailable() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::Insights(Err(FetchError::Status { status: 503 })));

        assert_eq!(session.insights.peak_hour, UNAVAILABLE);
        assert_eq!(session.insights.busiest_day, UNAVAILABLE);
    }

    #[test]
    fn payment_options_start_with_prompt() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::PaymentTypes(Ok(vec![
            PaymentType {
                payment_type_id: "1".to_string(),
                description: "Credit card".to_string(),
            },
            PaymentType {
                payment_type_id: "2".to_string(),
                description: "Cash".to_string(),
            },
        ])));

        let labels: Vec<_> = session
            .payment_types
            .options()
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, [PAYMENT_PROMPT, "Credit card", "Cash"]);
        assert_eq!(session.payment_types.options()[0].value, "");
    }

    #[test]
    fn available_dates_request_the_most_recent_chart() {
        let mut session = DashboardSession::default();
        let follow_ups = session.apply(DashboardUpdate::AvailableDates(Ok(vec![
            "2024-01-31".to_string(),
            "2024-01-30".to_string(),
        ])));

        assert_eq!(
            follow_ups,
            [DashboardRequest::TripsChart {
                date: "2024-01-31".to_string()
            }]
        );
        assert_eq!(
            session.select_date(1),
            Some(DashboardRequest::TripsChart {
                date: "2024-01-30".to_string()
            })
        );
        assert_eq!(session.select_date(1), None);
    }

    #[test]
    fn stale_trips_chart_is_dropped() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::AvailableDates(Ok(vec![
            "2024-01-31".to_string(),
            "2024-01-30".to_string(),
        ])));
        session.select_date(1);

        session.apply(DashboardUpdate::TripsChart {
            date: "2024-01-31".to_string(),
            result: Ok(vec![HourlyTripCount {
                time_label: 1,
                trip_count: 4,
            }]),
        });
        assert_eq!(session.hourly_chart, None);

        session.apply(DashboardUpdate::TripsChart {
            date: "2024-01-30".to_string(),
            result: Ok(Vec::new()),
        });
        assert_eq!(session.hourly_chart.as_ref().map(ChartSpec::len), Some(24));
    }

    #[test]
    fn metric_change_requests_new_series() {
        let mut session = DashboardSession::default();
        assert_eq!(session.select_metric(TimeMetric::Revenue), None);
        assert_eq!(
            session.select_metric(TimeMetric::Distance),
            Some(DashboardRequest::TimeMetric(TimeMetric::Distance))
        );

        session.apply(DashboardUpdate::TimeMetric {
            metric: TimeMetric::Revenue,
            result: Ok(Vec::new()),
        });
        assert_eq!(session.metric_chart, None);
    }

    #[test]
    fn invalid_search_sets_notice_without_request() {
        let mut session = DashboardSession::default();
        session.search.select_method(Some(SearchMethod::Fare));
        "50".clone_into(&mut session.search.min_fare);
        "10".clone_into(&mut session.search.max_fare);

        assert_eq!(session.submit_search(), None);
        assert_eq!(
            session.notice.as_deref(),
            Some("Minimum fare cannot be greater than maximum fare.")
        );
    }

    #[test]
    fn empty_search_opens_modal_with_placeholder() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::Search(SearchOutcome::Empty));

        assert!(session.results.is_open());
        assert_eq!(session.results.table.data_row_count(), 0);
        assert_eq!(session.notice.as_deref(), Some(NO_RESULTS));
    }

    #[test]
    fn rejected_search_reports_request_error() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::Search(SearchOutcome::RequestRejected {
            status: 400,
        }));

        assert!(!session.results.is_open());
        assert_eq!(session.notice.as_deref(), Some(REQUEST_ERROR));
    }

    #[test]
    fn diagnostics_are_bounded() {
        let mut session = DashboardSession::default();
        for _ in 0..(DIAGNOSTICS_CAPACITY + 5) {
            session.apply(DashboardUpdate::Summary(Err(network_error())));
        }

        assert_eq!(session.diagnostics().count(), DIAGNOSTICS_CAPACITY);
        assert_eq!(session.drain_diagnostics().len(), DIAGNOSTICS_CAPACITY);
        assert_eq!(session.diagnostics().count(), 0);
    }

    #[test]
    fn navigating_closes_the_menu() {
        let mut session = DashboardSession::default();
        session.menu.open();
        session.navigate(Section::Map);

        assert_eq!(session.section, Section::Map);
        assert!(!session.menu.is_open());
    }

    #[test]
    fn full_page_load_against_stub_backend() {
        let api = StubApi::default()
            .respond(
                crate::api::SUMMARY,
                r#"{"total_trips": 10, "avg_fare": "12.5", "avg_distance": 2,
                    "avg_speed": 9.5, "avg_total_amount": 15}"#,
            )
            .respond(
                crate::api::TOP_LOCATIONS,
                r#"[{"zone": "JFK Airport", "trip_count": 7}]"#,
            )
            .respond(crate::api::AVG_FARE_BY_BOROUGH, "[]")
            .respond(crate::api::PEAK_TIMES, r#"{"peak_hour": {"peak_hour": 0}}"#)
            .respond(
                crate::api::BUSIEST_WEEKDAY,
                r#"{"weekday": "Monday", "avg_daily_trips": "1234.6"}"#,
            )
            .respond(crate::api::PAYMENT_TYPES, r#"[{"payment_type_id": 1, "description": "Credit card"}]"#)
            .respond(crate::api::AVAILABLE_DATES, r#"["2024-01-31"]"#)
            .respond(crate::api::TRIPS_OVER_TIME, r#"[{"time_label": 8, "trip_count": 3}]"#)
            .respond(
                crate::api::TIME_METRICS,
                r#"[{"trip_date": "2024-01-31", "value": 100.25}]"#,
            )
            .zones(Ok(collection(&[polygon_feature("JFK Airport", -73.78, 40.64)])));

        let mut session = DashboardSession::default();
        let mut queue: VecDeque<_> = session.initial_requests().into();
        while let Some(request) = queue.pop_front() {
            for update in block_on(crate::fetchers::execute(&api, request)) {
                queue.extend(session.apply(update));
            }
        }

        assert_eq!(session.top_dropoffs.data_row_count(), 1);
        assert_eq!(session.top_pickups.data_row_count(), 1);
        assert_eq!(session.borough_fares.data_row_count(), 0);
        assert_eq!(session.insights.peak_hour, "12:00 AM");
        assert_eq!(session.insights.avg_daily_trips, "1,235");
        assert_eq!(session.payment_types.options().len(), 2);
        assert_eq!(session.map.layer.len(), 1);
        assert!(session.hourly_chart.is_some());
        assert!(session.metric_chart.is_some());
        assert_eq!(session.diagnostics().count(), 0);
    }
}
