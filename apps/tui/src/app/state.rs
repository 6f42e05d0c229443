use crate::app::actions::AppActions;
use crate::config::AppConfig;
use crate::http::HttpApi;
use std::time::{Duration, Instant};
use taxi_dashboard_core::animation::OverlayPhase;
use taxi_dashboard_core::search::SearchField;
use taxi_dashboard_core::{CounterTiming, DashboardRequest, DashboardSession, DashboardUpdate};
use throbber_widgets_tui::ThrobberState;

/// Counters land after two seconds at the event loop's frame rate.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2_000);
pub const FRAME: Duration = Duration::from_millis(50);

/// Which row of the search form has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Method,
    Field(SearchField),
    Submit,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub session: DashboardSession,
    pub actions: AppActions,
    pub started: Instant,
    pub last_frame: Instant,
    pub throbber: ThrobberState,
    pub show_help: bool,
    pub menu_index: usize,
    pub method_index: usize,
    pub search_focus: SearchFocus,
    pub results_scroll: usize,
}

impl App {
    pub fn new(config: &AppConfig, api: HttpApi) -> Self {
        let session = DashboardSession::new(config.top_limit).with_counter_timing(
            CounterTiming::Timed {
                duration: COUNTER_DURATION,
                frame: FRAME,
            },
        );

        Self {
            running: true,
            session,
            actions: AppActions::new(api),
            started: Instant::now(),
            last_frame: Instant::now(),
            throbber: ThrobberState::default(),
            show_help: false,
            menu_index: 0,
            method_index: 0,
            search_focus: SearchFocus::Method,
            results_scroll: 0,
        }
    }

    /// Fires every page-load request.
    pub fn load(&mut self) {
        for request in self.session.initial_requests() {
            self.dispatch(request);
        }
    }

    pub fn dispatch(&mut self, request: DashboardRequest) {
        log::debug!("Dispatching {}", request.name());
        self.actions.dispatch(request);
    }

    /// Applies one update and dispatches whatever it unlocked.
    pub fn apply(&mut self, update: DashboardUpdate) {
        for follow_up in self.session.apply(update) {
            self.dispatch(follow_up);
        }
    }

    /// Per-frame housekeeping: pick up finished requests and advance the
    /// counters and spinner.
    pub fn update(&mut self) {
        for update in self.actions.drain() {
            self.apply(update);
        }

        let now = Instant::now();
        if now.duration_since(self.last_frame) < FRAME {
            return;
        }
        self.last_frame = now;

        self.session.tick();
        if self.is_loading() {
            self.throbber.calc_next();
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.actions.in_flight() > 0
    }

    pub fn intro_phase(&self) -> OverlayPhase {
        self.session.intro.phase(self.started.elapsed())
    }

    /// Validates the search form and sends it when valid.
    pub fn submit_search(&mut self) {
        if let Some(request) = self.session.submit_search() {
            self.results_scroll = 0;
            self.dispatch(request);
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
