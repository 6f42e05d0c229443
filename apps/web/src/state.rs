use ratzilla::event::KeyCode;
use taxi_dashboard_core::api::DEFAULT_TOP_LIMIT;
use taxi_dashboard_core::cycle::{wrap_decrement, wrap_increment, wrap_step};
use taxi_dashboard_core::models::TimeMetric;
use taxi_dashboard_core::search::{SearchField, SearchMethod};
use taxi_dashboard_core::toggle::Section;
use taxi_dashboard_core::{CounterTiming, DashboardRequest, DashboardSession};

/// Search form row under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Method,
    Field(SearchField),
    Submit,
}

/// Browser-side page state: the shared session plus the search cursor.
pub struct WebState {
    pub session: DashboardSession,
    pub focus: Focus,
}

impl Default for WebState {
    fn default() -> Self {
        Self {
            session: DashboardSession::new(DEFAULT_TOP_LIMIT)
                .with_counter_timing(CounterTiming::Stepped),
            focus: Focus::Method,
        }
    }
}

impl WebState {
    /// Applies a key press. Returns the requests it triggered.
    pub fn handle_key(&mut self, key: KeyCode) -> Vec<DashboardRequest> {
        if self.session.notice.is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                self.session.dismiss_notice();
            }
            return Vec::new();
        }

        if self.session.results.is_open() {
            if matches!(key, KeyCode::Esc) {
                self.session.close_results();
            }
            return Vec::new();
        }

        // Any key dismisses the splash
        self.session.intro.dismiss();

        if self.session.section == Section::Search {
            if let Some(requests) = self.handle_search_key(&key) {
                return requests;
            }
        }

        match key {
            KeyCode::Char(ch @ '1'..='5') => {
                let index = ch as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.session.navigate(section);
                }
                Vec::new()
            }
            KeyCode::Tab => {
                let next = wrap_increment(self.session.section.index(), Section::ALL.len());
                if let Some(section) = Section::from_index(next) {
                    self.session.navigate(section);
                }
                Vec::new()
            }
            _ if self.session.section == Section::Trends => self.handle_trends_key(key),
            _ => Vec::new(),
        }
    }

    fn handle_trends_key(&mut self, key: KeyCode) -> Vec<DashboardRequest> {
        let dates = self.session.dates.options().len();
        let date = self.session.dates.selected_index();
        let metrics = TimeMetric::ALL.len();
        let metric = self.session.metric.index();

        let request = match key {
            KeyCode::Left if dates > 0 => self.session.select_date(wrap_decrement(date, dates)),
            KeyCode::Right if dates > 0 => self.session.select_date(wrap_increment(date, dates)),
            KeyCode::Up => TimeMetric::from_index(wrap_decrement(metric, metrics))
                .and_then(|metric| self.session.select_metric(metric)),
            KeyCode::Down => TimeMetric::from_index(wrap_increment(metric, metrics))
                .and_then(|metric| self.session.select_metric(metric)),
            _ => None,
        };
        request.into_iter().collect()
    }

    /// `None` when the key was not used by the form.
    fn handle_search_key(&mut self, key: &KeyCode) -> Option<Vec<DashboardRequest>> {
        let forward = matches!(key, KeyCode::Down | KeyCode::Right);
        match (key, self.focus) {
            (KeyCode::Up | KeyCode::Down, _) => self.move_focus(forward),
            (KeyCode::Enter, _) => return Some(self.session.submit_search().into_iter().collect()),
            (KeyCode::Left | KeyCode::Right, Focus::Method) => {
                self.cycle_method(forward);
            }
            (KeyCode::Left | KeyCode::Right, Focus::Field(SearchField::PaymentType)) => {
                self.cycle_payment(forward);
            }
            (KeyCode::Char(ch), Focus::Field(field)) => {
                self.session.search.field_mut(field).push(*ch);
            }
            (KeyCode::Backspace, Focus::Field(field)) => {
                self.session.search.field_mut(field).pop();
            }
            (KeyCode::Esc, Focus::Field(_) | Focus::Submit) => self.focus = Focus::Method,
            _ => return None,
        }
        Some(Vec::new())
    }

    fn focus_order(&self) -> Vec<Focus> {
        std::iter::once(Focus::Method)
            .chain(
                self.session
                    .search
                    .visible_fields()
                    .iter()
                    .map(|field| Focus::Field(*field)),
            )
            .chain(std::iter::once(Focus::Submit))
            .collect()
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|focus| *focus == self.focus).unwrap_or(0);
        let next = wrap_step(current, order.len(), forward);
        self.focus = order.get(next).copied().unwrap_or(Focus::Method);
    }

    /// Cycles through "no method" and every method.
    fn cycle_method(&mut self, forward: bool) {
        let choices = SearchMethod::ALL.len() + 1;
        let current = self
            .session
            .search
            .method()
            .and_then(|method| SearchMethod::ALL.iter().position(|m| *m == method))
            .map_or(0, |index| index + 1);
        let next = wrap_step(current, choices, forward);
        let method = next
            .checked_sub(1)
            .and_then(|index| SearchMethod::ALL.get(index).copied());
        self.session.search.select_method(method);
    }

    fn cycle_payment(&mut self, forward: bool) {
        let options = self.session.payment_types.options().len();
        if options == 0 {
            return;
        }
        let current = self.session.payment_types.selected_index();
        let next = wrap_step(current, options, forward);
        if let Some(option) = self.session.payment_types.select(next) {
            self.session.search.payment_type_id = option.value.clone();
        }
    }
}
