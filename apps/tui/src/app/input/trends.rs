use crate::app::state::App;
use crossterm::event::KeyCode;
use taxi_dashboard_core::cycle::wrap_step;
use taxi_dashboard_core::models::TimeMetric;

/// Left/Right pick the day for the hourly chart, Up/Down the metric.
pub fn handle_trends_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Right => {
            let dates = app.session.dates.options().len();
            let current = app.session.dates.selected_index();
            let index = wrap_step(current, dates, key == KeyCode::Right);
            if let Some(request) = app.session.select_date(index) {
                app.dispatch(request);
            }
        }
        KeyCode::Up | KeyCode::Down => {
            let metrics = TimeMetric::ALL.len();
            let current = app.session.metric.index();
            let index = wrap_step(current, metrics, key == KeyCode::Down);
            if let Some(request) = TimeMetric::from_index(index)
                .and_then(|metric| app.session.select_metric(metric))
            {
                app.dispatch(request);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::app::input::handle_input;
    use crate::app::input::tests::app;
    use crossterm::event::KeyCode;
    use taxi_dashboard_core::models::TimeMetric;
    use taxi_dashboard_core::toggle::Section;
    use taxi_dashboard_core::DashboardUpdate;

    #[tokio::test]
    async fn metric_change_dispatches_a_request() {
        let mut app = app();
        app.session.navigate(Section::Trends);

        handle_input(&mut app, KeyCode::Down);

        assert_eq!(app.session.metric, TimeMetric::Fare);
        assert_eq!(app.actions.in_flight(), 1);
    }

    #[tokio::test]
    async fn date_change_dispatches_its_chart() {
        let mut app = app();
        app.session.navigate(Section::Trends);
        app.session.apply(DashboardUpdate::AvailableDates(Ok(vec![
            "2024-01-31".to_string(),
            "2024-01-30".to_string(),
        ])));

        handle_input(&mut app, KeyCode::Right);

        assert_eq!(
            app.session.dates.selected().map(|option| option.value.as_str()),
            Some("2024-01-30")
        );
        assert_eq!(app.actions.in_flight(), 1);
    }

    #[test]
    fn no_dates_means_no_request() {
        let mut app = app();
        app.session.navigate(Section::Trends);
        handle_input(&mut app, KeyCode::Left);
        assert_eq!(app.actions.in_flight(), 0);
    }
}
