use crate::app::state::{App, SearchFocus};
use crossterm::event::KeyCode;
use taxi_dashboard_core::cycle::{wrap_decrement, wrap_increment, wrap_step};
use taxi_dashboard_core::search::{SearchField, SearchMethod};
use taxi_dashboard_core::toggle::ClickTarget;

/// Method picker entries: "no method" followed by every method.
pub const METHOD_CHOICES: usize = SearchMethod::ALL.len() + 1;

pub fn method_for_choice(index: usize) -> Option<SearchMethod> {
    index
        .checked_sub(1)
        .and_then(|index| SearchMethod::ALL.get(index).copied())
}

/// Rows the cursor can visit for the current method.
pub fn focus_order(app: &App) -> Vec<SearchFocus> {
    std::iter::once(SearchFocus::Method)
        .chain(
            app.session
                .search
                .visible_fields()
                .iter()
                .map(|field| SearchFocus::Field(*field)),
        )
        .chain(std::iter::once(SearchFocus::Submit))
        .collect()
}

/// Returns whether the key was used by the form.
pub fn handle_search_input(app: &mut App, key: KeyCode) -> bool {
    if app.session.dropdown.is_open() {
        handle_dropdown_input(app, key);
        return true;
    }

    match key {
        KeyCode::Up | KeyCode::Down => {
            move_focus(app, key == KeyCode::Down);
            return true;
        }
        KeyCode::Enter if app.search_focus == SearchFocus::Method => {
            app.session.dropdown.click(ClickTarget::Trigger);
            return true;
        }
        KeyCode::Enter => {
            app.submit_search();
            return true;
        }
        _ => {}
    }

    match app.search_focus {
        SearchFocus::Method => match key {
            KeyCode::Left => choose_method(app, wrap_decrement(app.method_index, METHOD_CHOICES)),
            KeyCode::Right => choose_method(app, wrap_increment(app.method_index, METHOD_CHOICES)),
            _ => return false,
        },
        SearchFocus::Field(field) => return handle_field_input(app, field, key),
        SearchFocus::Submit => return false,
    }
    true
}

fn handle_dropdown_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.method_index = wrap_decrement(app.method_index, METHOD_CHOICES),
        KeyCode::Down => app.method_index = wrap_increment(app.method_index, METHOD_CHOICES),
        KeyCode::Enter => {
            choose_method(app, app.method_index);
            app.session.dropdown.close();
        }
        _ => app.session.dropdown.click(ClickTarget::Outside),
    }
}

fn handle_field_input(app: &mut App, field: SearchField, key: KeyCode) -> bool {
    match key {
        KeyCode::Left | KeyCode::Right if field == SearchField::PaymentType => {
            cycle_payment(app, key == KeyCode::Right);
        }
        KeyCode::Char(ch) => app.session.search.field_mut(field).push(ch),
        KeyCode::Backspace => {
            app.session.search.field_mut(field).pop();
        }
        KeyCode::Esc => app.search_focus = SearchFocus::Method,
        _ => return false,
    }
    true
}

fn choose_method(app: &mut App, index: usize) {
    app.method_index = index;
    app.session.search.select_method(method_for_choice(index));
    app.search_focus = SearchFocus::Method;
}

fn move_focus(app: &mut App, forward: bool) {
    let order = focus_order(app);
    let current = order
        .iter()
        .position(|focus| *focus == app.search_focus)
        .unwrap_or(0);
    let next = wrap_step(current, order.len(), forward);
    app.search_focus = order.get(next).copied().unwrap_or(SearchFocus::Method);
}

/// Steps through the payment types loaded from the server.
fn cycle_payment(app: &mut App, forward: bool) {
    let options = app.session.payment_types.options().len();
    let current = app.session.payment_types.selected_index();
    let next = wrap_step(current, options, forward);
    if let Some(option) = app.session.payment_types.select(next) {
        app.session.search.payment_type_id = option.value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::handle_input;
    use crate::app::input::tests::app;
    use taxi_dashboard_core::models::PaymentType;
    use taxi_dashboard_core::toggle::Section;
    use taxi_dashboard_core::DashboardUpdate;

    fn search_app() -> App {
        let mut app = app();
        app.session.navigate(Section::Search);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_input(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn choosing_a_method_shows_only_its_fields() {
        let mut app = search_app();
        handle_input(&mut app, KeyCode::Enter);
        assert!(app.session.dropdown.is_open());

        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.session.search.method(), Some(SearchMethod::Fare));
        assert_eq!(
            focus_order(&app),
            [
                SearchFocus::Method,
                SearchFocus::Field(SearchField::MinFare),
                SearchFocus::Field(SearchField::MaxFare),
                SearchFocus::Submit,
            ]
        );
    }

    #[test]
    fn stray_key_closes_dropdown_without_choosing() {
        let mut app = search_app();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Up);
        assert!(app.session.dropdown.is_open());

        handle_input(&mut app, KeyCode::Char('x'));

        assert!(!app.session.dropdown.is_open());
        assert_eq!(app.session.search.method(), None);
        assert_eq!(app.search_focus, SearchFocus::Method);
    }

    #[test]
    fn typing_q_in_a_field_does_not_quit() {
        let mut app = search_app();
        handle_input(&mut app, KeyCode::Right);
        handle_input(&mut app, KeyCode::Down);
        type_text(&mut app, "q1");

        assert!(app.running);
        assert_eq!(app.session.search.start_date, "q1");
    }

    #[test]
    fn submit_without_method_raises_notice() {
        let mut app = search_app();
        handle_input(&mut app, KeyCode::Up);
        assert_eq!(app.search_focus, SearchFocus::Submit);

        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session.notice.as_deref(),
            Some("Please select a search method.")
        );
        assert_eq!(app.actions.in_flight(), 0);
    }

    #[tokio::test]
    async fn valid_distance_search_is_dispatched() {
        let mut app = search_app();
        choose_method(&mut app, 4);
        handle_input(&mut app, KeyCode::Down);
        type_text(&mut app, "5");
        handle_input(&mut app, KeyCode::Down);
        type_text(&mut app, "5");
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.session.notice, None);
        assert_eq!(app.actions.in_flight(), 1);
    }

    #[test]
    fn payment_field_cycles_server_options() {
        let mut app = search_app();
        app.apply(DashboardUpdate::PaymentTypes(Ok(vec![PaymentType {
            payment_type_id: "2".to_string(),
            description: "Cash".to_string(),
        }])));
        choose_method(&mut app, 2);
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Right);

        assert_eq!(app.session.search.payment_type_id, "2");
    }
}
