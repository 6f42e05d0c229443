mod navigation;
mod search;
mod trends;

use crate::app::state::App;
use crossterm::event::KeyCode;
use taxi_dashboard_core::animation::OverlayPhase;
use taxi_dashboard_core::toggle::Section;

/// Routes a key press. Overlays take keys first: intro, notice, results,
/// help, nav menu. Then the active section gets them.
pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.intro_phase() != OverlayPhase::Hidden {
        if key == KeyCode::Char('q') {
            app.quit();
        }
        app.session.intro.dismiss();
        return;
    }

    if app.session.notice.is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.session.dismiss_notice();
        }
        return;
    }

    if app.session.results.is_open() {
        handle_results_input(app, key);
        return;
    }

    if handle_help_toggle(app, key) {
        return;
    }

    if app.session.menu.is_open() {
        navigation::handle_menu_input(app, key);
        return;
    }

    if app.session.section == Section::Search && search::handle_search_input(app, key) {
        return;
    }

    if navigation::handle_global_input(app, key) {
        return;
    }

    if app.session.section == Section::Trends {
        trends::handle_trends_input(app, key);
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::Char('?') || key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    let rows = app.session.results.table.rows().len();
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.session.close_results(),
        KeyCode::Up => app.results_scroll = app.results_scroll.saturating_sub(1),
        KeyCode::Down => {
            app.results_scroll = (app.results_scroll + 1).min(rows.saturating_sub(1));
        }
        _ => {}
    }
}
