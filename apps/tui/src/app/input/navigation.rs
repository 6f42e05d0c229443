use crate::app::state::App;
use crossterm::event::KeyCode;
use taxi_dashboard_core::cycle::{wrap_decrement, wrap_increment};
use taxi_dashboard_core::toggle::{ClickTarget, Section};

/// Keys that work in every section. Returns whether the key was used.
pub fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    let sections = Section::ALL.len();
    match key {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab => {
            let next = wrap_increment(app.session.section.index(), sections);
            navigate(app, next);
        }
        KeyCode::BackTab => {
            let previous = wrap_decrement(app.session.section.index(), sections);
            navigate(app, previous);
        }
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            navigate(app, index);
        }
        KeyCode::Char('m') => {
            app.menu_index = app.session.section.index();
            app.session.menu.click(ClickTarget::Trigger);
        }
        KeyCode::Char('r') => {
            log::info!("Reloading dashboard");
            app.load();
        }
        _ => return false,
    }
    true
}

/// Collapsible section menu. Enter picks, anything else outside it closes.
pub fn handle_menu_input(app: &mut App, key: KeyCode) {
    let sections = Section::ALL.len();
    match key {
        KeyCode::Up => app.menu_index = wrap_decrement(app.menu_index, sections),
        KeyCode::Down => app.menu_index = wrap_increment(app.menu_index, sections),
        KeyCode::Enter => navigate(app, app.menu_index),
        KeyCode::Char('m') => app.session.menu.click(ClickTarget::Trigger),
        _ => app.session.menu.click(ClickTarget::Outside),
    }
}

fn navigate(app: &mut App, index: usize) {
    if let Some(section) = Section::from_index(index) {
        app.session.navigate(section);
    }
}
