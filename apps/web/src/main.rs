mod fetch;
mod state;
mod view;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use fetch::FetchApi;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use state::WebState;
use taxi_dashboard_core::{execute, DashboardRequest};
use wasm_bindgen_futures::spawn_local;

type Shared = Rc<RefCell<WebState>>;

fn main() -> io::Result<()> {
    let api = Rc::new(FetchApi::from_build_env());
    let state: Shared = Rc::new(RefCell::new(WebState::default()));

    web_sys::console::log_1(&format!("Using analytics API at {}", api.base()).into());

    let initial = state.borrow().session.initial_requests();
    for request in initial {
        dispatch(&state, &api, request);
    }

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        let api = api.clone();
        move |event| {
            let requests = state.borrow_mut().handle_key(event.code);
            for request in requests {
                dispatch(&state, &api, request);
            }
        }
    });

    terminal.draw_web(move |f| {
        let mut current = state.borrow_mut();
        current.session.tick();
        report_diagnostics(&mut current);
        view::render(&current, f);
    });

    Ok(())
}

/// Runs one request in the background and feeds its updates, and any
/// follow-ups they unlock, back into the session.
fn dispatch(state: &Shared, api: &Rc<FetchApi>, request: DashboardRequest) {
    let state = state.clone();
    let api = api.clone();

    spawn_local(async move {
        let updates = execute(api.as_ref(), request).await;
        let follow_ups: Vec<DashboardRequest> = {
            let mut current = state.borrow_mut();
            updates
                .into_iter()
                .flat_map(|update| current.session.apply(update))
                .collect()
        };
        for follow_up in follow_ups {
            dispatch(&state, &api, follow_up);
        }
    });
}

fn report_diagnostics(state: &mut WebState) {
    for diagnostic in state.session.drain_diagnostics() {
        web_sys::console::error_1(
            &format!("Error loading {}: {}", diagnostic.source, diagnostic.message).into(),
        );
    }
}
