// App module for the taxi dashboard
// Holds the session, the request dispatcher and key handling

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, SearchFocus};
