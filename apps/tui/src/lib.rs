// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod http;
pub mod terminal;
pub mod ui;

pub use config::AppConfig;
pub use http::HttpApi;
