use clap::Parser;
use color_eyre::Result;
use taxi_dashboard_tui::app::App;
use taxi_dashboard_tui::cli::CliArgs;
use taxi_dashboard_tui::config::init_app_config;
use taxi_dashboard_tui::{event, terminal, HttpApi};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let headless = args.headless || args.json || !is_terminal();

    // stderr logging only when nothing is drawn, or with --debug
    if headless || config.debug {
        pretty_env_logger::init();
    }
    log::debug!("Using analytics API at {}", config.api_base);

    let api = HttpApi::new(&config)?;
    let mut app = App::new(&config, api);

    if headless {
        return event::run_headless(&mut app, args.json).await;
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
