use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use taxi_dashboard_core::view::{TableRegion, TableRow};
use taxi_dashboard_core::DashboardSession;

use crate::app::{handle_input, App};
use crate::ui;

/// Run the dashboard without a UI: load everything once, print it, exit.
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.load();
    while let Some(batch) = app.actions.next().await {
        for update in batch {
            app.apply(update);
        }
    }
    while app.session.tick() {}

    let stats = build_headless_stats(&app.session, app.actions.api().base());
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nTaxi Trip Analytics");
    println!("===================");
    println!("API: {}", stats.api_base);
    println!("Generated: {}", stats.generated_at);

    println!("\nSummary:");
    for (label, value) in &stats.summary {
        println!("- {label}: {value}");
    }

    println!("\nInsights:");
    println!("- Peak hour: {}", stats.peak_hour);
    println!("- Busiest day: {}", stats.busiest_day);
    println!("- Average daily trips: {}", stats.avg_daily_trips);

    for (title, rows) in [
        ("Top Pickups", &stats.top_pickups),
        ("Top Drop offs", &stats.top_dropoffs),
        ("Average Fare by Borough", &stats.borough_fares),
    ] {
        println!("\n{title}:");
        for row in rows {
            println!("- {}", row.join(" | "));
        }
    }

    println!("\nMap markers placed: {}", stats.markers_placed);
    println!("Available dates: {}", stats.available_dates);

    if !stats.errors.is_empty() {
        println!("\nErrors:");
        for error in &stats.errors {
            println!("- {error}");
        }
    }
}

pub fn build_headless_stats(session: &DashboardSession, api_base: &str) -> HeadlessStats {
    HeadlessStats {
        api_base: api_base.to_string(),
        generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        summary: session
            .cards
            .cards()
            .iter()
            .map(|card| (card.kind.label().to_string(), session.cards.text(card.kind).to_string()))
            .collect(),
        peak_hour: session.insights.peak_hour.clone(),
        busiest_day: session.insights.busiest_day.clone(),
        avg_daily_trips: session.insights.avg_daily_trips.clone(),
        top_pickups: table_rows(&session.top_pickups),
        top_dropoffs: table_rows(&session.top_dropoffs),
        borough_fares: table_rows(&session.borough_fares),
        markers_placed: session.map.layer.len(),
        available_dates: session.dates.options().len(),
        errors: session
            .diagnostics()
            .map(|diagnostic| format!("{}: {}", diagnostic.source, diagnostic.message))
            .collect(),
    }
}

/// Placeholder rows print as their message.
fn table_rows(table: &TableRegion) -> Vec<Vec<String>> {
    table
        .rows()
        .iter()
        .map(|row| match row {
            TableRow::Cells(cells) => cells.clone(),
            TableRow::Placeholder { text, .. } => vec![text.clone()],
        })
        .collect()
}

#[derive(Debug, serde::Serialize)]
pub struct HeadlessStats {
    pub api_base: String,
    pub generated_at: String,
    pub summary: Vec<(String, String)>,
    pub peak_hour: String,
    pub busiest_day: String,
    pub avg_daily_trips: String,
    pub top_pickups: Vec<Vec<String>>,
    pub top_dropoffs: Vec<Vec<String>>,
    pub borough_fares: Vec<Vec<String>>,
    pub markers_placed: usize,
    pub available_dates: usize,
    pub errors: Vec<String>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    app.load();

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(width, _)) => {
                    app.session.menu.on_resize(width >= ui::WIDE_LAYOUT);
                }
                Ok(_) | Err(_) => {
                    // Ignore other events
                }
            }
        }

        // Let spawned requests make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxi_dashboard_core::api::FetchError;
    use taxi_dashboard_core::models::{LocationAggregate, LocationKind};
    use taxi_dashboard_core::DashboardUpdate;

    #[test]
    fn headless_stats_report_rows_and_errors() {
        let mut session = DashboardSession::default();
        session.apply(DashboardUpdate::TopLocations {
            kind: LocationKind::Pickup,
            result: Ok(vec![LocationAggregate {
                zone: "JFK Airport".to_string(),
                trip_count: 12_500,
            }]),
        });
        session.apply(DashboardUpdate::TopLocations {
            kind: LocationKind::Dropoff,
            result: Ok(Vec::new()),
        });
        session.apply(DashboardUpdate::Insights(Err(FetchError::Status { status: 500 })));

        let stats = build_headless_stats(&session, "http://127.0.0.1:5000");

        assert_eq!(stats.top_pickups, [vec!["JFK Airport".to_string(), "12,500".to_string()]]);
        assert_eq!(stats.top_dropoffs, [vec!["No Top Drop off Data Available".to_string()]]);
        assert_eq!(stats.peak_hour, "Unavailable");
        assert_eq!(stats.errors, ["insights: server responded with HTTP 500".to_string()]);
        assert_eq!(stats.summary.len(), 5);
    }

    #[test]
    fn headless_stats_serialise() {
        let stats = build_headless_stats(&DashboardSession::default(), "http://api");
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["api_base"], "http://api");
        assert!(json["generated_at"].as_str().is_some_and(|at| at.ends_with("UTC")));
        assert_eq!(json["summary"][0][1], "--");
    }
}
