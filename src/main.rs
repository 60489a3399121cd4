mod config;
mod controller;
mod dashboard;
mod error;
mod gateway;
mod model;
mod trend;

use anyhow::Result;
use chrono::SecondsFormat;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    config::Config,
    controller::DashboardController,
    dashboard::{ActiveView, DashboardState},
    error::GatewayError,
    gateway::HydroClient,
    trend::trend,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (ignore error if file absent — env vars may be set externally)
    let _ = dotenvy::dotenv();

    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Load config and wire up the dashboard
    let config = Config::from_env()?;
    let client = HydroClient::new(&config)?;

    let mut state = DashboardState::new();
    state.set_unit_id(config.unit_id.clone());
    let mut controller = DashboardController::new(client, state);

    println!("HydroSense Monitor ({})", config.base_url);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = signal::ctrl_c() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };

        match line.trim() {
            "" => {}
            "all" => {
                let outcome = controller.show_all().await;
                report(outcome, controller.state());
            }
            "alerts" => {
                let outcome = controller.show_alerts().await;
                report(outcome, controller.state());
            }
            "send" => {
                let outcome = controller.send_random().await;
                report(outcome, controller.state());
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            cmd => {
                if let Some(unit_id) = cmd.strip_prefix("unit ") {
                    controller.set_unit_id(unit_id.trim());
                    println!("Unit set to {:?}", controller.state().unit_id());
                } else {
                    println!("Unknown command: {cmd:?}");
                    print_help();
                }
            }
        }
    }

    println!("Bye");
    Ok(())
}

/// Render on success; keep the previous table on screen and report the
/// failure otherwise.
fn report(outcome: Result<(), GatewayError>, state: &DashboardState) {
    match outcome {
        Ok(()) => render(state),
        Err(e) => {
            error!(error = %e, "Dashboard action failed");
            println!("error: {e}");
        }
    }
}

fn render(state: &DashboardState) {
    if let Some(classification) = state.last_classification() {
        println!("Last classification: {classification}");
    }

    let readings = state.active_readings();
    let label = match state.active_view() {
        ActiveView::All => "all readings",
        ActiveView::AlertsOnly => "alerts only",
    };

    if readings.is_empty() {
        println!("({label}: nothing to show)");
        return;
    }

    println!("[{label}]");
    println!(
        "{:<25} {:>7}   {:>6} {:>6}  {}",
        "Timestamp", "pH", "Temp", "EC", "Status"
    );
    for (idx, reading) in readings.iter().enumerate() {
        println!(
            "{:<25} {:>7} {} {:>6} {:>6}  {}",
            reading
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            reading.values.ph,
            trend(readings, idx).glyph(),
            reading.values.temperature,
            reading.values.conductivity,
            reading.classification,
        );
    }
}

fn print_help() {
    println!("Commands: all | alerts | send | unit <id> | help | quit");
}
