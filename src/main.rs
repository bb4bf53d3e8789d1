//! AQI Predictor Dashboard server and command-line tool
//!
//! # Usage
//!
//! ```bash
//! # Serve the dashboard on the configured address
//! aqi-dashboard
//!
//! # One-shot prediction, optionally writing the report file
//! aqi-dashboard predict --model "Ridge Regression" --co 50 --no2 60 --ozone 80 --pm25 120
//!
//! # Show which model artifacts load
//! aqi-dashboard models
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: info)
//! - `AQI_CONFIG`: Path to the TOML config file
//! - `AQI_CORS_ORIGINS`: Comma-separated origins allowed for development

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use aqi_dashboard::api::{create_app, DashboardState};
use aqi_dashboard::config::DashboardConfig;
use aqi_dashboard::models::ModelRegistry;
use aqi_dashboard::{format_report, predict, PollutantReading};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "aqi-dashboard")]
#[command(about = "AQI Predictor Dashboard - regression models behind a browser UI")]
#[command(version)]
struct CliArgs {
    /// Config file (overrides AQI_CONFIG and ./aqi_config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the model artifacts (overrides models.dir)
    #[arg(long, global = true, value_name = "DIR")]
    models_dir: Option<PathBuf>,

    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long, global = true, value_name = "HOST:PORT")]
    addr: Option<String>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP server and dashboard (default)
    Serve,

    /// Predict the AQI for one reading and print the result
    Predict {
        /// Model display name, e.g. "XGBoost Regressor"
        #[arg(long)]
        model: String,
        #[arg(long)]
        co: f64,
        #[arg(long)]
        no2: f64,
        #[arg(long)]
        ozone: f64,
        #[arg(long)]
        pm25: f64,
        /// Also write the plain-text report to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// List configured models and whether their artifacts load
    Models,
}

// ============================================================================
// Configuration
// ============================================================================

fn load_config(args: &CliArgs) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DashboardConfig::load(),
    };
    if let Some(dir) = &args.models_dir {
        config.models.dir = dir.clone();
    }
    Ok(config)
}

fn load_registry(config: &DashboardConfig) -> ModelRegistry {
    let registry = ModelRegistry::load_all(&config.models.dir, &config.models.entries);
    if registry.is_empty() {
        warn!(
            dir = %config.models.dir.display(),
            "No model artifacts loaded; predictions will fail until the directory is fixed"
        );
    }
    registry
}

// ============================================================================
// Subcommands
// ============================================================================

async fn run_server(config: DashboardConfig, addr: Option<String>) -> Result<()> {
    let server_addr = addr.unwrap_or_else(|| config.server.addr.clone());

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  AQI Predictor Dashboard v{}", env!("CARGO_PKG_VERSION"));
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let registry = load_registry(&config);
    let app = create_app(DashboardState::new(registry, config));

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", server_addr))?;

    info!("✓ HTTP server listening on {}", server_addr);
    info!("🎯 Dashboard available at: http://{}", server_addr);

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await;

    match result {
        Ok(()) => {
            info!("✓ Graceful shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!("Server error: {}", e);
            Err(anyhow::anyhow!("HTTP server error: {}", e))
        }
    }
}

fn run_predict(
    config: &DashboardConfig,
    model: &str,
    reading: PollutantReading,
    report_path: Option<PathBuf>,
) -> Result<()> {
    let registry = load_registry(config);
    let result = predict(&registry, model, &reading)?;

    println!(
        "{model}: predicted AQI {:.2} - {} {}",
        result.value,
        result.category.label(),
        result.category.glyph()
    );
    println!("{}", result.category.advisory());

    for p in reading.above_input_range(&config.inputs) {
        println!(
            "note: {} = {} is above the dashboard range (0-{})",
            p.label(),
            reading.value(p),
            config.inputs.range_for(p).max
        );
    }

    if let Some(path) = report_path {
        std::fs::write(&path, format_report(model, &reading, &result))
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn run_models(config: &DashboardConfig) {
    let registry = load_registry(config);
    println!("Models in {}:", config.models.dir.display());
    for status in registry.statuses() {
        match (status.loaded, status.algorithm, &status.reason) {
            (true, Some(algorithm), _) => {
                println!("  ✓ {:<20} {}", status.name, algorithm);
            }
            (_, _, Some(reason)) => println!("  ✗ {:<20} {}", status.name, reason),
            _ => println!("  ✗ {}", status.name),
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    match args.command {
        None | Some(SubCommand::Serve) => run_server(config, args.addr).await,
        Some(SubCommand::Predict {
            model,
            co,
            no2,
            ozone,
            pm25,
            report,
        }) => {
            let reading = PollutantReading::new(co, no2, ozone, pm25)?;
            run_predict(&config, &model, reading, report)
        }
        Some(SubCommand::Models) => {
            run_models(&config);
            Ok(())
        }
    }
}
