//! # Waybill - Shipment tracking core
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring            │
//! │    │                                                            │
//! │    ├── Loads: WaybillConfig ($WAYBILL_CONFIG or demo seed)      │
//! │    ├── Creates: InMemory{Shipment,Center,Route}Repository       │
//! │    ├── Creates: Shipment/Center/Route services (usecase)        │
//! │    └── Runs: seed → dispatch routes → complete routes → report  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod replay;

use std::path::PathBuf;

use anyhow::Context;
use shared::config::WaybillConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use replay::{Waybill, DEMO_SEED};

/// Environment variable naming the JSON configuration file
const CONFIG_ENV: &str = "WAYBILL_CONFIG";

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Waybill - shipment tracking core");

    let mut waybill = Waybill::in_memory();
    waybill.seed(&config).context("seeding repositories")?;

    let delivered = waybill.run_routes().context("running routes")?;
    info!(delivered = delivered.len(), "Replay finished");

    let report = waybill.report()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_config() -> anyhow::Result<WaybillConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            WaybillConfig::from_file(&path)
                .with_context(|| format!("loading configuration from {}", path.display()))
        }
        None => Ok(WaybillConfig::from_json(DEMO_SEED)?),
    }
}
