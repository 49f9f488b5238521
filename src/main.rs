//! Campus engine HTTP service.
//!
//! Environment:
//! - `CAMPUS_ENGINE_CONFIG`: policy directory (default `./config/default`)
//! - `CAMPUS_ENGINE_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter

use std::process::ExitCode;

use campus_engine::api::{AppState, create_router};
use campus_engine::config::ConfigLoader;
use campus_engine::telemetry::init_tracing;
use tracing::{error, info};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config_dir =
        std::env::var("CAMPUS_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("CAMPUS_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load policy configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        institution = %config.institution().name,
        policy_version = %config.institution().version,
        annual_quota = config.leave_policy().annual_quota,
        monthly_cap = config.leave_policy().monthly_cap,
        "Policy configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %addr, "Campus engine listening");
    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
