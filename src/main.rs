//! Payroll Engine HTTP server.
//!
//! Loads the rules snapshot named by `PAYROLL_RULES_PATH` and serves the
//! preview and compliance endpoints on `PAYROLL_BIND_ADDR`.

use std::env;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::RulesLoader;
use tracing::info;

const DEFAULT_RULES_PATH: &str = "./config/rules/kenya_2025.yaml";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("payroll_engine=info".parse()?),
        )
        .init();

    let rules_path = env::var("PAYROLL_RULES_PATH").unwrap_or_else(|_| DEFAULT_RULES_PATH.into());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let rules = RulesLoader::load(&rules_path)?;
    info!(
        version = rules.version(),
        effective_from = %rules.effective_from(),
        "Rules snapshot ready"
    );

    let app = create_router(AppState::new(rules));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
