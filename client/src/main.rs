//! Console entry-point: wires settings, adapters, and services, then runs
//! the interactive loop.

use std::sync::Arc;

use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use reqwest::Url;
use tokio::io::BufReader;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use client::config::ClientSettings;
use client::domain::record_sync::RecordSyncController;
use client::domain::session_gate::SessionGate;
use client::inbound::console::Console;
use client::outbound::graphql::GraphQlHttpStore;
use client::outbound::identity::HttpIdentityProvider;
use client::outbound::token::AccessTokenFile;

/// Application bootstrap.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Logs go to stderr so they never interleave with the board itself.
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ClientSettings::load().wrap_err("failed to load client settings")?;
    let api_endpoint = Url::parse(&settings.api_endpoint)
        .wrap_err_with(|| format!("invalid api endpoint: {}", settings.api_endpoint))?;
    let auth_endpoint = Url::parse(&settings.auth_endpoint)
        .wrap_err_with(|| format!("invalid auth endpoint: {}", settings.auth_endpoint))?;

    let timeout = settings.request_timeout();
    let store = GraphQlHttpStore::new(
        api_endpoint,
        settings.api_key.clone(),
        AccessTokenFile::new(settings.token_path()),
        timeout,
    )
    .wrap_err("failed to build the record-store client")?;
    let provider = HttpIdentityProvider::new(
        auth_endpoint,
        AccessTokenFile::new(settings.token_path()),
        timeout,
    )
    .wrap_err("failed to build the identity client")?;

    let mut console = Console::new(
        SessionGate::new(Arc::new(provider)),
        RecordSyncController::new(Arc::new(store)),
    );
    console.initialise().await;
    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .wrap_err("console io failed")
}
