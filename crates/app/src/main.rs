//! Gantry Admin Console - client bootstrap
//!
//! Wires the client core together from environment configuration, then
//! probes the backend: a health check and the first-run initialization
//! check. UI frontends embed the same wiring and replace the tracing
//! notifier and dialog observer with their own collaborators.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gantry_application::ports::{Notifier, SessionUi, TokenStore};
use gantry_application::{
    ApiClient, AuthFailureCoordinator, ClientConfig, SessionEvents, SessionService,
};
use gantry_infrastructure::{FileTokenStore, ReqwestTransport, TracingNotifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        "starting Gantry console client v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_root()
    );

    let state_dir = std::env::var("GANTRY_STATE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("gantry"));

    let transport = Arc::new(ReqwestTransport::new(&config)?);
    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&state_dir));
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let dialogs: Arc<dyn SessionUi> = Arc::new(SessionEvents::new());
    let recovery = Arc::new(AuthFailureCoordinator::new(
        tokens.clone(),
        dialogs.clone(),
        notifier.clone(),
        &config,
    ));
    let client = Arc::new(ApiClient::new(
        transport,
        tokens.clone(),
        notifier.clone(),
        recovery,
    ));

    match client.get("/sys/health").await {
        Ok(_) => tracing::info!("backend healthy"),
        Err(err) => tracing::warn!(%err, "health check failed"),
    }

    let sessions = SessionService::new(client, tokens, notifier, dialogs);
    match sessions.check_initialized().await {
        Ok(true) => tracing::info!("system initialized"),
        Ok(false) => tracing::info!("system awaiting first-run setup"),
        Err(err) => tracing::warn!(%err, "initialization check failed"),
    }

    Ok(())
}
