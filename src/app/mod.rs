//! Application setup and runtime.

use crate::{db::email_logs::EmailLogStore, http, tracker::Tracker};
use tracing::{info, warn};

pub mod config;

pub use config::Config;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
  /// `None` when persistence is switched off.
  pub store: Option<EmailLogStore>,
  pub tracker: Tracker,
}

impl AppState {
  pub fn new(store: Option<EmailLogStore>) -> Self {
    let tracker = Tracker::new(store.clone());
    Self { store, tracker }
  }
}

/// Start the HTTP server with configuration from the environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  dotenvy::dotenv().ok();
  crate::util::init_tracing();

  let config = Config::from_env()?;

  let store = if config.persist {
    let store = EmailLogStore::connect(&config.database_url).await?;
    info!("email log store:      {}", config.database_url);
    Some(store)
  } else {
    warn!("persistence disabled, tracking events are logged only");
    None
  };

  let state = AppState::new(store.clone());
  let app = http::build_router(state);

  info!("tracking endpoint:    POST http://{}/api/track-email", config.addr);
  info!("email logs:           GET  http://{}/api/email-logs", config.addr);
  info!("consultation link:    GET  http://{}/consult/home", config.addr);

  let listener = tokio::net::TcpListener::bind(config.addr).await?;
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  if let Some(store) = store {
    store.close().await;
    info!("email log store closed");
  }
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!("failed to listen for ctrl-c: {e}");
    std::future::pending::<()>().await;
  }
}
