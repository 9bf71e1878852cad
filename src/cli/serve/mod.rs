//! Serve command - runs the HTTP front end

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::infrastructure::cache::ContentCache;
use crate::infrastructure::confluence::ConfluenceClient;
use crate::infrastructure::logging::init_logging;

/// Run the server until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let state = create_app_state(&config)?;
    let app = create_router(state);

    let addr = build_socket_addr(&config)?;
    info!(
        base_url = %config.confluence.base_url,
        "Starting server on {}", addr
    );

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wires the remote client and the cache into the handler state
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = ConfluenceClient::from_config(&config.confluence)?;
    let cache = ContentCache::new(client);

    let state = AppState::new(Arc::new(cache), config.server.site_title.as_str());

    Ok(match config.server.admin_token.as_deref() {
        Some(token) if !token.is_empty() => state.with_admin_token(token),
        _ => {
            warn!("No admin token configured, admin routes are disabled");
            state
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfluenceConfig;

    #[test]
    fn test_build_socket_addr() {
        let config = AppConfig::default();
        let addr = build_socket_addr(&config).unwrap();

        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_build_socket_addr_rejects_hostname() {
        let mut config = AppConfig::default();
        config.server.host = "not an ip".to_string();

        assert!(build_socket_addr(&config).is_err());
    }

    #[test]
    fn test_create_app_state_requires_connection_settings() {
        assert!(create_app_state(&AppConfig::default()).is_err());
    }

    #[test]
    fn test_create_app_state() {
        let config = AppConfig {
            confluence: ConfluenceConfig::new("https://wiki.example.com", "alice", "secret"),
            ..Default::default()
        };

        let state = create_app_state(&config).unwrap();

        assert_eq!(&*state.site_title, "Wiki");
        assert!(state.admin_token.is_none());
        assert_eq!(state.content.stats().unwrap().entries, 0);
    }
}
