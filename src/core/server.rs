// Application server configuration and setup

use anyhow::Result;
use axum::Router;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};

use crate::api::hello::hello_routes;
use crate::config::environment::EnvironmentVariables;
use crate::config::state::AppState;

/// Creates the application router.
///
/// No timeout or body-limit layers are installed; a request waits on the
/// outbound call for as long as the client library allows, and the response
/// body passes through unmodified.
pub fn create_app(state: AppState) -> Router {
    Router::new().merge(hello_routes()).with_state(state)
}

/// Sets up the TCP listener from the environment or binds a new address.
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
