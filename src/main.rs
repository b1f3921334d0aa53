// Service entrypoint: logging, state, router, listener, serve loop

use axum::{serve, Router};
use tokio::net::TcpListener;

use echo_forwarder::config::state::AppState;
use echo_forwarder::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    let app: Router = server::create_app(state.clone());
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    println!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
