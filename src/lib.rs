// Library root for the echo forwarding service

pub mod api;
pub mod clients;
pub mod config;
pub mod core;

pub use crate::clients::EchoClient;
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
