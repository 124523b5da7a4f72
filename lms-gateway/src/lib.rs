pub mod authz;
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use crate::config::Settings;
use services::backend_client::BackendClient;
use std::sync::Arc;

/// Shared application state: the backend client and resolved settings.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(backend: Arc<BackendClient>, settings: Settings) -> Self {
        Self { backend, settings }
    }
}
