//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::notifier::{BookingNotifier, WhatsAppNotifier};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    /// Canal de notificación de reservas, intercambiable detrás del trait
    pub notifier: Arc<dyn BookingNotifier>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let notifier = Arc::new(WhatsAppNotifier::new(
            reqwest::Client::new(),
            config.booking_agent_phone.clone(),
            config.booking_webhook_url.clone(),
        ));

        Self {
            pool,
            config,
            notifier,
        }
    }
}
