mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Rental Booking - API de alquiler de vehículos");
    info!("================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let app_state = AppState::new(pool, EnvironmentConfig::default());

    // CORS abierto en desarrollo, orígenes explícitos en producción
    let cors = if app_state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(app_state.config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest(
            "/api/vehicle",
            routes::vehicle_routes::create_vehicle_router(app_state.clone()),
        )
        .nest(
            "/api/booking",
            routes::booking_routes::create_booking_router(),
        )
        .nest(
            "/api/reservation",
            routes::booking_routes::create_reservation_router(app_state.clone()),
        )
        .nest(
            "/api/review",
            routes::review_routes::create_review_router(app_state.clone()),
        )
        .nest(
            "/api/track",
            routes::track_routes::create_track_router(app_state.clone()),
        )
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .layer(cors)
        .with_state(app_state);

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚙 Catálogo:");
    info!("   GET  /api/vehicle - Listar vehículos (con filtros)");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   GET  /api/vehicle/:id/availability - Check de disponibilidad");
    info!("📅 Reservas:");
    info!("   POST /api/booking/request - Solicitar reserva (canal externo)");
    info!("   POST /api/reservation - Registrar reserva confirmada (admin)");
    info!("   GET  /api/reservation/vehicle/:id - Reservas de un vehículo (admin)");
    info!("   DELETE /api/reservation/:id - Eliminar reserva (admin)");
    info!("🛠 Administración de catálogo:");
    info!("   POST /api/vehicle - Crear vehículo (admin)");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo (admin)");
    info!("   PUT  /api/vehicle/:id/status - Cambiar disponibilidad (admin)");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo (admin)");
    info!("⭐ Opiniones:");
    info!("   GET  /api/review - Opiniones aprobadas");
    info!("   POST /api/review - Dejar opinión");
    info!("   GET  /api/review/pending - Pendientes de moderación (admin)");
    info!("   PUT  /api/review/:id/approve - Aprobar opinión (admin)");
    info!("   DELETE /api/review/:id - Eliminar opinión (admin)");
    info!("🎵 Música de fondo:");
    info!("   GET  /api/track - Pistas activas");
    info!("   GET  /api/track/all - Todas las pistas (admin)");
    info!("   POST /api/track - Crear pista (admin)");
    info!("   PUT  /api/track/:id - Actualizar pista (admin)");
    info!("   DELETE /api/track/:id - Eliminar pista (admin)");
    info!("🔐 Sesión:");
    info!("   POST /api/auth/login - Login de administrador");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rental-booking",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
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
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
