//! Middleware de autenticación
//!
//! Protege las rutas administrativas exigiendo un token JWT válido en
//! el header Authorization.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{validate_token, JwtClaims, JwtConfig};

/// Exigir sesión de administrador
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Se esperaba un token Bearer".to_string()))?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = validate_token(token, &jwt_config)?;

    // Dejar los claims disponibles para los handlers
    request.extensions_mut().insert::<JwtClaims>(claims);

    Ok(next.run(request).await)
}
