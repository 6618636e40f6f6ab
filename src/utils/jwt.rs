//! Utilidades JWT
//!
//! Helpers para emitir y validar los tokens de sesión del administrador.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del token de sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // admin user id
    pub email: String, // email del administrador
    pub exp: usize,    // expiration timestamp
    pub iat: usize,    // issued at timestamp
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar token de sesión para un administrador
pub fn generate_token(
    admin_id: Uuid,
    email: &str,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: admin_id.to_string(),
        email: email.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_ref()),
    )
    .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
}

/// Validar y decodificar un token de sesión
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "secreto-de-prueba".to_string(),
            expiration: 3600,
        }
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let config = test_config();
        let admin_id = Uuid::new_v4();
        let token = generate_token(admin_id, "admin@example.com", &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();

        assert_eq!(claims.sub, admin_id.to_string());
        assert_eq!(claims.email, "admin@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_with_wrong_secret_rejected() {
        let config = test_config();
        let token = generate_token(Uuid::new_v4(), "admin@example.com", &config).unwrap();

        let other = JwtConfig {
            secret: "otro-secreto".to_string(),
            expiration: 3600,
        };
        assert!(validate_token(&token, &other).is_err());
    }

    #[test]
    fn garbage_token_rejected() {
        assert!(validate_token("no-es-un-jwt", &test_config()).is_err());
    }
}
