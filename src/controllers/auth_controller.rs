use bcrypt::verify;
use sqlx::PgPool;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::repositories::admin_repository::AdminRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: AdminRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: AdminRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        if request.email.trim().is_empty() || !request.email.contains('@') {
            return Err(AppError::Validation("Email inválido".to_string()));
        }

        // Buscar administrador por email
        let admin = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(admin.id, &admin.email, &self.jwt_config)?;
        let expires_at = chrono::Utc::now()
            + chrono::Duration::seconds(self.jwt_config.expiration as i64);

        log::info!("Login de administrador: {}", admin.email);

        Ok(LoginResponse {
            token,
            email: admin.email,
            expires_at,
        })
    }
}
