use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, UpdateVehicleStatusRequest, VehicleFilters,
    VehicleResponse,
};
use crate::models::VehicleStatus;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if request.daily_price.is_sign_negative() || request.daily_price.is_zero() {
            return Err(AppError::Validation(
                "El precio diario debe ser mayor que cero".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                request.brand,
                request.model,
                request.year,
                request.body_type,
                request.transmission,
                request.seats,
                request.fuel_type,
                request.daily_price,
                request.image_url,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        if let (Some(min), Some(max)) = (filters.price_min, filters.price_max) {
            if min > max {
                return Err(AppError::Validation(
                    "price_min no puede ser mayor que price_max".to_string(),
                ));
            }
        }

        let vehicles = self.repository.find_filtered(&filters).await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let vehicle = self
            .repository
            .update(
                id,
                request.brand,
                request.model,
                request.year,
                request.body_type,
                request.transmission,
                request.seats,
                request.fuel_type,
                request.daily_price,
                request.image_url,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Transición administrativa del flag de disponibilidad. Marcar
    /// Reserved sin fecha de reapertura es válido: el resolutor lo
    /// trata como "no disponible indefinidamente".
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateVehicleStatusRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        if request.status == VehicleStatus::Reserved && request.next_available_date.is_none() {
            log::warn!(
                "Vehículo {} marcado como reservado sin fecha de reapertura",
                id
            );
        }

        // Al volver a Available la fecha de reapertura deja de aplicar
        let next_available_date = match request.status {
            VehicleStatus::Reserved => request.next_available_date,
            VehicleStatus::Available => None,
        };

        let vehicle = self
            .repository
            .update_status(id, request.status, next_available_date)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Estado del vehículo actualizado".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
