//! Canal de envío de solicitudes de reserva
//!
//! La solicitud de reserva NO se persiste aquí: se reenvía como texto
//! legible a un canal de mensajería externo y un humano actualiza el
//! inventario después. El canal es intercambiable detrás del trait
//! `BookingNotifier` (enlace de chat, email, webhook) sin tocar el
//! resolutor de disponibilidad.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::errors::AppError;

/// Resumen legible de la reserva deseada que viaja por el canal
#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub total_price: Decimal,
    pub customer_name: String,
    pub customer_phone: String,
}

impl BookingSummary {
    /// Mensaje de texto que recibe el agente humano
    pub fn format_message(&self) -> String {
        format!(
            "Solicitud de reserva:\n\
             Vehículo: {} {} ({})\n\
             Fechas: {} a {} ({} días)\n\
             Precio total: {} EUR\n\
             Cliente: {}\n\
             Teléfono: {}",
            self.vehicle_brand,
            self.vehicle_model,
            self.vehicle_year,
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
            self.total_days,
            self.total_price,
            self.customer_name,
            self.customer_phone,
        )
    }
}

/// Resultado del envío: el enlace al que se redirige al visitante y si
/// además se entregó la copia por webhook
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub chat_link: String,
    pub webhook_delivered: bool,
}

/// Sink abstracto de notificación de reservas
///
/// Una sola operación: entregar el resumen. No es un commit
/// transaccional; la reserva no existe hasta que un administrador la
/// registre.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn submit(&self, summary: &BookingSummary) -> Result<SubmissionReceipt, AppError>;
}

/// Canal por defecto: enlace de chat de WhatsApp + webhook opcional
pub struct WhatsAppNotifier {
    client: reqwest::Client,
    /// Número del agente en formato internacional sin '+', p.ej. 34600111222
    agent_phone: String,
    webhook_url: Option<String>,
}

impl WhatsAppNotifier {
    pub fn new(client: reqwest::Client, agent_phone: String, webhook_url: Option<String>) -> Self {
        Self {
            client,
            agent_phone,
            webhook_url,
        }
    }

    /// Construye el enlace wa.me con el mensaje pre-formateado
    pub fn chat_link(&self, summary: &BookingSummary) -> String {
        let text = summary.format_message();
        format!(
            "https://wa.me/{}?text={}",
            self.agent_phone,
            urlencoding::encode(&text)
        )
    }
}

#[async_trait]
impl BookingNotifier for WhatsAppNotifier {
    async fn submit(&self, summary: &BookingSummary) -> Result<SubmissionReceipt, AppError> {
        let chat_link = self.chat_link(summary);

        let mut webhook_delivered = false;
        if let Some(ref url) = self.webhook_url {
            let response = self
                .client
                .post(url)
                .json(summary)
                .send()
                .await
                .map_err(|e| AppError::ExternalApi(format!("Error sending webhook: {}", e)))?;

            if !response.status().is_success() {
                log::warn!(
                    "Webhook de reserva respondió {} para {}",
                    response.status(),
                    summary.customer_name
                );
            } else {
                webhook_delivered = true;
            }
        }

        log::info!(
            "Solicitud de reserva enviada: {} {} para {}",
            summary.vehicle_brand,
            summary.vehicle_model,
            summary.customer_name
        );

        Ok(SubmissionReceipt {
            chat_link,
            webhook_delivered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary() -> BookingSummary {
        BookingSummary {
            vehicle_brand: "Ford".to_string(),
            vehicle_model: "Ranger".to_string(),
            vehicle_year: 2023,
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            total_days: 15,
            total_price: Decimal::new(97500, 2),
            customer_name: "Ana García".to_string(),
            customer_phone: "+34600111222".to_string(),
        }
    }

    #[test]
    fn message_contains_vehicle_dates_and_total() {
        let msg = summary().format_message();
        assert!(msg.contains("Ford Ranger (2023)"));
        assert!(msg.contains("2024-04-01 a 2024-04-15 (15 días)"));
        assert!(msg.contains("975.00 EUR"));
        assert!(msg.contains("Ana García"));
    }

    #[test]
    fn chat_link_is_url_encoded() {
        let notifier =
            WhatsAppNotifier::new(reqwest::Client::new(), "34600999888".to_string(), None);
        let link = notifier.chat_link(&summary());
        assert!(link.starts_with("https://wa.me/34600999888?text="));
        // el texto no viaja con espacios ni saltos de línea sin codificar
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("Solicitud%20de%20reserva"));
    }

    #[tokio::test]
    async fn submit_without_webhook_returns_link_only() {
        let notifier =
            WhatsAppNotifier::new(reqwest::Client::new(), "34600999888".to_string(), None);
        let receipt = notifier.submit(&summary()).await.unwrap();
        assert!(!receipt.webhook_delivered);
        assert!(receipt.chat_link.contains("wa.me/34600999888"));
    }
}
