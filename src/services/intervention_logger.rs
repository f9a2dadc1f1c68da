use std::sync::Arc;

use actix_web::HttpRequest;
use thiserror::Error;

use crate::database::models::{InterventionAction, InterventionRecord, NewIntervention};
use crate::database::{CharterStore, StoreError};
use crate::middleware::RequestIdExt;

#[derive(Error, Debug)]
pub enum InterventionError {
    #[error("Intervention notes must not be empty")]
    EmptyNotes,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Records admin interventions against bookings. Writes only intervention
/// records; booking status and crew assignments are never touched.
#[derive(Clone)]
pub struct InterventionLogger {
    store: Arc<dyn CharterStore>,
}

impl InterventionLogger {
    pub fn new(store: Arc<dyn CharterStore>) -> Self {
        Self { store }
    }

    /// Extract correlation id and user agent from HTTP request
    fn extract_client_info(req: &HttpRequest) -> (Option<String>, Option<String>) {
        let user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        (req.correlation_id(), user_agent)
    }

    /// Appends one record. Any booking phase is accepted.
    pub async fn log_intervention(
        &self,
        booking_id: i64,
        action: InterventionAction,
        notes: &str,
        req: &HttpRequest,
    ) -> Result<InterventionRecord, InterventionError> {
        let notes = notes.trim();
        if notes.is_empty() {
            return Err(InterventionError::EmptyNotes);
        }

        let (correlation_id, user_agent) = Self::extract_client_info(req);

        let record = self
            .store
            .create_intervention(NewIntervention {
                booking_id,
                action,
                notes: notes.to_string(),
                correlation_id,
                user_agent,
            })
            .await?;

        log::info!(
            "Logged {} intervention {} on booking {}",
            record.action,
            record.id,
            booking_id
        );

        Ok(record)
    }

    pub async fn history(&self, booking_id: i64) -> Result<Vec<InterventionRecord>, StoreError> {
        self.store.list_interventions(booking_id).await
    }
}
