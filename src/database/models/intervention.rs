use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum InterventionAction {
        StatusOverride => "status_override",
        CustomerService => "customer_service",
        SafetyConcern => "safety_concern",
        EquipmentIssue => "equipment_issue",
        WeatherDelay => "weather_delay",
        Other => "other",
    }
}

/// Append-only admin note on a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InterventionRecord {
    pub id: Uuid,
    pub booking_id: i64,
    pub action: InterventionAction,
    pub notes: String,
    pub correlation_id: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIntervention {
    pub booking_id: i64,
    pub action: InterventionAction,
    pub notes: String,
    pub correlation_id: Option<String>,
    pub user_agent: Option<String>,
}
