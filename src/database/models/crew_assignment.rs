use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum AssignmentStatus {
        Confirmed => "confirmed",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl Default for AssignmentStatus {
    fn default() -> Self {
        AssignmentStatus::Confirmed
    }
}

/// The crew roster bound to a single booking. There is never more than one
/// per booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CrewAssignment {
    pub id: Uuid,
    pub booking_id: i64,
    pub captain_id: i64,
    pub first_mate_id: Option<i64>,
    pub crew_member_ids: Vec<i64>,
    pub briefing_time: DateTime<Utc>,
    pub special_instructions: Option<String>,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CrewAssignment {
    /// Every staff id on the roster, captain first.
    pub fn roster(&self) -> Vec<i64> {
        std::iter::once(self.captain_id)
            .chain(self.first_mate_id)
            .chain(self.crew_member_ids.iter().copied())
            .collect()
    }
}

/// A validated roster ready to be written. Only the crew matcher builds these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCrewAssignment {
    pub booking_id: i64,
    pub captain_id: i64,
    pub first_mate_id: Option<i64>,
    pub crew_member_ids: Vec<i64>,
    pub briefing_time: DateTime<Utc>,
    pub assignment_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentStatusInput {
    pub status: AssignmentStatus,
}
