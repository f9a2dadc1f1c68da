use serde::{Deserialize, Serialize};

use super::macros::open_string_enum;

open_string_enum! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum StaffRole {
        Captain => "captain",
        FirstMate => "first_mate",
        CrewMember => "crew_member",
        ; Other
    }
}

open_string_enum! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum StaffStatus {
        Available => "available",
        Unavailable => "unavailable",
        ; Other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: i64,
    pub username: String,
    pub role: StaffRole,
    pub status: StaffStatus,
    /// 0 to 5 stars.
    pub rating: Option<f64>,
}

impl StaffMember {
    pub fn is_available(&self) -> bool {
        self.status == StaffStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_roles_match_case_insensitively() {
        assert_eq!(StaffRole::from("Captain"), StaffRole::Captain);
        assert_eq!(StaffRole::from("FIRST_MATE"), StaffRole::FirstMate);
        assert_eq!(StaffStatus::from("Available"), StaffStatus::Available);
    }

    #[test]
    fn unknown_values_keep_their_original_text() {
        let role = StaffRole::from("Galley");

        assert_eq!(role, StaffRole::Other("Galley".to_string()));
        assert_eq!(role.as_str(), "Galley");
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Galley\"");

        let status: StaffStatus = serde_json::from_str("\"On_Leave\"").unwrap();
        assert_eq!(status.to_string(), "On_Leave");
    }
}
