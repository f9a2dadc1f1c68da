//! Crew candidate pools and roster validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::models::{
    Booking, CrewAssignment, NewCrewAssignment, StaffMember, StaffRole,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrewSelectionError {
    #[error("A captain must be selected")]
    MissingCaptain,

    #[error("Staff member {staff_id} is not an available {role}")]
    NotEligible { staff_id: i64, role: StaffRole },

    #[error("Crew member {0} is selected more than once")]
    DuplicateCrewMember(i64),
}

/// Available staff split by the slot they can fill. The pools are disjoint:
/// each staff member has one role, and other roles appear in none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewCandidates {
    pub captains: Vec<StaffMember>,
    pub first_mates: Vec<StaffMember>,
    pub crew_members: Vec<StaffMember>,
}

impl CrewCandidates {
    pub fn from_roster<'a>(staff: impl IntoIterator<Item = &'a StaffMember>) -> Self {
        let mut candidates = CrewCandidates::default();

        for member in staff.into_iter().filter(|m| m.is_available()) {
            let pool = match member.role {
                StaffRole::Captain => &mut candidates.captains,
                StaffRole::FirstMate => &mut candidates.first_mates,
                StaffRole::CrewMember => &mut candidates.crew_members,
                StaffRole::Other(_) => continue,
            };
            pool.push(member.clone());
        }

        candidates
    }

    fn pool(&self, role: &StaffRole) -> &[StaffMember] {
        match role {
            StaffRole::Captain => &self.captains,
            StaffRole::FirstMate => &self.first_mates,
            StaffRole::CrewMember => &self.crew_members,
            StaffRole::Other(_) => &[],
        }
    }

    fn require(&self, staff_id: i64, role: StaffRole) -> Result<(), CrewSelectionError> {
        if self.pool(&role).iter().any(|m| m.id == staff_id) {
            Ok(())
        } else {
            Err(CrewSelectionError::NotEligible { staff_id, role })
        }
    }
}

/// What the admin picked in the assignment dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewSelection {
    pub captain_id: Option<i64>,
    pub first_mate_id: Option<i64>,
    #[serde(default)]
    pub crew_member_ids: Vec<i64>,
    pub assignment_notes: Option<String>,
}

impl CrewSelection {
    /// Checks the selection against the candidate pools and builds the record
    /// to submit. The briefing is set to the charter's start.
    ///
    /// Whether the booking already has an assignment is not checked here; the
    /// store rejects a second one.
    pub fn into_assignment(
        self,
        booking: &Booking,
        candidates: &CrewCandidates,
    ) -> Result<NewCrewAssignment, CrewSelectionError> {
        let captain_id = self.captain_id.ok_or(CrewSelectionError::MissingCaptain)?;
        candidates.require(captain_id, StaffRole::Captain)?;

        if let Some(first_mate_id) = self.first_mate_id {
            candidates.require(first_mate_id, StaffRole::FirstMate)?;
        }

        let mut seen = HashSet::new();
        for &crew_id in &self.crew_member_ids {
            if !seen.insert(crew_id) {
                return Err(CrewSelectionError::DuplicateCrewMember(crew_id));
            }
            candidates.require(crew_id, StaffRole::CrewMember)?;
        }

        let assignment_notes = self
            .assignment_notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(NewCrewAssignment {
            booking_id: booking.id,
            captain_id,
            first_mate_id: self.first_mate_id,
            crew_member_ids: self.crew_member_ids,
            briefing_time: booking.start_time,
            assignment_notes,
        })
    }
}

/// Bookings with no assignment in `assignments`, i.e. the "requires crew"
/// list. Only as fresh as the two lists it is given.
pub fn unassigned_bookings(
    bookings: Vec<Booking>,
    assignments: &[CrewAssignment],
) -> Vec<Booking> {
    let staffed: HashSet<i64> = assignments.iter().map(|a| a.booking_id).collect();

    bookings
        .into_iter()
        .filter(|b| !staffed.contains(&b.id))
        .collect()
}
