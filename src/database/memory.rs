use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::{
    models::{
        AssignmentStatus, Booking, BookingStatus, CrewAssignment, InterventionRecord,
        NewCrewAssignment, NewIntervention, StaffMember,
    },
    store::{CharterStore, StoreError},
};

/// Initial bookings and roster for an in-memory store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

impl Seed {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        Ok(seed)
    }
}

#[derive(Default)]
struct State {
    bookings: BTreeMap<i64, Booking>,
    staff: BTreeMap<i64, StaffMember>,
    assignments: Vec<CrewAssignment>,
    interventions: Vec<InterventionRecord>,
}

/// Process-local `CharterStore`. Assignment uniqueness is checked and the
/// insert performed under one write guard.
#[derive(Default)]
pub struct MemoryCharterStore {
    state: RwLock<State>,
}

impl MemoryCharterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookings whose window does not end after it starts are skipped, as the
    /// database would reject them.
    pub fn from_seed(seed: Seed) -> Self {
        let bookings = seed
            .bookings
            .into_iter()
            .filter(|b| {
                if !b.has_valid_window() {
                    log::warn!("Skipping seeded booking {}: start is not before end", b.id);
                }
                b.has_valid_window()
            })
            .map(|b| (b.id, b))
            .collect();

        let state = State {
            bookings,
            staff: seed.staff.into_iter().map(|s| (s.id, s)).collect(),
            ..State::default()
        };

        Self {
            state: RwLock::new(state),
        }
    }

    /// Stands in for the external booking flow.
    pub async fn insert_booking(&self, booking: Booking) {
        self.state.write().await.bookings.insert(booking.id, booking);
    }

    pub async fn insert_staff(&self, member: StaffMember) {
        self.state.write().await.staff.insert(member.id, member);
    }
}

#[async_trait]
impl CharterStore for MemoryCharterStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        let state = self.state.read().await;
        let mut bookings: Vec<Booking> = state.bookings.values().cloned().collect();
        bookings.sort_by_key(|b| (b.start_time, b.id));
        Ok(bookings)
    }

    async fn get_booking(&self, booking_id: i64) -> Result<Option<Booking>, StoreError> {
        Ok(self.state.read().await.bookings.get(&booking_id).cloned())
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        let mut state = self.state.write().await;
        let booking = state
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| StoreError::NotFound(format!("Booking {}", booking_id)))?;
        booking.status = status;
        Ok(booking.clone())
    }

    async fn list_staff(&self) -> Result<Vec<StaffMember>, StoreError> {
        let state = self.state.read().await;
        let mut staff: Vec<StaffMember> = state.staff.values().cloned().collect();
        staff.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(staff)
    }

    async fn list_assignments(&self) -> Result<Vec<CrewAssignment>, StoreError> {
        let state = self.state.read().await;
        let mut assignments = state.assignments.clone();
        assignments.sort_by_key(|a| a.briefing_time);
        Ok(assignments)
    }

    async fn create_assignment(
        &self,
        input: NewCrewAssignment,
    ) -> Result<CrewAssignment, StoreError> {
        let mut state = self.state.write().await;

        if !state.bookings.contains_key(&input.booking_id) {
            return Err(StoreError::NotFound(format!("Booking {}", input.booking_id)));
        }
        if state
            .assignments
            .iter()
            .any(|a| a.booking_id == input.booking_id)
        {
            return Err(StoreError::Conflict(format!(
                "Booking {} already has a crew assignment",
                input.booking_id
            )));
        }

        let now = Utc::now();
        let assignment = CrewAssignment {
            id: Uuid::new_v4(),
            booking_id: input.booking_id,
            captain_id: input.captain_id,
            first_mate_id: input.first_mate_id,
            crew_member_ids: input.crew_member_ids,
            briefing_time: input.briefing_time,
            special_instructions: input.assignment_notes,
            status: AssignmentStatus::Confirmed,
            created_at: now,
            updated_at: now,
        };
        state.assignments.push(assignment.clone());

        Ok(assignment)
    }

    async fn update_assignment_status(
        &self,
        assignment_id: Uuid,
        status: AssignmentStatus,
    ) -> Result<CrewAssignment, StoreError> {
        let mut state = self.state.write().await;
        let assignment = state
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| StoreError::NotFound(format!("Crew assignment {}", assignment_id)))?;
        assignment.status = status;
        assignment.updated_at = Utc::now();
        Ok(assignment.clone())
    }

    async fn create_intervention(
        &self,
        input: NewIntervention,
    ) -> Result<InterventionRecord, StoreError> {
        let mut state = self.state.write().await;

        if !state.bookings.contains_key(&input.booking_id) {
            return Err(StoreError::NotFound(format!("Booking {}", input.booking_id)));
        }

        let record = InterventionRecord {
            id: Uuid::new_v4(),
            booking_id: input.booking_id,
            action: input.action,
            notes: input.notes,
            correlation_id: input.correlation_id,
            user_agent: input.user_agent,
            created_at: Utc::now(),
        };
        state.interventions.push(record.clone());

        Ok(record)
    }

    async fn list_interventions(
        &self,
        booking_id: i64,
    ) -> Result<Vec<InterventionRecord>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .interventions
            .iter()
            .filter(|r| r.booking_id == booking_id)
            .cloned()
            .collect())
    }
}
