//! Charter phase classification.
//!
//! A booking's phase is derived from the clock and the booking's own window
//! and status on every call; it is never stored. Only the booking status is
//! persisted, so there is no transition table that can drift from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::models::{Booking, BookingStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Before,
    During,
    After,
}

impl Phase {
    /// Status the admin action offered in this phase moves the booking to.
    ///
    /// The current status is not checked against it; running the actions in
    /// order is left to the admin workflow.
    pub fn target_status(self) -> BookingStatus {
        match self {
            Phase::Before => BookingStatus::Confirmed,
            Phase::During => BookingStatus::InProgress,
            Phase::After => BookingStatus::Completed,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Before => write!(f, "before"),
            Phase::During => write!(f, "during"),
            Phase::After => write!(f, "after"),
        }
    }
}

/// Returns the phase `booking` occupies at `now`, or `None` when no phase
/// predicate holds (for example a booking still `pending` after its end).
///
/// The three predicates are disjoint on time alone, so at most one matches.
pub fn classify(booking: &Booking, now: DateTime<Utc>) -> Option<Phase> {
    let status = booking.status;

    if now < booking.start_time
        && matches!(status, BookingStatus::Pending | BookingStatus::Confirmed)
    {
        Some(Phase::Before)
    } else if booking.start_time <= now
        && now <= booking.end_time
        && status == BookingStatus::InProgress
    {
        Some(Phase::During)
    } else if now > booking.end_time
        && matches!(status, BookingStatus::Completed | BookingStatus::Cancelled)
    {
        Some(Phase::After)
    } else {
        None
    }
}

/// Status to apply for the booking's current phase, if it has one.
pub fn next_status(booking: &Booking, now: DateTime<Utc>) -> Option<BookingStatus> {
    classify(booking, now).map(Phase::target_status)
}

/// Bookings bucketed by phase at a single instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseBoard {
    pub evaluated_at: DateTime<Utc>,
    pub before: Vec<Booking>,
    pub during: Vec<Booking>,
    pub after: Vec<Booking>,
}

impl PhaseBoard {
    /// Unclassified bookings are left out of every bucket.
    pub fn build(bookings: impl IntoIterator<Item = Booking>, now: DateTime<Utc>) -> Self {
        let mut board = PhaseBoard {
            evaluated_at: now,
            ..PhaseBoard::default()
        };

        for booking in bookings {
            match classify(&booking, now) {
                Some(Phase::Before) => board.before.push(booking),
                Some(Phase::During) => board.during.push(booking),
                Some(Phase::After) => board.after.push(booking),
                None => log::debug!(
                    "Booking {} ({}) matches no phase at {}",
                    booking.id,
                    booking.status,
                    now
                ),
            }
        }

        board
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.during.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
