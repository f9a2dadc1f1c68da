pub mod clock;
pub mod crew_matcher;
pub mod intervention_logger;
pub mod phase_classifier;

pub use clock::{Clock, FixedClock, SystemClock};
pub use crew_matcher::{CrewCandidates, CrewSelection, CrewSelectionError, unassigned_bookings};
pub use intervention_logger::{InterventionError, InterventionLogger};
pub use phase_classifier::{Phase, PhaseBoard, classify, next_status};
