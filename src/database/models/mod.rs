pub mod booking;
pub mod crew_assignment;
pub mod intervention;
pub(crate) mod macros;
pub mod staff;

// Re-export all models for easy importing
pub use booking::*;
pub use crew_assignment::*;
pub use intervention::*;
pub use staff::*;
