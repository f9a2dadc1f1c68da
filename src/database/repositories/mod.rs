pub mod booking;
pub mod crew_assignment;
pub mod intervention;
pub mod staff;

// Re-export all repositories for easy importing
pub use booking::BookingRepository;
pub use crew_assignment::CrewAssignmentRepository;
pub use intervention::InterventionRepository;
pub use staff::StaffRepository;
