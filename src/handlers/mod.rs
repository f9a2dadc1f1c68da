pub mod assignments;
pub mod bookings;
pub mod interventions;
pub mod shared;
pub mod staff;
