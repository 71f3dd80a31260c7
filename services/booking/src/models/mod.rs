//! Booking service models

pub mod country;
pub mod role;
pub mod session;
pub mod user;
pub mod vacation;

// Re-export for convenience
pub use country::Country;
pub use role::Role;
pub use session::Session;
pub use user::{NewUser, User, UserRecord};
pub use vacation::{NewVacation, Vacation, VacationRecord};
