//! User-defined goals.
//!
//! Goals the user creates from the goals form: a numeric target with a
//! unit and a deadline, updated as progress is logged.

pub mod manager;
pub mod types;

// Re-exports for convenience
pub use manager::{parse_amount, GoalBook, GoalError};
pub use types::Goal;
