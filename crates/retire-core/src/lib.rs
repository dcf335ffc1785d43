pub mod budget;
pub mod error;
pub mod inflation;
pub mod investment;
pub mod loan;
pub mod savings;
pub mod types;

pub use error::PlannerError;
pub use types::*;

/// Standard result type for all planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
