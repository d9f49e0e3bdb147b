pub mod error;
pub mod report;
pub mod schedule;
pub mod types;
pub mod words;

pub use error::PlannerError;
pub use types::*;

/// Standard result type for all sipswp operations
pub type PlannerResult<T> = Result<T, PlannerError>;
