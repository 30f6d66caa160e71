pub mod arithmetic;
pub mod session;

pub use crate::domain::model::{Calculation, ReadOutcome, SessionOutcome};
pub use crate::domain::ports::LineReader;
pub use crate::utils::error::Result;
