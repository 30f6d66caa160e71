pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::terminal::{StreamReader, TerminalReader};
pub use core::{arithmetic::add_numbers, session::CalculatorSession};
pub use domain::model::{Calculation, ReadOutcome, SessionOutcome};
pub use domain::ports::LineReader;
pub use utils::error::{CalcError, Result};
