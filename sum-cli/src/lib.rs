//! Adds two integers given on the command line.

pub mod add;
pub mod cli;
pub mod error;
pub mod logging;

pub use add::add;
pub use cli::{entry_point, run};
pub use error::CliError;
