/// Exit code for a printed sum.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when the sum could not be written out.
pub const EXIT_OUTPUT_FAILURE: i32 = 1;
/// Exit code for a bad invocation: wrong operand count or a non-integer operand.
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Wrong number of arguments, or an argument clap could not take.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("Both arguments must be integers (got {value:?}).")]
    InvalidOperand { value: String },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(e) => e.exit_code(),
            CliError::InvalidOperand { .. } => EXIT_USAGE,
        }
    }
}
