use std::ffi::OsString;
use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use num::BigInt;
use tracing::debug;

use crate::add::add;
use crate::error::{CliError, EXIT_OUTPUT_FAILURE, EXIT_SUCCESS};

const BIN_NAME: &str = "sum-cli";
const OPERAND_COUNT: usize = 2;

/// Prints the sum of two integers
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// First integer
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Second integer
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

impl Args {
    /// Parses exactly two operands. Every argument counts, including `--`
    /// and anything that looks like a flag.
    pub fn try_from_operands(argv: Vec<OsString>) -> Result<Self, clap::Error> {
        if argv.len() != OPERAND_COUNT {
            return Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "expected {} arguments, found {}",
                    OPERAND_COUNT,
                    argv.len()
                ),
            ));
        }

        // behind a leading `--` clap takes every token as a value
        Self::try_parse_from(
            [OsString::from(BIN_NAME), OsString::from("--")]
                .into_iter()
                .chain(argv),
        )
    }

    /// Parses both operands, reporting the first one that is not an integer.
    pub fn operands(&self) -> Result<(BigInt, BigInt), CliError> {
        Ok((parse_operand(&self.a)?, parse_operand(&self.b)?))
    }
}

/// Parses a base-10 integer literal: optional sign, digits, `_` allowed
/// between digits. Whitespace around the literal (sign included) is ignored.
pub fn parse_operand(raw: &str) -> Result<BigInt, CliError> {
    let invalid = || CliError::InvalidOperand {
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return Err(invalid());
    }

    // only ASCII digits are left, which always parse
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    let magnitude: BigInt = cleaned.parse().map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Runs one invocation against the given writers and returns the exit code.
///
/// `argv` holds the operands without the program name. `None` reads the
/// process's own arguments instead.
pub fn run<I, T, O, E>(argv: Option<I>, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    let argv: Vec<OsString> = match argv {
        Some(args) => args.into_iter().map(Into::into).collect(),
        None => std::env::args_os().skip(1).collect(),
    };
    let parsed = Args::try_from_operands(argv);

    let operands = parsed
        .map_err(CliError::from)
        .and_then(|args| args.operands());

    match operands {
        Ok((a, b)) => {
            let sum = add(&a, &b);
            debug!(%a, %b, %sum, "computed sum");
            match writeln!(out, "{}", sum).and_then(|_| out.flush()) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    debug!("failed to write sum: {}", e);
                    EXIT_OUTPUT_FAILURE
                }
            }
        }
        Err(e) => report(e, err),
    }
}

fn report<E: Write>(error: CliError, err: &mut E) -> i32 {
    let code = error.exit_code();
    debug!(code, "rejected invocation: {}", error);

    // clap's rendered messages already end with a newline
    let written = match &error {
        CliError::Usage(e) => write!(err, "{}", e).and_then(|_| err.flush()),
        CliError::InvalidOperand { .. } => writeln!(err, "{}", error).and_then(|_| err.flush()),
    };
    if let Err(e) = written {
        debug!("failed to write message: {}", e);
    }

    code
}

/// [`run`] bound to the process's stdout and stderr.
pub fn entry_point<I, T>(argv: Option<I>) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(argv, &mut stdout.lock(), &mut stderr.lock())
}
