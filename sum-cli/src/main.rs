use std::ffi::OsString;

use anyhow::{Context, Result};
use sum_cli::{entry_point, logging};

fn main() -> Result<()> {
    logging::init().context("Failed to initialise logging")?;

    let code = entry_point(None::<Vec<OsString>>);
    std::process::exit(code);
}
