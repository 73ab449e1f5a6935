//! Prompting guide command implementation

use sag_core::{SagError, SagResult};
use std::io::{self, Write};

/// Guide text printed by `sag prompting`
const PROMPTING_GUIDE: &str = include_str!("prompting_guide.md");

/// Print the prompting guide to stdout
pub fn print_guide() -> SagResult<()> {
    let stdout = io::stdout();
    write_guide(&mut stdout.lock())
}

/// Write the prompting guide to `out`
pub fn write_guide(out: &mut impl Write) -> SagResult<()> {
    out.write_all(PROMPTING_GUIDE.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| SagError::from(e).with_context("Writing prompting guide"))
}
