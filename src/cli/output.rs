use std::io::Write;

use serde::Serialize;

use crate::error::{Result, SiteError};

/// Pretty-print a value as JSON on stdout.
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| SiteError::Output(format!("serialize json: {err}")))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{payload}")?;
    Ok(())
}
