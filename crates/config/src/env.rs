//! Plan options read from `RUNGLOB_*` environment variables

use crate::options::PartialOptions;
use runglob_core::{
    Error, Result, RUNGLOB_INTERPRETER_VAR, RUNGLOB_RAW_VAR, RUNGLOB_REQUIRE_VAR,
    RUNGLOB_SERIAL_VAR,
};

/// Collect plan options from environment variables.
///
/// Takes the variables explicitly so callers decide whether to read the
/// process environment. Empty values count as unset.
pub fn options_from_env<I, K, V>(vars: I) -> Result<PartialOptions>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut options = PartialOptions::default();
    for (key, value) in vars {
        let (key, value) = (key.as_ref(), value.as_ref().trim());
        if value.is_empty() {
            continue;
        }
        match key {
            RUNGLOB_SERIAL_VAR => options.serial = Some(parse_flag(key, value)?),
            RUNGLOB_RAW_VAR => options.raw = Some(parse_flag(key, value)?),
            RUNGLOB_REQUIRE_VAR => options.require = Some(value.to_string()),
            RUNGLOB_INTERPRETER_VAR => options.interpreter = Some(value.to_string()),
            _ => {}
        }
    }
    Ok(options)
}

/// Parse a boolean environment flag
pub fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{name} must be a boolean (true/false), got '{other}'"
        ))),
    }
}
