//! Re-joining comma-separated pattern lists split across argv entries
//!
//! `run a, b, c` reaches us as `["a,", "b,", "c"]`. A token that begins with
//! a comma, or follows a token that ended with one, continues the previous
//! entry. A pending continuation survives dropped empty tokens and tokens
//! that had nothing to join onto. Tokens with only internal commas (such as
//! a quoted shell command `"x , y , z"`) are never merged.

use runglob_core::SUB_PATTERN_SEPARATOR;

/// Merge comma-continued argv tokens into comma-joined pattern groups
pub fn normalize<S: AsRef<str>>(argv: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(argv.len());
    let mut continues = false;

    for arg in argv {
        let arg = arg.as_ref();
        let leading = arg.starts_with(SUB_PATTERN_SEPARATOR);
        let trailing = arg.ends_with(SUB_PATTERN_SEPARATOR);
        let core = strip_separators(arg);

        if (leading || continues) && !core.is_empty() {
            if let Some(last) = normalized.last_mut() {
                last.push(SUB_PATTERN_SEPARATOR);
                last.push_str(core);
                continues = trailing;
                continue;
            }
        }

        // Only a join consumes a pending continuation.
        if trailing {
            continues = true;
        }
        if !core.is_empty() {
            normalized.push(core.to_string());
        }
    }

    normalized
}

// At most one separator is removed from each end.
fn strip_separators(arg: &str) -> &str {
    let arg = arg.strip_prefix(SUB_PATTERN_SEPARATOR).unwrap_or(arg);
    arg.strip_suffix(SUB_PATTERN_SEPARATOR).unwrap_or(arg)
}
