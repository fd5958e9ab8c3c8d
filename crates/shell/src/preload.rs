//! Preload rewriting of local executable shims
//!
//! A command whose first word resolves to an executable inside a local
//! binaries directory (`node_modules/.bin`) is rewritten to run that shim
//! through an interpreter with a module preloaded:
//!
//! ```text
//! eslint src      =>  node --require reify node_modules/.bin/eslint src
//! ```
//!
//! Everything after the first word is kept exactly as written. Any failure
//! along the way leaves the command alone.

use crate::quote::join;
use crate::search::{is_local_bin, SearchPath};
use crate::tokens::{Spanned, Token};
use runglob_core::PRELOAD_FLAG;
use runglob_utils::relative_to;
use std::path::PathBuf;

/// Parameters for a preload rewrite
#[derive(Debug, Clone, Copy)]
pub struct Preload<'a> {
    /// Module specifier handed to the interpreter's preload flag
    pub module: &'a str,
    /// Interpreter that runs the shim
    pub interpreter: &'a str,
    pub search: &'a SearchPath,
}

/// The result of a successful rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub raw: String,
    pub tokens: Vec<Token>,
    /// The shim path as it appears in `raw`, relative to the search path's cwd
    pub executable: PathBuf,
}

impl Preload<'_> {
    /// Rewrite `raw` (already split into `spanned`) if its first word is a
    /// local executable shim.
    pub fn rewrite(&self, raw: &str, spanned: &[Spanned]) -> Option<Rewrite> {
        let first = spanned.first()?;
        let program = first.token.as_word()?;

        let resolved = self.search.resolve(program)?;
        if !is_local_bin(&resolved) {
            tracing::debug!(
                program = %program,
                resolved = %resolved.display(),
                "not a local executable, leaving command unchanged"
            );
            return None;
        }

        let executable = relative_to(self.search.cwd(), &resolved);
        let Some(executable_text) = executable.to_str() else {
            tracing::debug!(resolved = %resolved.display(), "non UTF-8 executable path");
            return None;
        };

        let mut tokens = vec![
            Token::Word(self.interpreter.to_string()),
            Token::Word(PRELOAD_FLAG.to_string()),
            Token::Word(self.module.to_string()),
            Token::Word(executable_text.to_string()),
        ];
        let mut rewritten = join(&tokens);
        rewritten.push_str(&raw[first.span.end..]);
        tokens.extend(spanned[1..].iter().map(|s| s.token.clone()));

        tracing::debug!(
            program = %program,
            executable = %executable.display(),
            module = %self.module,
            "rewrote local executable through preload"
        );

        Some(Rewrite {
            raw: rewritten,
            tokens,
            executable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::tokenize_spanned;

    #[test]
    fn test_first_token_must_be_a_word() {
        let search = SearchPath::new(".", Vec::new());
        let preload = Preload {
            module: "reify",
            interpreter: "node",
            search: &search,
        };
        let raw = "| tool";
        assert_eq!(preload.rewrite(raw, &tokenize_spanned(raw)), None);
        assert_eq!(preload.rewrite("", &[]), None);
    }

    #[test]
    fn test_unresolved_program_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let search = SearchPath::new(dir.path(), vec![dir.path().join("node_modules/.bin")]);
        let preload = Preload {
            module: "reify",
            interpreter: "node",
            search: &search,
        };
        let raw = "missing-tool --flag";
        assert_eq!(preload.rewrite(raw, &tokenize_spanned(raw)), None);
    }
}
