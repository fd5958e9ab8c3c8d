//! A single command of an execution plan

use runglob_shell::{all_plain, tokenize_spanned, Preload, Token};
use serde::Serialize;
use std::path::PathBuf;

/// Auxiliary facts about how a script was constructed.
///
/// Carried for diagnostics only; plan compilation never reads them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptMeta {
    /// Space-joined arguments appended to the manifest command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Local executable routed through the preload interpreter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preload: Option<PathBuf>,
    /// The command is an unmatched pattern run as a shell command
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub raw: bool,
}

/// How to construct a [`Script`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptOptions<'a> {
    pub suffix: Option<&'a str>,
    pub preload: Option<Preload<'a>>,
    pub raw: bool,
}

/// One command: a name, the shell text to run, and its token analysis.
///
/// Tokens and spawnability are derived once, at construction, from the
/// final command text (after the suffix and any preload rewrite).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    name: String,
    raw: String,
    tokens: Vec<Token>,
    can_spawn: bool,
    meta: ScriptMeta,
}

impl Script {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::with_options(name, raw, &ScriptOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        raw: impl Into<String>,
        options: &ScriptOptions<'_>,
    ) -> Self {
        let mut raw = raw.into();
        let suffix = options.suffix.filter(|suffix| !suffix.is_empty());
        if let Some(suffix) = suffix {
            raw.push(' ');
            raw.push_str(suffix);
        }

        let spanned = tokenize_spanned(&raw);
        let rewrite = options
            .preload
            .and_then(|preload| preload.rewrite(&raw, &spanned));

        let (raw, tokens, preload) = match rewrite {
            Some(rewrite) => (rewrite.raw, rewrite.tokens, Some(rewrite.executable)),
            None => (
                raw,
                spanned.into_iter().map(|spanned| spanned.token).collect(),
                None,
            ),
        };

        Self {
            name: name.into(),
            can_spawn: all_plain(&tokens),
            raw,
            tokens,
            meta: ScriptMeta {
                suffix: suffix.map(str::to_string),
                preload,
                raw: options.raw,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command text a shell would run
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether the command can be spawned directly, without a shell
    pub fn can_spawn(&self) -> bool {
        self.can_spawn
    }

    /// Program and arguments for a direct spawn, when possible
    pub fn argv(&self) -> Option<Vec<&str>> {
        if !self.can_spawn {
            return None;
        }
        self.tokens.iter().map(Token::as_word).collect()
    }

    pub fn meta(&self) -> &ScriptMeta {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_command_can_spawn() {
        let script = Script::new("build", "tsc --build");
        assert_eq!(script.name(), "build");
        assert_eq!(script.raw(), "tsc --build");
        assert!(script.can_spawn());
        assert_eq!(script.argv(), Some(vec!["tsc", "--build"]));
    }

    #[test]
    fn test_operator_prevents_spawn() {
        let script = Script::new("count", "ls | wc -l");
        assert!(!script.can_spawn());
        assert_eq!(script.argv(), None);
    }

    #[test]
    fn test_empty_command_can_spawn() {
        let script = Script::new("noop", "");
        assert!(script.tokens().is_empty());
        assert!(script.can_spawn());
    }

    #[test]
    fn test_suffix_is_appended_and_recorded() {
        let options = ScriptOptions {
            suffix: Some("--watch me"),
            ..Default::default()
        };
        let script = Script::with_options("test1", "echo test1", &options);
        assert_eq!(script.raw(), "echo test1 --watch me");
        assert_eq!(script.meta().suffix.as_deref(), Some("--watch me"));
        assert_eq!(script.tokens().len(), 4);
    }

    #[test]
    fn test_empty_suffix_is_ignored() {
        let options = ScriptOptions {
            suffix: Some(""),
            ..Default::default()
        };
        let script = Script::with_options("test1", "echo test1", &options);
        assert_eq!(script.raw(), "echo test1");
        assert_eq!(script.meta().suffix, None);
    }

    #[test]
    fn test_unresolvable_preload_leaves_command() {
        let search = runglob_shell::SearchPath::new(".", Vec::new());
        let options = ScriptOptions {
            preload: Some(Preload {
                module: "reify",
                interpreter: "node",
                search: &search,
            }),
            ..Default::default()
        };
        let script = Script::with_options("x", "no-such-tool-anywhere --flag", &options);
        assert_eq!(script.raw(), "no-such-tool-anywhere --flag");
        assert_eq!(script.meta().preload, None);
    }
}
