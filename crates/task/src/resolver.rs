//! Resolving a pattern against the script table

use crate::graph::Step;
use crate::script::{Script, ScriptOptions};
use globset::{GlobBuilder, GlobMatcher};
use runglob_config::ScriptTable;
use runglob_core::{AFTER_PREFIX, BEFORE_PREFIX};

/// Shell-style matcher for script names.
///
/// `*` and `?` never match `/`. A pattern the glob syntax rejects (an
/// unclosed `[`, for instance) only matches a name spelled exactly the same.
#[derive(Debug, Clone)]
pub enum PatternMatcher {
    Glob(GlobMatcher),
    Literal(String),
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Self {
        match GlobBuilder::new(pattern).literal_separator(true).build() {
            Ok(glob) => PatternMatcher::Glob(glob.compile_matcher()),
            Err(e) => {
                tracing::debug!(pattern = %pattern, error = %e, "invalid glob, matching literally");
                PatternMatcher::Literal(pattern.to_string())
            }
        }
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Glob(matcher) => matcher.is_match(name),
            PatternMatcher::Literal(literal) => literal == name,
        }
    }
}

/// Names in `scripts` matching `pattern`, in table order.
///
/// Names starting with `.` are skipped unless `pattern` starts with `.` too.
pub fn matching_names<'a>(pattern: &str, scripts: &'a ScriptTable) -> Vec<&'a str> {
    let matcher = PatternMatcher::new(pattern);
    let dot = pattern.starts_with('.');
    scripts
        .keys()
        .map(String::as_str)
        .filter(|name| dot || !name.starts_with('.'))
        .filter(|name| matcher.is_match(name))
        .collect()
}

/// Build the step for script `name`, with its `pre` and `post` scripts.
///
/// Returns `None` when `name` is not in the table. A `pre`/`post` entry with
/// an empty command counts as absent.
pub fn create_step(name: &str, scripts: &ScriptTable, options: &ScriptOptions<'_>) -> Option<Step> {
    let command = scripts.get(name)?;
    let bracket = |prefix: &str| {
        let key = format!("{prefix}{name}");
        scripts
            .get(&key)
            .filter(|command| !command.is_empty())
            .map(|command| Script::with_options(key.as_str(), command.as_str(), options))
    };

    Some(Step {
        pre: bracket(BEFORE_PREFIX),
        main: Script::with_options(name, command.as_str(), options),
        post: bracket(AFTER_PREFIX),
    })
}

/// Every step whose script name matches `pattern`, in table order.
///
/// An empty result is left for the caller to turn into an error or a raw
/// fallback.
pub fn resolve(pattern: &str, scripts: &ScriptTable, options: &ScriptOptions<'_>) -> Vec<Step> {
    matching_names(pattern, scripts)
        .into_iter()
        .filter_map(|name| {
            tracing::debug!(pattern = %pattern, script = %name, "matched script");
            create_step(name, scripts, options)
        })
        .collect()
}
