//! Pattern groups and the inline argument convention

use crate::normalize::normalize;
use runglob_core::{INLINE_ARGS_SEPARATOR, SUB_PATTERN_SEPARATOR};
use serde::Serialize;

/// The sub-patterns of one top-level group, in order.
///
/// Each sub-pattern compiles to one or more phases that run strictly after
/// the phases of the sub-pattern before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternGroup {
    sub_patterns: Vec<String>,
}

impl PatternGroup {
    /// Split a comma-joined group string into sub-patterns
    pub fn parse(group: &str) -> Self {
        Self {
            sub_patterns: group
                .split(SUB_PATTERN_SEPARATOR)
                .map(str::to_string)
                .collect(),
        }
    }

    /// Use already split sub-patterns as they are
    pub fn from_sub_patterns<I, S>(sub_patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sub_patterns: sub_patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn sub_patterns(&self) -> &[String] {
        &self.sub_patterns
    }

    pub fn is_empty(&self) -> bool {
        self.sub_patterns.is_empty()
    }

    /// The group written back in its comma-joined form
    pub fn text(&self) -> String {
        let separator = SUB_PATTERN_SEPARATOR.to_string();
        self.sub_patterns.join(separator.as_str())
    }
}

/// What a caller hands the compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentence {
    /// Raw command-line tokens, normalized then split on commas
    Argv(Vec<String>),
    /// Groups whose sub-patterns were split by the caller
    Grouped(Vec<Vec<String>>),
}

impl Sentence {
    pub fn groups(&self) -> Vec<PatternGroup> {
        match self {
            Sentence::Argv(argv) => normalize(argv.as_slice())
                .iter()
                .map(|group| PatternGroup::parse(group))
                .collect(),
            Sentence::Grouped(groups) => groups
                .iter()
                .map(|group| PatternGroup::from_sub_patterns(group.iter().cloned()))
                .collect(),
        }
    }
}

/// Split `"test* -- --watch"` into the pattern and its inline arguments
pub fn split_inline_args(sub_pattern: &str) -> (&str, Vec<&str>) {
    let mut parts = sub_pattern.split(INLINE_ARGS_SEPARATOR);
    let pattern = parts.next().unwrap_or_default();
    (pattern, parts.collect())
}
