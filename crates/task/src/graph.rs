//! The compiled execution plan

use crate::script::Script;
use serde::Serialize;

/// A script bracketed by its optional `pre` and `post` scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre: Option<Script>,
    pub main: Script,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Script>,
}

impl Step {
    /// A step with no `pre` or `post` script
    pub fn new(main: Script) -> Self {
        Self {
            pre: None,
            main,
            post: None,
        }
    }

    pub fn name(&self) -> &str {
        self.main.name()
    }

    /// The step's scripts in execution order
    pub fn scripts(&self) -> impl Iterator<Item = &Script> {
        self.pre
            .iter()
            .chain(std::iter::once(&self.main))
            .chain(self.post.iter())
    }
}

/// Steps that may run concurrently
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    /// The sub-pattern this phase was compiled from
    pub pattern: String,
    pub steps: Vec<Step>,
}

impl Phase {
    pub fn new(pattern: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            pattern: pattern.into(),
            steps,
        }
    }
}

/// Phases that run strictly one after another
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// The comma-joined group text
    pub pattern: String,
    pub phases: Vec<Phase>,
}

/// The whole plan: groups in caller order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskGraph {
    pub groups: Vec<Group>,
}

impl TaskGraph {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every step, depth first
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.groups
            .iter()
            .flat_map(|group| group.phases.iter())
            .flat_map(|phase| phase.steps.iter())
    }

    pub fn step_count(&self) -> usize {
        self.steps().count()
    }

    /// Every script, depth first, `pre` before `main` before `post`
    pub fn scripts(&self) -> impl Iterator<Item = &Script> {
        self.steps().flat_map(Step::scripts)
    }
}
