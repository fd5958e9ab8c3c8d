//! Entry point for hosts that own the manifest and the command line

use crate::builder::TaskGraphBuilder;
use crate::graph::TaskGraph;
use crate::pattern::Sentence;
use runglob_config::{PlanOptions, ScriptTable};
use runglob_core::Result;

/// Everything needed to compile one plan.
///
/// A host fills this in when its trigger fires, calls [`PlanRequest::compile`],
/// and hands the returned graph to its executor.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub sentence: Sentence,
    pub scripts: ScriptTable,
    pub options: PlanOptions,
}

impl PlanRequest {
    pub fn new(sentence: Sentence, scripts: ScriptTable, options: PlanOptions) -> Self {
        Self {
            sentence,
            scripts,
            options,
        }
    }

    pub fn compile(&self) -> Result<TaskGraph> {
        TaskGraphBuilder::new(&self.scripts, &self.options).build_sentence(&self.sentence)
    }
}
