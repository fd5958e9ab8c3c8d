pub mod json;
pub mod tree;

use runglob_core::Result;
use runglob_task::TaskGraph;

/// Supported plan output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlanFormat {
    Tree,
    Json,
}

impl PlanFormat {
    pub fn formatter(self) -> Box<dyn PlanFormatter> {
        match self {
            PlanFormat::Tree => Box::new(tree::TreeFormatter::new()),
            PlanFormat::Json => Box::new(json::JsonFormatter::new()),
        }
    }
}

/// Trait for rendering a compiled plan
pub trait PlanFormatter {
    fn format_plan(&self, graph: &TaskGraph) -> Result<String>;
}
