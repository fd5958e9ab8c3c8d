use crate::formats::PlanFormatter;
use runglob_core::Result;
use runglob_task::TaskGraph;

pub struct JsonFormatter {}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanFormatter for JsonFormatter {
    fn format_plan(&self, graph: &TaskGraph) -> Result<String> {
        let mut output = serde_json::to_string_pretty(graph)?;
        output.push('\n');
        Ok(output)
    }
}
