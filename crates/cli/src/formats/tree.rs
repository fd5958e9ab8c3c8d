use crate::formats::PlanFormatter;
use runglob_core::Result;
use runglob_task::{Script, Step, TaskGraph};

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const VERTICAL: &str = "│  ";
const SPACE: &str = "   ";

/// One line per group, phase, step and script
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_step(&self, output: &mut String, prefix: &str, step: &Step) {
        let scripts: Vec<(&str, &Script)> = [
            step.pre.as_ref().map(|script| ("pre", script)),
            Some(("main", &step.main)),
            step.post.as_ref().map(|script| ("post", script)),
        ]
        .into_iter()
        .flatten()
        .collect();

        for (i, (role, script)) in scripts.iter().enumerate() {
            let symbol = if i + 1 == scripts.len() { LAST_BRANCH } else { BRANCH };
            let shell = if script.can_spawn() { "" } else { "  (shell)" };
            output.push_str(&format!(
                "{prefix}{symbol}{role:<4} {}: {}{shell}\n",
                script.name(),
                script.raw()
            ));
        }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn branch(last: bool) -> (&'static str, &'static str) {
    if last {
        (LAST_BRANCH, SPACE)
    } else {
        (BRANCH, VERTICAL)
    }
}

impl PlanFormatter for TreeFormatter {
    fn format_plan(&self, graph: &TaskGraph) -> Result<String> {
        let mut output = String::new();

        for (g, group) in graph.groups.iter().enumerate() {
            output.push_str(&format!("group {}: {}\n", g + 1, group.pattern));

            for (p, phase) in group.phases.iter().enumerate() {
                let (symbol, indent) = branch(p + 1 == group.phases.len());
                output.push_str(&format!("{symbol}phase {}: {}\n", p + 1, phase.pattern));

                for (s, step) in phase.steps.iter().enumerate() {
                    let (step_symbol, step_indent) = branch(s + 1 == phase.steps.len());
                    output.push_str(&format!("{indent}{step_symbol}{}\n", step.name()));
                    self.format_step(&mut output, &format!("{indent}{step_indent}"), step);
                }
            }
        }

        Ok(output)
    }
}
