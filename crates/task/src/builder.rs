//! Task graph builder
//!
//! Compiles pattern groups against a script table into a [`TaskGraph`].
//! Compilation is all-or-nothing: the first sub-pattern that matches no
//! script (with raw fallback disabled) aborts the build.

use crate::graph::{Group, Phase, Step, TaskGraph};
use crate::pattern::{split_inline_args, PatternGroup, Sentence};
use crate::resolver::resolve;
use crate::script::{Script, ScriptOptions};
use runglob_config::{PlanOptions, ScriptTable};
use runglob_core::{Error, Result};
use runglob_shell::Preload;
use runglob_utils::tracing::{compile_span, group_span};

/// Builds task graphs for one script table and one set of options
#[derive(Debug, Clone, Copy)]
pub struct TaskGraphBuilder<'a> {
    scripts: &'a ScriptTable,
    options: &'a PlanOptions,
}

impl<'a> TaskGraphBuilder<'a> {
    pub fn new(scripts: &'a ScriptTable, options: &'a PlanOptions) -> Self {
        Self { scripts, options }
    }

    /// Compile a caller-supplied sentence
    pub fn build_sentence(&self, sentence: &Sentence) -> Result<TaskGraph> {
        self.build(&sentence.groups())
    }

    /// Normalize raw command-line tokens and compile them
    pub fn build_argv<S: AsRef<str>>(&self, argv: &[S]) -> Result<TaskGraph> {
        let groups: Vec<PatternGroup> = crate::normalize::normalize(argv)
            .iter()
            .map(|group| PatternGroup::parse(group))
            .collect();
        self.build(&groups)
    }

    /// Compile pattern groups, in order
    pub fn build(&self, groups: &[PatternGroup]) -> Result<TaskGraph> {
        let span = compile_span(groups.len());
        let _enter = span.enter();

        let groups = groups
            .iter()
            .enumerate()
            .map(|(index, group)| self.build_group(index, group))
            .collect::<Result<Vec<_>>>()?;

        let graph = TaskGraph { groups };
        tracing::debug!(steps = graph.step_count(), "compiled task graph");
        Ok(graph)
    }

    fn build_group(&self, index: usize, group: &PatternGroup) -> Result<Group> {
        let text = group.text();
        let span = group_span(index, &text);
        let _enter = span.enter();

        let mut phases = Vec::new();
        for sub_pattern in group.sub_patterns() {
            self.compile_sub_pattern(sub_pattern, &mut phases)?;
        }

        if phases.is_empty() {
            return Err(Error::no_match(text));
        }

        Ok(Group {
            pattern: text,
            phases,
        })
    }

    fn compile_sub_pattern(&self, sub_pattern: &str, phases: &mut Vec<Phase>) -> Result<()> {
        let (pattern, inline_args) = split_inline_args(sub_pattern);

        // inline arguments come before the globally configured suffixes
        let suffix = inline_args
            .into_iter()
            .chain(self.options.suffixes.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");

        let script_options = ScriptOptions {
            suffix: Some(suffix.as_str()),
            preload: self.preload(),
            raw: false,
        };

        let steps = resolve(pattern, self.scripts, &script_options);

        if steps.is_empty() {
            if !self.options.raw {
                return Err(Error::no_match(pattern));
            }
            tracing::debug!(pattern = %pattern, "no script matched, running as a shell command");
            let raw_options = ScriptOptions {
                raw: true,
                ..script_options
            };
            let main = Script::with_options(pattern, pattern, &raw_options);
            phases.push(Phase::new(pattern, vec![Step::new(main)]));
            return Ok(());
        }

        let mut parallel = Vec::with_capacity(steps.len());
        for step in steps {
            if self.options.serial && !parallel.is_empty() {
                phases.push(Phase::new(pattern, std::mem::take(&mut parallel)));
            }
            parallel.push(step);
        }
        phases.push(Phase::new(pattern, parallel));

        Ok(())
    }

    fn preload(&self) -> Option<Preload<'a>> {
        let options = self.options;
        options.require.as_deref().map(|module| Preload {
            module,
            interpreter: options.interpreter.as_str(),
            search: &options.search_path,
        })
    }
}
