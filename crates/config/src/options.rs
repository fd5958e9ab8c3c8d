//! Typed plan options and their layering

use runglob_core::DEFAULT_INTERPRETER;
use runglob_shell::SearchPath;
use serde::Deserialize;

/// Fully resolved options consumed by the plan builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOptions {
    /// Give every match its own phase instead of running matches in parallel
    pub serial: bool,
    /// Treat a pattern that matches nothing as a literal shell command
    pub raw: bool,
    /// Arguments appended, space-joined, to every constructed command
    pub suffixes: Vec<String>,
    /// Module to preload when a command runs a local executable shim
    pub require: Option<String>,
    /// Interpreter used for preload rewrites
    pub interpreter: String,
    /// Where local executables are resolved
    pub search_path: SearchPath,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            serial: false,
            raw: false,
            suffixes: Vec::new(),
            require: None,
            interpreter: DEFAULT_INTERPRETER.to_string(),
            search_path: SearchPath::ambient(),
        }
    }
}

impl PlanOptions {
    /// Defaults with an explicit search path
    pub fn with_search_path(search_path: SearchPath) -> Self {
        Self {
            search_path,
            ..Self::default()
        }
    }

    /// Apply `layers` on top of `self`, least specific first
    pub fn layered(self, layers: impl IntoIterator<Item = PartialOptions>) -> Self {
        layers
            .into_iter()
            .fold(PartialOptions::default(), PartialOptions::overlay)
            .apply_to(self)
    }

    pub fn serial(mut self, serial: bool) -> Self {
        self.serial = serial;
        self
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn require(mut self, module: impl Into<String>) -> Self {
        self.require = Some(module.into());
        self
    }

    pub fn interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }
}

/// Options from a single source; unset fields defer to less specific sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialOptions {
    pub serial: Option<bool>,
    pub raw: Option<bool>,
    pub suffixes: Option<Vec<String>>,
    pub require: Option<String>,
    pub interpreter: Option<String>,
}

impl PartialOptions {
    /// Combine with a more specific source, which wins field by field.
    ///
    /// Suffix lists are replaced, not concatenated.
    pub fn overlay(self, specific: PartialOptions) -> PartialOptions {
        PartialOptions {
            serial: specific.serial.or(self.serial),
            raw: specific.raw.or(self.raw),
            suffixes: specific.suffixes.or(self.suffixes),
            require: specific.require.or(self.require),
            interpreter: specific.interpreter.or(self.interpreter),
        }
    }

    /// Fill `base` with every field this source sets
    pub fn apply_to(self, base: PlanOptions) -> PlanOptions {
        PlanOptions {
            serial: self.serial.unwrap_or(base.serial),
            raw: self.raw.unwrap_or(base.raw),
            suffixes: self.suffixes.unwrap_or(base.suffixes),
            require: self.require.or(base.require),
            interpreter: self.interpreter.unwrap_or(base.interpreter),
            search_path: base.search_path,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == PartialOptions::default()
    }
}
