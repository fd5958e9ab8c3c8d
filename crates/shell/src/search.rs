//! Executable resolution against an explicit search path

use runglob_core::{LOCAL_BIN_DIR, NODE_MODULES_DIR};
use std::env;
use std::path::{Path, PathBuf};

/// Where to look for executables, and which directory results are
/// relative to.
///
/// This is a plain value rather than process-wide state so that plan
/// compilation stays referentially transparent and tests can run in
/// parallel with different search paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    cwd: PathBuf,
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path from explicit directories
    pub fn new(cwd: impl Into<PathBuf>, dirs: Vec<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            dirs,
        }
    }

    /// The process working directory, its local binary directories, then `PATH`
    pub fn ambient() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::for_project(&cwd, cwd.clone())
    }

    /// Local binary directories of `root` and its ancestors, then `PATH`.
    ///
    /// Resolved executables are expressed relative to `cwd`.
    pub fn for_project(root: &Path, cwd: impl Into<PathBuf>) -> Self {
        let mut dirs = local_bin_dirs(root);
        if let Some(path) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&path));
        }
        Self::new(cwd, dirs)
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Resolve `program` to an executable path.
    ///
    /// Failures are logged at debug level and reported as `None`.
    pub fn resolve(&self, program: &str) -> Option<PathBuf> {
        let joined = match env::join_paths(&self.dirs) {
            Ok(joined) => joined,
            Err(e) => {
                tracing::debug!(program = %program, error = %e, "search path cannot be joined");
                return None;
            }
        };

        match which::which_in(program, Some(joined), &self.cwd) {
            Ok(path) if path.is_relative() => Some(self.cwd.join(path)),
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(program = %program, error = %e, "executable not resolved");
                None
            }
        }
    }
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::ambient()
    }
}

/// `<dir>/node_modules/.bin` for `root` and every ancestor, nearest first
pub fn local_bin_dirs(root: &Path) -> Vec<PathBuf> {
    root.ancestors()
        .map(|dir| dir.join(NODE_MODULES_DIR).join(LOCAL_BIN_DIR))
        .collect()
}

/// Whether `path` sits directly inside a local binaries directory
pub fn is_local_bin(path: &Path) -> bool {
    path.parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == LOCAL_BIN_DIR)
}
