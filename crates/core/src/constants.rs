/// Constants used throughout the runglob codebase
// Lifecycle script conventions
pub const BEFORE_PREFIX: &str = "pre";
pub const AFTER_PREFIX: &str = "post";

// Pattern syntax
pub const SUB_PATTERN_SEPARATOR: char = ',';
pub const INLINE_ARGS_SEPARATOR: &str = " -- ";

// Local executable shims
pub const LOCAL_BIN_DIR: &str = ".bin";
pub const NODE_MODULES_DIR: &str = "node_modules";
pub const DEFAULT_INTERPRETER: &str = "node";
pub const PRELOAD_FLAG: &str = "--require";

// Manifest
pub const MANIFEST_FILENAME: &str = "package.json";
pub const MANIFEST_OPTIONS_KEY: &str = "runglob";

// Environment variable names
pub const RUNGLOB_SERIAL_VAR: &str = "RUNGLOB_SERIAL";
pub const RUNGLOB_RAW_VAR: &str = "RUNGLOB_RAW";
pub const RUNGLOB_REQUIRE_VAR: &str = "RUNGLOB_REQUIRE";
pub const RUNGLOB_INTERPRETER_VAR: &str = "RUNGLOB_INTERPRETER";
pub const RUNGLOB_LOG_VAR: &str = "RUNGLOB_LOG";
