use runglob_core::RUNGLOB_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// The filter is read from `RUNGLOB_LOG`. When it is unset, `verbosity`
/// picks the default level: 0 is `warn`, 1 is `info`, 2 is `debug`, more is
/// `trace`. Output always goes to stderr so stdout stays a clean plan.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = match std::env::var(RUNGLOB_LOG_VAR) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(default_directive(verbosity))?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Map a `-v` count to a default filter directive
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span for compiling one plan
pub fn compile_span(groups: usize) -> Span {
    span!(Level::INFO, "compile", groups = %groups)
}

/// Create a span for one pattern group
pub fn group_span(index: usize, pattern: &str) -> Span {
    span!(Level::DEBUG, "group", index = %index, pattern = %pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "trace");
    }

    #[test]
    fn test_spans_do_not_require_a_subscriber() {
        let span = compile_span(2);
        let _guard = span.enter();
        let inner = group_span(0, "test*");
        let _inner = inner.enter();
    }
}
