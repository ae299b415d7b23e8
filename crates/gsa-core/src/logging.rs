//! Structured logging setup
//!
//! Logs go to stderr so stdout stays clean for traversal output. Filter
//! precedence: `RUST_LOG`, then `GSA_LOG`, then the CLI flags.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const ENV_OVERRIDE: &str = "GSA_LOG";
const TARGETS: [&str; 2] = ["gsa", "gsa_core"];

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "build_tree");
/// // Or with additional fields:
/// trace_time!(start, "build_tree", depth = depth);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Logging options collected from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// `--verbose`: debug level for gsa targets
    pub verbose: bool,
    /// `--log-level`: a bare level (`trace`) or a full filter directive
    pub level: Option<String>,
    /// `--log-json`: emit JSON lines with span open/close events
    pub json: bool,
}

impl LogOptions {
    /// Filter directive used when no environment override is set
    pub fn directive(&self) -> String {
        let level = match (&self.level, self.verbose) {
            (Some(level), _) if level.contains('=') => return level.clone(),
            (Some(level), _) => level.as_str(),
            (None, true) => "debug",
            (None, false) => "warn",
        };
        TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(opts: &LogOptions) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(ENV_OVERRIDE))
        .unwrap_or_else(|_| EnvFilter::new(opts.directive()));

    let registry = tracing_subscriber::registry().with(filter);

    if opts.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_is_warn() {
        assert_eq!(LogOptions::default().directive(), "gsa=warn,gsa_core=warn");
    }

    #[test]
    fn test_verbose_directive_is_debug() {
        let opts = LogOptions {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(opts.directive(), "gsa=debug,gsa_core=debug");
    }

    #[test]
    fn test_bare_level_overrides_verbose() {
        let opts = LogOptions {
            verbose: true,
            level: Some("trace".to_string()),
            json: false,
        };
        assert_eq!(opts.directive(), "gsa=trace,gsa_core=trace");
    }

    #[test]
    fn test_full_directive_passes_through() {
        let opts = LogOptions {
            level: Some("gsa_core::traversal=trace".to_string()),
            ..Default::default()
        };
        assert_eq!(opts.directive(), "gsa_core::traversal=trace");
    }
}
