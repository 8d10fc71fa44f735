use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str =
    "warn,cashflow=debug,cashflow_core=debug,cashflow_domain=debug,cashflow_storage_json=debug";

/// Installs the global subscriber, writing to stderr so command output stays clean.
///
/// `RUST_LOG` takes precedence over the built-in defaults.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed by an embedding application or test harness.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
