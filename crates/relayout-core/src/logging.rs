use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "relayout=info,relayout_core=info";
const QUIET_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Events are written to stderr as JSON lines so stdout stays clean for
/// tables and `--json` output. `RUST_LOG` overrides the built-in filter.
pub fn init_logging(quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet)));

    // try_init: a second call (e.g. from tests) must not panic
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_current_span(false)
        .try_init();
}

fn default_filter(quiet: bool) -> &'static str {
    if quiet { QUIET_FILTER } else { DEFAULT_FILTER }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(true), "warn");
        assert!(default_filter(false).contains("relayout_core=info"));
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }
}
