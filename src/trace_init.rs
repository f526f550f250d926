//! JSON trace output for hosts embedding the engine through the C ABI.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "bnansi-trace.jsonl";
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "bnansi_core=debug";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Route core conversion spans and step events to `<log_dir>/bnansi-trace.jsonl`.
/// Only the first call installs the subscriber. `RUST_LOG` overrides the filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // The C ABI has no shutdown call to hand the guard back through, and
        // dropping it here would stop the writer thread. Leak it for the life
        // of the loaded library.
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
