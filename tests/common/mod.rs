use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

static INIT: Once = Once::new();

/// Routes `tracing` spans and `log` records to the test output.
///
/// Set `RUST_LOG=spacemath=debug` to see the degenerate input warnings.
pub fn init_logging() {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .finish();
        // another test harness may already own the global subscriber
        let _ = tracing::subscriber::set_global_default(subscriber);
        let _ = tracing_log::LogTracer::init();
    });
}
