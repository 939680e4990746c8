//! Shared test setup: route `tracing` output through the test harness.
//! Set `RUST_LOG=equation_core=trace` to see solver logs.

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
