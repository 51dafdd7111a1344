use tracing_subscriber::EnvFilter;


// RUST_LOG=ordmap=trace shows tombstoning/append events under `cargo test -- --nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
