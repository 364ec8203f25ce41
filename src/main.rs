use hello_function::utils::{logger, validation::Validate};
use hello_function::{FunctionConfig, FunctionEngine, LogConfig, StdIo, Transformer};

fn main() {
    // Logging goes to stderr only; a bad RUST_LOG falls back to the default filter.
    let log_config = LogConfig::from_env();
    let log_config_error = log_config.validate().err();
    logger::init_logger(&log_config);
    if let Some(e) = log_config_error {
        tracing::warn!("Ignoring RUST_LOG: {}", e);
    }

    let engine = FunctionEngine::new(Transformer::new(FunctionConfig::default()));
    let mut io = StdIo::new();

    // No failure is user-visible; the exit status stays 0.
    if let Err(e) = engine.run(&mut io) {
        tracing::error!("Failed to emit result: {}", e);
    }
}
