//! Logging setup
//!
//! Priority: RUST_LOG env var > --debug flag > config `log_level` > "warn".
//! Output goes to stderr so list output on stdout stays clean.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the filter directive for the given inputs
pub fn filter_directive(
    env_value: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(env) = env_value {
        env.to_string()
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Initialise the tracing subscriber. Call once from `main`.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_value = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env_value.as_deref(), debug_flag, config_level);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        filter = %directive,
        "Logging initialised"
    );
}
