//! Logging setup for the command-line driver.

use crate::config::Config;
use env_logger::{Builder, Env};

/// Initializes `env_logger`.
///
/// `RUST_LOG` wins when set; otherwise `config.log_level` applies to every module.
pub fn init_logger(config: &Config) {
    let env = Env::default().filter_or("RUST_LOG", config.log_level.as_str());
    Builder::from_env(env).format_timestamp(None).init();

    log::debug!("Logger initialized with default level {}", config.log_level);
}
