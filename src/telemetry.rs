//! Subscriber setup for binaries that embed the codec.
//!
//! The codec only emits `tracing` events and never installs a subscriber.
//! Hosts call [`init_tracing`] once from `main`.

use crate::config::parse_env;
use crate::error::TokenError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Output settings read from `LOG_LEVEL` and `LOG_JSON`.
#[derive(Debug, PartialEq, Eq)]
struct LogSettings {
    level: String,
    json: bool,
}

impl LogSettings {
    fn from_env() -> Result<Self, TokenError> {
        Ok(Self {
            level: parse_env("LOG_LEVEL", DEFAULT_LOG_LEVEL.to_string())?,
            json: parse_env("LOG_JSON", false)?,
        })
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `LOG_LEVEL` (default `info`); `LOG_JSON=true`
/// switches to JSON lines.
///
/// # Errors
///
/// Returns [`TokenError::Config`] if `LOG_JSON` is not a bool or a global
/// subscriber is already installed.
pub fn init_tracing() -> Result<(), TokenError> {
    let settings = LogSettings::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if settings.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    installed.map_err(|e| TokenError::config(format!("tracing already initialized: {e}")))
}
