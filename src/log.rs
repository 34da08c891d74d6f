use serde_derive::Deserialize;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{fmt::time::ChronoUtc, fmt::Subscriber, EnvFilter};

pub const LOG_ENV: &str = "TASKBOARD_LOG";

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: String,
    #[serde(default)]
    pub structured: bool,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            structured: false,
        }
    }
}

/// setup log from an optional environment filter and the config file
///
/// if the environment filter is present, then the config level is not used
pub fn setup(
    env_filter: Result<EnvFilter, tracing_subscriber::filter::FromEnvError>,
    config: Option<&Log>,
) -> Result<(), SetGlobalDefaultError> {
    let config = config.cloned().unwrap_or_default();
    let env_filter = env_filter.unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.structured {
        let ss = Subscriber::builder()
            .json()
            .with_timer(ChronoUtc::rfc3339())
            .with_env_filter(env_filter)
            .finish();
        tracing::subscriber::set_global_default(ss)
    } else {
        let ss = Subscriber::builder()
            .with_timer(ChronoUtc::rfc3339())
            .with_level(true)
            .with_env_filter(env_filter)
            .with_ansi(true)
            .finish();
        tracing::subscriber::set_global_default(ss)
    }
}
