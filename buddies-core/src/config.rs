//! Game configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default model for encouragement phrases.
pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";

/// Delay between a correct answer and the next problem.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

/// Per-request budget for the encouragement call.
pub const DEFAULT_ENCOURAGEMENT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Runtime configuration for a game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Credential for the encouragement service. `None` disables the service.
    pub api_key: Option<String>,
    /// Model identifier sent with each encouragement request.
    pub model: String,
    /// How long success feedback stays up before the next problem.
    pub advance_delay: Duration,
    /// Timeout for one encouragement request.
    pub encouragement_timeout: Duration,
    /// Directory for the log file.
    pub log_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            advance_delay: DEFAULT_ADVANCE_DELAY,
            encouragement_timeout: DEFAULT_ENCOURAGEMENT_TIMEOUT,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl GameConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ANTHROPIC_API_KEY` - encouragement service credential (optional)
    /// - `BUDDIES_MODEL` - model identifier (default: claude-3-5-haiku-latest)
    /// - `BUDDIES_ADVANCE_DELAY_MS` - delay before the next problem (default: 2000)
    /// - `BUDDIES_ENCOURAGEMENT_TIMEOUT_MS` - request timeout (default: 5000)
    /// - `BUDDIES_LOG_DIR` - log directory (default: logs)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Some(model) = env::var("BUDDIES_MODEL").ok().filter(|m| !m.is_empty()) {
            config.model = model;
        }
        if let Some(ms) = read_env::<u64>("BUDDIES_ADVANCE_DELAY_MS") {
            config.advance_delay = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read_env::<u64>("BUDDIES_ENCOURAGEMENT_TIMEOUT_MS") {
            config.encouragement_timeout = Duration::from_millis(ms.max(1));
        }
        if let Some(dir) = env::var_os("BUDDIES_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    pub fn with_encouragement_timeout(mut self, timeout: Duration) -> Self {
        self.encouragement_timeout = timeout;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.advance_delay, Duration::from_millis(2000));
        assert_eq!(config.encouragement_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default()
            .with_api_key("k")
            .with_advance_delay(Duration::from_millis(10))
            .with_encouragement_timeout(Duration::from_millis(20));
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.advance_delay, Duration::from_millis(10));
        assert_eq!(config.encouragement_timeout, Duration::from_millis(20));
    }

    #[test]
    fn test_read_env_rejects_garbage() {
        // Unique key so parallel tests cannot interfere.
        let key = "BUDDIES_TEST_READ_ENV_GARBAGE";
        assert_eq!(read_env::<u64>(key), None);

        env::set_var(key, "soon");
        assert_eq!(read_env::<u64>(key), None);

        env::set_var(key, " 42 ");
        assert_eq!(read_env::<u64>(key), Some(42));
        env::remove_var(key);
    }
}
