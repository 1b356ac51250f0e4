use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStoreBackend {
    Memory,
    Redis,
}

impl ProfileStoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "redis" => Some(Self::Redis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub profile_store: ProfileStoreBackend,
    pub redis_uri: Option<String>,
    /// Artificial "thinking" delay before an assistant reply is applied.
    pub assistant_delay_ms: u64,
    /// Length of one quiz countdown tick. One tick removes one second from the clock.
    pub quiz_tick_ms: u64,
    pub metrics_auth: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8081".to_string(),
            profile_store: ProfileStoreBackend::Memory,
            redis_uri: None,
            assistant_delay_ms: 1500,
            quiz_tick_ms: 1000,
            metrics_auth: "admin:changeme".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Root .env first, then the local one
        let skip_root_env = env::var("SKIP_ROOT_ENV").is_ok();
        if skip_root_env {
            dotenvy::dotenv().ok();
        } else if dotenvy::from_path("../../.env").is_err() {
            dotenvy::dotenv().ok();
        }

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // config/*.toml + ENV overrides (prefix: APP_)
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let defaults = Config::default();

        let bind_addr = settings
            .get_string("server.bind_addr")
            .or_else(|_| env::var("BIND_ADDR"))
            .unwrap_or(defaults.bind_addr);

        let redis_uri = settings
            .get_string("redis.uri")
            .or_else(|_| env::var("REDIS_URI"))
            .ok();

        let backend_name = settings
            .get_string("storage.backend")
            .or_else(|_| env::var("PROFILE_STORE"))
            .ok();
        let profile_store = match backend_name {
            Some(name) => ProfileStoreBackend::parse(&name).ok_or_else(|| {
                config::ConfigError::Message(format!("Unknown profile store backend: {}", name))
            })?,
            None if redis_uri.is_some() => ProfileStoreBackend::Redis,
            None => defaults.profile_store,
        };

        if profile_store == ProfileStoreBackend::Redis && redis_uri.is_none() {
            return Err(config::ConfigError::Message(
                "storage.backend = redis requires redis.uri (or REDIS_URI)".to_string(),
            ));
        }

        let assistant_delay_ms = settings
            .get_int("assistant.delay_ms")
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .or_else(|| env_u64("ASSISTANT_DELAY_MS"))
            .unwrap_or(defaults.assistant_delay_ms);

        let quiz_tick_ms = settings
            .get_int("quiz.tick_ms")
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .or_else(|| env_u64("QUIZ_TICK_MS"))
            .filter(|v| *v > 0)
            .unwrap_or(defaults.quiz_tick_ms);

        let metrics_auth = settings
            .get_string("metrics.auth")
            .or_else(|_| env::var("METRICS_AUTH"))
            .unwrap_or(defaults.metrics_auth);

        Ok(Config {
            bind_addr,
            profile_store,
            redis_uri,
            assistant_delay_ms,
            quiz_tick_ms,
            metrics_auth,
        })
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "SKIP_ROOT_ENV",
            "BIND_ADDR",
            "REDIS_URI",
            "PROFILE_STORE",
            "ASSISTANT_DELAY_MS",
            "QUIZ_TICK_MS",
            "METRICS_AUTH",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn load_uses_defaults_without_overrides() {
        clear_env();
        env::set_var("SKIP_ROOT_ENV", "1");

        let config = Config::load().unwrap();
        assert_eq!(config.profile_store, ProfileStoreBackend::Memory);
        assert_eq!(config.assistant_delay_ms, 1500);
        assert_eq!(config.quiz_tick_ms, 1000);
        assert!(config.redis_uri.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn redis_uri_selects_redis_backend() {
        clear_env();
        env::set_var("SKIP_ROOT_ENV", "1");
        env::set_var("REDIS_URI", "redis://127.0.0.1:6379/0");

        let config = Config::load().unwrap();
        assert_eq!(config.profile_store, ProfileStoreBackend::Redis);

        clear_env();
    }

    #[test]
    #[serial]
    fn redis_backend_without_uri_is_rejected() {
        clear_env();
        env::set_var("SKIP_ROOT_ENV", "1");
        env::set_var("PROFILE_STORE", "redis");

        assert!(Config::load().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn zero_tick_falls_back_to_default() {
        clear_env();
        env::set_var("SKIP_ROOT_ENV", "1");
        env::set_var("QUIZ_TICK_MS", "0");
        env::set_var("ASSISTANT_DELAY_MS", "25");

        let config = Config::load().unwrap();
        assert_eq!(config.quiz_tick_ms, 1000);
        assert_eq!(config.assistant_delay_ms, 25);

        clear_env();
    }
}
