//! Client configuration
//!
//! Defaults merged with `EMPLOYEE_MANAGER_*` environment variables, e.g.
//! `EMPLOYEE_MANAGER_API_URL=http://10.0.0.5:5000`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_URL;
use crate::routes::Route;

pub const ENV_PREFIX: &str = "EMPLOYEE_MANAGER_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
    pub token_file: PathBuf,
    pub storage_poll_ms: u64,
    pub log_level: String,
    pub start_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_file: default_token_file(),
            storage_poll_ms: 1000,
            log_level: "info".to_string(),
            start_route: "/".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self> {
        Self::figment()
            .extract()
            .with_context(|| format!("invalid {ENV_PREFIX}* configuration"))
    }

    /// Unknown paths fall back to the dashboard
    pub fn start_route(&self) -> Route {
        Route::parse(&self.start_route).unwrap_or(Route::Home)
    }

    pub fn storage_poll_interval(&self) -> Duration {
        Duration::from_millis(self.storage_poll_ms.max(100))
    }
}

fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".employee-manager")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert!(cfg.token_file.ends_with(".employee-manager/session.json"));
        assert_eq!(cfg.start_route(), Route::Home);
        assert_eq!(cfg.storage_poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("EMPLOYEE_MANAGER_API_URL", "http://10.0.0.5:5000");
            jail.set_env("EMPLOYEE_MANAGER_STORAGE_POLL_MS", "250");
            jail.set_env("EMPLOYEE_MANAGER_START_ROUTE", "/employees");
            jail.set_env("EMPLOYEE_MANAGER_TOKEN_FILE", "/tmp/em/session.json");

            let cfg: ClientConfig = ClientConfig::figment().extract()?;
            assert_eq!(cfg.api_url, "http://10.0.0.5:5000");
            assert_eq!(cfg.storage_poll_interval(), Duration::from_millis(250));
            assert_eq!(cfg.start_route(), Route::Employees);
            assert_eq!(cfg.token_file, PathBuf::from("/tmp/em/session.json"));
            assert_eq!(cfg.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn unknown_start_route_and_tiny_poll_interval_are_clamped() {
        let cfg = ClientConfig {
            start_route: "/reports".to_string(),
            storage_poll_ms: 1,
            ..ClientConfig::default()
        };
        assert_eq!(cfg.start_route(), Route::Home);
        assert_eq!(cfg.storage_poll_interval(), Duration::from_millis(100));
    }
}
