// Copyright 2025 The talon Authors
//
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
//

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::Result;

pub const SOCK_ADDR_ENV: &str = "APISIX_LISTEN_ADDRESS";
pub const CONF_CACHE_TTL_ENV: &str = "APISIX_CONF_EXPIRE_TIME";

// The conf cached here must outlive the token the gateway caches for the
// same configuration generation.
const TTL_AMPLIFICATION: f64 = 1.2;
const DEFAULT_TTL_SECS: u64 = 3600;

/// Everything the runner reads from its environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub socket_path: PathBuf,
    pub conf_cache_ttl: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Ok(Settings { socket_path: socket_path_from_env()?, conf_cache_ttl: conf_cache_ttl_from_env()? })
    }
}

pub(crate) fn default_conf_cache_ttl() -> Duration {
    amplify(DEFAULT_TTL_SECS)
}

fn amplify(secs: u64) -> Duration {
    Duration::from_secs_f64(secs as f64 * TTL_AMPLIFICATION)
}

fn socket_path_from_env() -> Result<PathBuf> {
    let addr = env::var(SOCK_ADDR_ENV).unwrap_or_default();
    match addr.strip_prefix("unix:") {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(format!(
            "invalid socket address {addr:?}, set a unix: address via environment variable {SOCK_ADDR_ENV}"
        )
        .into()),
    }
}

fn conf_cache_ttl_from_env() -> Result<Duration> {
    let raw = env::var(CONF_CACHE_TTL_ENV).unwrap_or_default();
    if raw.is_empty() {
        return Ok(default_conf_cache_ttl());
    }
    match raw.parse::<i64>() {
        Ok(secs) if secs > 0 => Ok(amplify(secs as u64)),
        _ => Err(format!("invalid cache ttl {raw:?} in environment variable {CONF_CACHE_TTL_ENV}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // env mutation is process global, so one test walks through every case
    #[test]
    fn settings_from_env() {
        env::remove_var(SOCK_ADDR_ENV);
        env::remove_var(CONF_CACHE_TTL_ENV);
        assert!(Settings::from_env().is_err());

        env::set_var(SOCK_ADDR_ENV, "/tmp/runner.sock");
        assert!(Settings::from_env().is_err(), "missing unix: prefix must be fatal");

        env::set_var(SOCK_ADDR_ENV, "unix:/tmp/runner.sock");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.socket_path, PathBuf::from("/tmp/runner.sock"));
        assert_eq!(settings.conf_cache_ttl, Duration::from_secs_f64(3600.0 * 1.2));

        env::set_var(CONF_CACHE_TTL_ENV, "10");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.conf_cache_ttl, Duration::from_secs_f64(12.0));

        env::set_var(CONF_CACHE_TTL_ENV, "0");
        assert!(Settings::from_env().is_err());
        env::set_var(CONF_CACHE_TTL_ENV, "-5");
        assert!(Settings::from_env().is_err());
        env::set_var(CONF_CACHE_TTL_ENV, "ten");
        assert!(Settings::from_env().is_err());

        env::remove_var(SOCK_ADDR_ENV);
        env::remove_var(CONF_CACHE_TTL_ENV);
    }
}
