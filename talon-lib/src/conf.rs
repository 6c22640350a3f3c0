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

//! The configuration cache.
//!
//! The gateway parses plugin configuration once per change, trades it for a
//! token here, and then refers to the token on every request. Two TTL caches
//! share one lock: idempotency key to token, and token to parsed rule
//! config. Entry lifetime counts from insertion; reads do not extend it.

use std::sync::Arc;
use std::time::Duration;

use compact_str::CompactString;
use lru_time_cache::LruCache;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::{error, info, warn};

use talon_proto::{prepare_conf, take_builder, PooledBuilder};
use talon_sdk::PluginConf;

use crate::error::CallError;
use crate::registry;
use crate::settings;

/// One `(plugin, parsed conf)` pair of a route's rule config.
pub struct ConfEntry {
    pub name: CompactString,
    pub conf: PluginConf,
}

/// The ordered plugin configuration for one route. Filters run in exactly
/// this order.
pub type RuleConf = Vec<ConfEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("conf token not found: {0}")]
pub struct TokenNotFound(pub u32);

struct ConfCache {
    token_cache: LruCache<u32, Arc<RuleConf>>,
    key_cache: LruCache<String, u32>,
    token_counter: u32,
}

impl ConfCache {
    fn new(ttl: Duration) -> ConfCache {
        ConfCache {
            token_cache: LruCache::with_expiry_duration(ttl),
            key_cache: LruCache::with_expiry_duration(ttl),
            token_counter: 0,
        }
    }

    fn prepare(&mut self, req: &prepare_conf::Req<'_>) -> u32 {
        // gateways older than the idempotency-key protocol leave the key out
        let key = req.key().unwrap_or_default();
        if !key.is_empty() {
            if let Some(token) = self.key_cache.get(key) {
                return *token;
            }
        }

        let mut entries = RuleConf::new();
        for te in req.conf().into_iter().flatten() {
            let Some(name) = te.name() else { continue };
            let Some(plugin) = registry::lookup(name) else {
                warn!("can't find plugin {name}, skip");
                continue;
            };

            info!("prepare conf for plugin {name}");

            let value = te.value().unwrap_or_default();
            match plugin.parse_conf(value.as_bytes()) {
                Ok(conf) => entries.push(ConfEntry { name: name.into(), conf }),
                Err(err) => {
                    error!("failed to parse configuration for plugin {name}, configuration: {value}, err: {err}");
                },
            }
        }

        self.token_counter += 1;
        let token = self.token_counter;
        self.token_cache.insert(token, Arc::new(entries));
        if !key.is_empty() {
            self.key_cache.insert(key.to_owned(), token);
        }
        token
    }

    fn get(&mut self, token: u32) -> Option<Arc<RuleConf>> {
        self.token_cache.get(&token).cloned()
    }

    fn insert(&mut self, token: u32, conf: RuleConf) {
        self.token_cache.insert(token, Arc::new(conf));
    }
}

static CACHE: Lazy<Mutex<ConfCache>> = Lazy::new(|| Mutex::new(ConfCache::new(settings::default_conf_cache_ttl())));

/// Rebuilds the cache with the given TTL, dropping everything cached so
/// far. Called once at startup (and by tests to get a clean slate).
pub fn init_conf_cache(ttl: Duration) {
    *CACHE.lock() = ConfCache::new(ttl);
}

/// Runs the PrepareConf exchange: builds a rule config from the request and
/// returns the reply carrying its token.
pub(crate) fn handle_prepare_conf(buf: &[u8]) -> Result<PooledBuilder, CallError> {
    let req = prepare_conf::root_as_req(buf)?;
    let token = CACHE.lock().prepare(&req);

    let mut builder = take_builder();
    let resp = prepare_conf::Resp::create(&mut *builder, &prepare_conf::RespArgs { conf_token: token });
    builder.finish(resp, None);
    Ok(builder)
}

pub fn get_rule_conf(token: u32) -> Result<Arc<RuleConf>, TokenNotFound> {
    CACHE.lock().get(token).ok_or(TokenNotFound(token))
}

/// Seeds a rule config under a fixed token, bypassing PrepareConf. A test
/// seam, mirroring nothing the gateway can do.
pub fn insert_rule_conf(token: u32, conf: RuleConf) {
    CACHE.lock().insert(token, conf);
}
