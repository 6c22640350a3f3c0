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

//! The process-wide plugin registry. Populated at startup, read on every
//! PrepareConf and on every filter invocation.

use std::collections::HashMap;
use std::sync::Arc;

use compact_str::CompactString;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::info;

use talon_sdk::Plugin;

static REGISTRY: Lazy<RwLock<HashMap<CompactString, Arc<dyn Plugin>>>> = Lazy::new(|| RwLock::new(HashMap::new()));

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("missing name")]
    MissingName,
    #[error("plugin {0} registered")]
    AlreadyRegistered(CompactString),
}

/// Registers a plugin under its own name. Call before the server starts
/// accepting connections; a second registration under the same name fails.
pub fn register(plugin: Arc<dyn Plugin>) -> Result<(), RegistryError> {
    let name = plugin.name();
    info!("register plugin {name}");

    if name.is_empty() {
        return Err(RegistryError::MissingName);
    }

    let mut registry = REGISTRY.write();
    if registry.contains_key(name) {
        return Err(RegistryError::AlreadyRegistered(name.into()));
    }
    registry.insert(name.into(), plugin);
    Ok(())
}

pub fn lookup(name: &str) -> Option<Arc<dyn Plugin>> {
    REGISTRY.read().get(name).cloned()
}
