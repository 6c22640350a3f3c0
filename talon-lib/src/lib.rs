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

//! The talon runner core: plugin registry, configuration cache, filter
//! pipeline, RPC dispatcher, and the Unix socket server tying them
//! together.

pub mod conf;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod server;
pub mod settings;

pub use conf::{get_rule_conf, init_conf_cache, insert_rule_conf, ConfEntry, RuleConf, TokenNotFound};
pub use error::CallError;
pub use registry::{lookup, register, RegistryError};
pub use settings::Settings;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
