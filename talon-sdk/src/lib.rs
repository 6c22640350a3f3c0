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

//! The surface plugin authors build against: the [`Plugin`] trait and the
//! request/response objects handed to its filters.

mod encode;
pub mod extra_info;
pub mod header;
pub mod plugin;
pub mod reply;
pub mod request;
pub mod response;

pub use extra_info::{ConnClosed, GatewayConn};
pub use header::Header;
pub use plugin::{raw_conf, Plugin, PluginConf};
pub use reply::ResponseWriter;
pub use request::Request;
pub use response::Response;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
