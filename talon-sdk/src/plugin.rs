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

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::reply::ResponseWriter;
use crate::request::Request;
use crate::response::Response;
use crate::Result;

/// Parsed plugin configuration, opaque to the runner. Each plugin downcasts
/// back to its own type on entry to a filter.
pub type PluginConf = Arc<dyn Any + Send + Sync>;

/// A compiled-in filter. Registered once at startup, then invoked per
/// request with the configuration it parsed for the matching route.
///
/// Both filter methods default to no-ops, so a request-only or
/// response-only plugin implements just the one it needs.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Unique plugin name the gateway refers to in its rule configs.
    fn name(&self) -> &str;

    /// Parses the raw configuration bytes for one route. A failure here
    /// drops the plugin from that route's rule config.
    fn parse_conf(&self, conf: &[u8]) -> Result<PluginConf>;

    /// Inspects and mutates the in-flight request, or writes `w` to answer
    /// the client without contacting the upstream. Writing `w` stops the
    /// remaining filter chain.
    async fn request_filter(&self, _conf: &PluginConf, _w: &mut ResponseWriter, _r: &mut Request<'_>) {}

    /// Inspects and mutates the upstream response before it reaches the
    /// client.
    async fn response_filter(&self, _conf: &PluginConf, _r: &mut Response<'_>) {}
}

/// Convenience for plugins whose configuration is the raw bytes themselves.
pub fn raw_conf(conf: &[u8]) -> Result<PluginConf> {
    Ok(Arc::new(conf.to_vec()))
}
