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

//! Ordered execution of a route's filters, with early stop once a filter
//! produces a reply of its own.

use tracing::{info, warn};

use talon_proto::{http_req_call, http_resp_call, take_builder, PooledBuilder};
use talon_sdk::{GatewayConn, Request, Response, ResponseWriter};

use crate::conf::{get_rule_conf, RuleConf};
use crate::error::CallError;
use crate::registry;

/// Handles one HTTPReqCall: looks up the rule config, runs the request
/// filters in order, and serializes exactly one action, preferring Stop
/// over Rewrite over no-op.
pub(crate) async fn handle_http_req_call(buf: &[u8], conn: &mut dyn GatewayConn) -> Result<PooledBuilder, CallError> {
    let view = http_req_call::root_as_req(buf)?;
    let rule = get_rule_conf(view.conf_token())?;

    let id = view.id();
    let mut request = Request::new(view, conn);
    let mut reply = ResponseWriter::new();
    run_request_filters(&rule, &mut reply, &mut request).await;

    let mut builder = take_builder();
    if reply.fetch_changes(id, &mut builder) {
        return Ok(builder);
    }
    if request.fetch_changes(&mut builder) {
        return Ok(builder);
    }

    let resp = http_req_call::Resp::create(
        &mut *builder,
        &http_req_call::RespArgs { id, action_type: http_req_call::Action::NONE, action: None },
    );
    builder.finish(resp, None);
    Ok(builder)
}

/// Handles one HTTPRespCall: same shape as the request phase, with the
/// response object doubling as the reply writer.
pub(crate) async fn handle_http_resp_call(buf: &[u8], conn: &mut dyn GatewayConn) -> Result<PooledBuilder, CallError> {
    let view = http_resp_call::root_as_req(buf)?;
    let rule = get_rule_conf(view.conf_token())?;

    let id = view.id();
    let mut response = Response::new(view, conn);
    run_response_filters(&rule, &mut response).await;

    let mut builder = take_builder();
    if response.fetch_changes(&mut builder) {
        return Ok(builder);
    }

    let resp = http_resp_call::Resp::create(
        &mut *builder,
        &http_resp_call::RespArgs { id, status: 0, headers: None, body: None },
    );
    builder.finish(resp, None);
    Ok(builder)
}

async fn run_request_filters(rule: &RuleConf, w: &mut ResponseWriter, r: &mut Request<'_>) {
    for entry in rule {
        let Some(plugin) = registry::lookup(&entry.name) else {
            warn!("can't find plugin {}, skip", entry.name);
            continue;
        };

        info!("run plugin {}", entry.name);

        plugin.request_filter(&entry.conf, w, r).await;

        if w.has_change() {
            // a response is generated, no need to continue
            break;
        }
    }
}

async fn run_response_filters(rule: &RuleConf, r: &mut Response<'_>) {
    for entry in rule {
        let Some(plugin) = registry::lookup(&entry.name) else {
            warn!("can't find plugin {}, skip", entry.name);
            continue;
        };

        info!("run plugin {}", entry.name);

        plugin.response_filter(&entry.conf, r).await;

        if r.has_change() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use talon_sdk::{raw_conf, Plugin, PluginConf};

    use crate::conf::{insert_rule_conf, ConfEntry};

    fn entry(name: &str) -> ConfEntry {
        ConfEntry { name: name.into(), conf: Arc::new(()) }
    }

    fn build_req_call(id: u32, conf_token: u32) -> Vec<u8> {
        let mut builder = take_builder();
        let req = http_req_call::Req::create(
            &mut *builder,
            &http_req_call::ReqArgs { id, conf_token, ..Default::default() },
        );
        builder.finish(req, None);
        builder.finished_data().to_vec()
    }

    struct StopWith(&'static str, u16);

    #[async_trait::async_trait]
    impl Plugin for StopWith {
        fn name(&self) -> &str {
            self.0
        }

        fn parse_conf(&self, conf: &[u8]) -> talon_sdk::Result<PluginConf> {
            raw_conf(conf)
        }

        async fn request_filter(&self, _conf: &PluginConf, w: &mut ResponseWriter, _r: &mut Request<'_>) {
            w.write_header(self.1);
        }
    }

    struct Counting(&'static str, Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl Plugin for Counting {
        fn name(&self) -> &str {
            self.0
        }

        fn parse_conf(&self, conf: &[u8]) -> talon_sdk::Result<PluginConf> {
            raw_conf(conf)
        }

        async fn request_filter(&self, _conf: &PluginConf, _w: &mut ResponseWriter, _r: &mut Request<'_>) {
            self.1.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct RespHeaderOnly(&'static str);

    #[async_trait::async_trait]
    impl Plugin for RespHeaderOnly {
        fn name(&self) -> &str {
            self.0
        }

        fn parse_conf(&self, conf: &[u8]) -> talon_sdk::Result<PluginConf> {
            raw_conf(conf)
        }

        async fn request_filter(&self, _conf: &PluginConf, _w: &mut ResponseWriter, r: &mut Request<'_>) {
            r.resp_header().insert("x-early", http::HeaderValue::from_static("1"));
        }
    }

    #[tokio::test]
    async fn empty_rule_conf_yields_no_action() {
        insert_rule_conf(9101, RuleConf::new());
        let buf = build_req_call(233, 9101);
        let (mut pipe, _peer) = tokio::io::duplex(64);

        let builder = handle_http_req_call(&buf, &mut pipe).await.unwrap();
        let resp = http_req_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(resp.id(), 233);
        assert_eq!(resp.action_type(), http_req_call::Action::NONE);
    }

    #[tokio::test]
    async fn missing_token_is_reported() {
        let buf = build_req_call(1, 987_654);
        let (mut pipe, _peer) = tokio::io::duplex(64);

        let err = handle_http_req_call(&buf, &mut pipe).await.unwrap_err();
        assert!(matches!(err, CallError::TokenNotFound(crate::conf::TokenNotFound(987_654))));
    }

    #[tokio::test]
    async fn writer_change_short_circuits_the_chain() {
        let counted = Arc::new(AtomicUsize::new(0));
        registry::register(Arc::new(StopWith("pipe-stopper", 401))).unwrap();
        registry::register(Arc::new(Counting("pipe-counter", counted.clone()))).unwrap();
        insert_rule_conf(9102, vec![entry("pipe-stopper"), entry("pipe-counter")]);

        let buf = build_req_call(7, 9102);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let builder = handle_http_req_call(&buf, &mut pipe).await.unwrap();

        let resp = http_req_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(resp.action_type(), http_req_call::Action::Stop);
        assert_eq!(resp.action_as_stop().unwrap().status(), 401);
        // the second filter never ran
        assert_eq!(counted.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_plugin_in_rule_conf_is_skipped() {
        let counted = Arc::new(AtomicUsize::new(0));
        registry::register(Arc::new(Counting("pipe-after-gap", counted.clone()))).unwrap();
        insert_rule_conf(9103, vec![entry("pipe-no-such"), entry("pipe-after-gap")]);

        let buf = build_req_call(8, 9103);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let builder = handle_http_req_call(&buf, &mut pipe).await.unwrap();

        let resp = http_req_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(resp.action_type(), http_req_call::Action::NONE);
        assert_eq!(counted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resp_header_only_writes_do_not_short_circuit() {
        let counted = Arc::new(AtomicUsize::new(0));
        registry::register(Arc::new(RespHeaderOnly("pipe-resp-hdr"))).unwrap();
        registry::register(Arc::new(Counting("pipe-resp-hdr-next", counted.clone()))).unwrap();
        insert_rule_conf(9104, vec![entry("pipe-resp-hdr"), entry("pipe-resp-hdr-next")]);

        let buf = build_req_call(9, 9104);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let builder = handle_http_req_call(&buf, &mut pipe).await.unwrap();

        // later filters still ran, and the result is a Rewrite carrying the
        // response header, not a Stop
        assert_eq!(counted.load(Ordering::SeqCst), 1);
        let resp = http_req_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(resp.action_type(), http_req_call::Action::Rewrite);
        let rewrite = resp.action_as_rewrite().unwrap();
        let resp_headers = rewrite.resp_headers().unwrap();
        assert_eq!(resp_headers.len(), 1);
        assert_eq!(resp_headers.get(0).name(), Some("x-early"));
    }

    struct BodyRewriter(&'static str);

    #[async_trait::async_trait]
    impl Plugin for BodyRewriter {
        fn name(&self) -> &str {
            self.0
        }

        fn parse_conf(&self, conf: &[u8]) -> talon_sdk::Result<PluginConf> {
            raw_conf(conf)
        }

        async fn response_filter(&self, _conf: &PluginConf, r: &mut Response<'_>) {
            let body = r.read_body().await.expect("origin body");
            let rewritten = String::from_utf8_lossy(&body).replace("hello world", "hello golang world");
            r.write(rewritten.as_bytes());
        }
    }

    #[tokio::test]
    async fn response_filter_can_pull_the_origin_body_mid_call() {
        use talon_proto::{extra_info, frame, read_frame, RpcType};

        registry::register(Arc::new(BodyRewriter("pipe-body-rw"))).unwrap();
        insert_rule_conf(9105, vec![entry("pipe-body-rw")]);

        let buf = {
            let mut builder = take_builder();
            let req = http_resp_call::Req::create(
                &mut *builder,
                &http_resp_call::ReqArgs { id: 33, conf_token: 9105, status: 200, headers: None },
            );
            builder.finish(req, None);
            builder.finished_data().to_vec()
        };

        let (mut runner, mut gateway) = tokio::io::duplex(1 << 16);
        let gw = tokio::spawn(async move {
            let (ty, payload) = read_frame(&mut gateway).await.unwrap().unwrap();
            assert_eq!(ty, RpcType::ExtraInfo.as_byte());
            let req = extra_info::root_as_req(&payload).unwrap();
            assert_eq!(req.info_type(), extra_info::Info::RespBody);

            let mut builder = take_builder();
            let result = builder.create_vector(b"hello world");
            let reply = extra_info::Resp::create(&mut *builder, &extra_info::RespArgs { result: Some(result) });
            builder.finish(reply, None);
            frame::write_frame(&mut gateway, RpcType::ExtraInfo.as_byte(), builder.finished_data())
                .await
                .unwrap();
        });

        let builder = handle_http_resp_call(&buf, &mut runner).await.unwrap();
        gw.await.unwrap();

        let resp = http_resp_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(resp.id(), 33);
        assert_eq!(resp.status(), 0);
        assert_eq!(resp.body().map(|b| b.bytes().to_vec()), Some(b"hello golang world".to_vec()));
    }
}
