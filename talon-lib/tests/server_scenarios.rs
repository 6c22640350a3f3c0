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

//! Gateway-side conversations against a live server on a real Unix socket.
//!
//! The registry and the conf cache are process globals, so the whole
//! conversation runs inside one test, scenario by scenario, the way a
//! single gateway would drive the runner.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::UnixStream;
use tokio_util::sync::CancellationToken;

use talon_proto::{
    common, err, extra_info, http_req_call, http_resp_call, prepare_conf, read_frame, take_builder, write_frame,
    RpcType,
};
use talon_sdk::{raw_conf, Plugin, PluginConf, Request, Response, ResponseWriter};
use talon_lib::{server, Settings};

struct FailingParse;

#[async_trait]
impl Plugin for FailingParse {
    fn name(&self) -> &str {
        "bad"
    }

    fn parse_conf(&self, _conf: &[u8]) -> talon_sdk::Result<PluginConf> {
        Err("ouch".into())
    }
}

struct ResponseRewrite;

#[async_trait]
impl Plugin for ResponseRewrite {
    fn name(&self) -> &str {
        "response-rewrite"
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

struct HugeReply;

#[async_trait]
impl Plugin for HugeReply {
    fn name(&self) -> &str {
        "huge-reply"
    }

    fn parse_conf(&self, conf: &[u8]) -> talon_sdk::Result<PluginConf> {
        raw_conf(conf)
    }

    async fn request_filter(&self, _conf: &PluginConf, w: &mut ResponseWriter, _r: &mut Request<'_>) {
        w.write(&vec![b'x'; 1 << 24]);
    }
}

fn build_prepare_conf(key: Option<&str>, conf: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = take_builder();
    let conf = if conf.is_empty() {
        None
    } else {
        let entries: Vec<_> = conf
            .iter()
            .map(|(n, v)| {
                let n = builder.create_string(n);
                let v = builder.create_string(v);
                common::TextEntry::create(&mut *builder, &common::TextEntryArgs { name: Some(n), value: Some(v) })
            })
            .collect();
        Some(builder.create_vector(&entries))
    };
    let key = key.map(|k| builder.create_string(k));
    let req = prepare_conf::Req::create(&mut *builder, &prepare_conf::ReqArgs { conf, key });
    builder.finish(req, None);
    builder.finished_data().to_vec()
}

fn build_http_req_call(id: u32, conf_token: u32) -> Vec<u8> {
    let mut builder = take_builder();
    let req = http_req_call::Req::create(
        &mut *builder,
        &http_req_call::ReqArgs { id, conf_token, ..Default::default() },
    );
    builder.finish(req, None);
    builder.finished_data().to_vec()
}

fn build_http_resp_call(id: u32, conf_token: u32, status: u16) -> Vec<u8> {
    let mut builder = take_builder();
    let req = http_resp_call::Req::create(
        &mut *builder,
        &http_resp_call::ReqArgs { id, conf_token, status, headers: None },
    );
    builder.finish(req, None);
    builder.finished_data().to_vec()
}

async fn exchange(conn: &mut UnixStream, ty: RpcType, payload: &[u8]) -> (u8, Vec<u8>) {
    write_frame(conn, ty.as_byte(), payload).await.unwrap();
    read_frame(conn).await.unwrap().expect("a reply frame")
}

async fn prepare(conn: &mut UnixStream, key: Option<&str>, conf: &[(&str, &str)]) -> u32 {
    let (ty, payload) = exchange(conn, RpcType::PrepareConf, &build_prepare_conf(key, conf)).await;
    assert_eq!(ty, RpcType::PrepareConf.as_byte());
    prepare_conf::root_as_resp(&payload).unwrap().conf_token()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn gateway_conversation() {
    talon_lib::register(Arc::new(FailingParse)).unwrap();
    talon_lib::register(Arc::new(ResponseRewrite)).unwrap();
    talon_lib::register(Arc::new(HugeReply)).unwrap();

    let socket_path = std::env::temp_dir().join(format!("talon-e2e-{}.sock", std::process::id()));
    let settings = Settings { socket_path: socket_path.clone(), conf_cache_ttl: Duration::from_secs(60) };
    let shutdown = CancellationToken::new();

    let server = {
        let settings = settings.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move { server::run(&settings, shutdown).await })
    };

    // wait for the listener to come up
    for _ in 0..100 {
        if socket_path.exists() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let mut conn = UnixStream::connect(&socket_path).await.unwrap();

    // scenario: empty PrepareConf hands out the first token, and an
    // HTTPReqCall against it is a no-op
    let token = prepare(&mut conn, None, &[]).await;
    assert_eq!(token, 1);

    let (ty, payload) = exchange(&mut conn, RpcType::HttpReqCall, &build_http_req_call(233, token)).await;
    assert_eq!(ty, RpcType::HttpReqCall.as_byte());
    let resp = http_req_call::root_as_resp(&payload).unwrap();
    assert_eq!(resp.id(), 233);
    assert_eq!(resp.action_type(), http_req_call::Action::NONE);

    // scenario: a conf naming an unregistered plugin still yields a valid
    // token bound to an empty rule config
    let token = prepare(&mut conn, None, &[("xxx", "{}")]).await;
    assert!(talon_lib::get_rule_conf(token).unwrap().is_empty());

    // scenario: a failing parse_conf drops the plugin from the rule config
    let token = prepare(&mut conn, None, &[("bad", "{}")]).await;
    assert!(talon_lib::get_rule_conf(token).unwrap().is_empty());

    // scenario: concurrent PrepareConf calls with one idempotency key all
    // get the same token
    let mut workers = Vec::new();
    for _ in 0..10 {
        let socket_path = socket_path.clone();
        workers.push(tokio::spawn(async move {
            let mut conn = UnixStream::connect(&socket_path).await.unwrap();
            prepare(&mut conn, Some("k1"), &[]).await
        }));
    }
    let mut tokens = Vec::new();
    for worker in workers {
        tokens.push(worker.await.unwrap());
    }
    tokens.sort_unstable();
    tokens.dedup();
    assert_eq!(tokens.len(), 1, "all 10 PrepareConf calls must agree on the token");

    // scenario: a response filter pulls the upstream body over the reverse
    // RPC and replaces it
    let token = prepare(&mut conn, None, &[("response-rewrite", "{}")]).await;
    write_frame(&mut conn, RpcType::HttpRespCall.as_byte(), &build_http_resp_call(42, token, 200)).await.unwrap();

    let (ty, payload) = read_frame(&mut conn).await.unwrap().expect("the reverse RPC");
    assert_eq!(ty, RpcType::ExtraInfo.as_byte());
    let info = extra_info::root_as_req(&payload).unwrap();
    assert_eq!(info.info_type(), extra_info::Info::RespBody);
    {
        let mut builder = take_builder();
        let result = builder.create_vector(b"hello world");
        let reply = extra_info::Resp::create(&mut *builder, &extra_info::RespArgs { result: Some(result) });
        builder.finish(reply, None);
        write_frame(&mut conn, RpcType::ExtraInfo.as_byte(), builder.finished_data()).await.unwrap();
    }

    let (ty, payload) = read_frame(&mut conn).await.unwrap().expect("the call reply");
    assert_eq!(ty, RpcType::HttpRespCall.as_byte());
    let resp = http_resp_call::root_as_resp(&payload).unwrap();
    assert_eq!(resp.id(), 42);
    assert_eq!(resp.status(), 0, "the filter did not touch the status");
    assert_eq!(resp.body().map(|b| b.bytes().to_vec()), Some(b"hello golang world".to_vec()));

    // scenario: a reply over the 24-bit frame cap is replaced with a
    // ServiceUnavailable error frame
    let token = prepare(&mut conn, None, &[("huge-reply", "{}")]).await;
    let (ty, payload) = exchange(&mut conn, RpcType::HttpReqCall, &build_http_req_call(5, token)).await;
    assert_eq!(ty, RpcType::Error.as_byte());
    let resp = err::root_as_resp(&payload).unwrap();
    assert_eq!(resp.code(), err::Code::SERVICE_UNAVAILABLE);

    // an expired/unknown token comes back as ConfTokenNotFound
    let (ty, payload) = exchange(&mut conn, RpcType::HttpReqCall, &build_http_req_call(6, 400_000)).await;
    assert_eq!(ty, RpcType::Error.as_byte());
    assert_eq!(err::root_as_resp(&payload).unwrap().code(), err::Code::CONF_TOKEN_NOT_FOUND);

    // an unknown rpc tag comes back as BadRequest
    let (ty, payload) = exchange(&mut conn, RpcType::Error, &[]).await;
    assert_eq!(ty, RpcType::Error.as_byte());
    assert_eq!(err::root_as_resp(&payload).unwrap().code(), err::Code::BAD_REQUEST);

    // shutdown removes the socket file
    drop(conn);
    shutdown.cancel();
    server.await.unwrap().unwrap();
    assert!(!socket_path.exists());
}
