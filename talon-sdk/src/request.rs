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

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Duration;

use bytes::Bytes;
use flatbuffers::FlatBufferBuilder;
use http::HeaderMap;
use multimap::MultiMap;
use tokio::time::Instant;

use talon_proto::http_req_call;

use crate::encode;
use crate::extra_info::{ask_extra_info, ConnClosed, GatewayConn, InfoKind};
use crate::header::Header;

// The gateway applies an implicit 60 second limit to an external call; the
// advertised deadline stays under it so a plugin can still produce its own
// response in time.
const CALL_DEADLINE: Duration = Duration::from_secs(56);

/// The in-flight HTTP request, backed by the `HTTPReqCall` message.
///
/// Reads go straight to the FlatBuffers view until a mutation layer is
/// materialized; [`Request::fetch_changes`] serializes the difference
/// between the two as a Rewrite action.
pub struct Request<'a> {
    view: http_req_call::Req<'a>,
    conn: &'a mut dyn GatewayConn,

    path: Option<Bytes>,
    hdr: Option<Header>,
    args: Option<ArgPair>,
    resp_hdr: Option<HeaderMap>,

    vars: HashMap<String, Bytes>,
    body: Option<Bytes>,

    deadline: Instant,
}

struct ArgPair {
    current: MultiMap<String, String>,
    original: MultiMap<String, String>,
}

impl<'a> Request<'a> {
    pub fn new(view: http_req_call::Req<'a>, conn: &'a mut dyn GatewayConn) -> Request<'a> {
        Request {
            view,
            conn,
            path: None,
            hdr: None,
            args: None,
            resp_hdr: None,
            vars: HashMap::new(),
            body: None,
            deadline: Instant::now() + CALL_DEADLINE,
        }
    }

    /// The gateway-assigned request id, echoed back in the reply.
    pub fn id(&self) -> u32 {
        self.view.id()
    }

    pub fn conf_token(&self) -> u32 {
        self.view.conf_token()
    }

    /// The client address, when the gateway sent one.
    pub fn src_ip(&self) -> Option<IpAddr> {
        let raw = self.view.src_ip()?;
        match raw.bytes().len() {
            4 => {
                let mut b = [0u8; 4];
                b.copy_from_slice(raw.bytes());
                Some(IpAddr::from(b))
            },
            16 => {
                let mut b = [0u8; 16];
                b.copy_from_slice(raw.bytes());
                Some(IpAddr::from(b))
            },
            _ => None,
        }
    }

    pub fn method(&self) -> http::Method {
        self.view
            .method()
            .variant_name()
            .and_then(|name| http::Method::from_bytes(name.as_bytes()).ok())
            .unwrap_or(http::Method::GET)
    }

    /// The request path, after any rewrite done by an earlier filter.
    pub fn path(&self) -> &[u8] {
        match &self.path {
            Some(path) => path,
            None => self.view.path().map(str::as_bytes).unwrap_or_default(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<Bytes>) {
        self.path = Some(path.into());
    }

    /// The request headers. First access materializes the mutable map and
    /// snapshots the original for the later diff.
    pub fn header(&mut self) -> &mut Header {
        if self.hdr.is_none() {
            let entries = self.view.headers().into_iter().flatten();
            self.hdr = Some(Header::from_entries(
                entries.filter_map(|e| e.name().map(|n| (n, e.value().unwrap_or_default()))),
            ));
        }
        self.hdr.as_mut().expect("just materialized")
    }

    /// The query string as a multimap. Same lazy+snapshot pattern as
    /// [`Request::header`].
    pub fn args(&mut self) -> &mut MultiMap<String, String> {
        if self.args.is_none() {
            let mut current = MultiMap::new();
            for entry in self.view.args().into_iter().flatten() {
                if let Some(name) = entry.name() {
                    current.insert(name.to_owned(), entry.value().unwrap_or_default().to_owned());
                }
            }
            let original = current.clone();
            self.args = Some(ArgPair { current, original });
        }
        &mut self.args.as_mut().expect("just materialized").current
    }

    /// Headers to add to the eventual response. Additive only: there is no
    /// original to diff against, every entry is sent through.
    pub fn resp_header(&mut self) -> &mut HeaderMap {
        self.resp_hdr.get_or_insert_with(HeaderMap::new)
    }

    /// The value of an nginx variable, fetched from the gateway on first use.
    pub async fn var(&mut self, name: &str) -> Result<Bytes, ConnClosed> {
        if let Some(value) = self.vars.get(name) {
            return Ok(value.clone());
        }
        let value = ask_extra_info(self.conn, InfoKind::Var(name)).await?;
        self.vars.insert(name.to_owned(), value.clone());
        Ok(value)
    }

    /// The client request body, fetched from the gateway on first use.
    pub async fn body(&mut self) -> Result<Bytes, ConnClosed> {
        if let Some(body) = &self.body {
            return Ok(body.clone());
        }
        let body = ask_extra_info(self.conn, InfoKind::ReqBody).await?;
        self.body = Some(body.clone());
        Ok(body)
    }

    /// Advisory deadline for plugin-initiated work in this call.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Serializes the accumulated mutations as a Rewrite reply. Returns
    /// false (writing nothing) when no layer was touched.
    pub fn fetch_changes(&self, builder: &mut FlatBufferBuilder<'static>) -> bool {
        if self.path.is_none() && self.hdr.is_none() && self.args.is_none() && self.resp_hdr.is_none() {
            return false;
        }

        let path = self.path.as_ref().map(|p| {
            let p = String::from_utf8_lossy(p);
            builder.create_string(&p)
        });
        let headers = self.hdr.as_ref().map(|hdr| encode::header_diff(builder, hdr));
        let resp_headers = self.resp_hdr.as_ref().map(|map| encode::additive_headers(builder, map));
        let args = self.args.as_ref().map(|pair| encode::args_diff(builder, &pair.current, &pair.original));

        let rewrite = http_req_call::Rewrite::create(
            builder,
            &http_req_call::RewriteArgs { path, headers, args, resp_headers },
        );
        let resp = http_req_call::Resp::create(
            builder,
            &http_req_call::RespArgs {
                id: self.id(),
                action_type: http_req_call::Action::Rewrite,
                action: Some(rewrite.as_union_value()),
            },
        );
        builder.finish(resp, None);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_proto::{common, take_builder};

    fn build_req(
        path: Option<&str>,
        headers: &[(&str, &str)],
        args: &[(&str, &str)],
    ) -> Vec<u8> {
        let mut builder = take_builder();
        let path = path.map(|p| builder.create_string(p));
        let headers = {
            let entries: Vec<_> = headers
                .iter()
                .map(|(n, v)| {
                    let n = builder.create_string(n);
                    let v = builder.create_string(v);
                    common::TextEntry::create(
                        &mut *builder,
                        &common::TextEntryArgs { name: Some(n), value: Some(v) },
                    )
                })
                .collect();
            Some(builder.create_vector(&entries))
        };
        let args = {
            let entries: Vec<_> = args
                .iter()
                .map(|(n, v)| {
                    let n = builder.create_string(n);
                    let v = builder.create_string(v);
                    common::TextEntry::create(
                        &mut *builder,
                        &common::TextEntryArgs { name: Some(n), value: Some(v) },
                    )
                })
                .collect();
            Some(builder.create_vector(&entries))
        };
        let src_ip = Some(builder.create_vector(&[127u8, 0, 0, 1]));
        let req = http_req_call::Req::create(
            &mut *builder,
            &http_req_call::ReqArgs {
                id: 233,
                conf_token: 1,
                src_ip,
                method: http_req_call::Method::POST,
                path,
                headers,
                args,
            },
        );
        builder.finish(req, None);
        builder.finished_data().to_vec()
    }

    fn rewrite_of(data: &[u8]) -> (u32, Option<Vec<(String, Option<String>)>>, Option<Vec<(String, Option<String>)>>) {
        let resp = http_req_call::root_as_resp(data).unwrap();
        let rewrite = resp.action_as_rewrite();
        let collect = |v: Option<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry<'_>>>>| {
            v.map(|v| {
                v.iter()
                    .map(|e| (e.name().unwrap_or_default().to_owned(), e.value().map(str::to_owned)))
                    .collect::<Vec<_>>()
            })
        };
        (
            resp.id(),
            rewrite.and_then(|r| collect(r.headers())),
            rewrite.and_then(|r| collect(r.args())),
        )
    }

    #[tokio::test]
    async fn untouched_request_reports_no_change() {
        let buf = build_req(Some("/hello"), &[("host", "a")], &[]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut pipe);

        let mut builder = take_builder();
        assert!(!req.fetch_changes(&mut builder));
    }

    #[tokio::test]
    async fn read_only_projections() {
        let buf = build_req(Some("/hello"), &[("host", "a")], &[("q", "1")]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut pipe);

        assert_eq!(req.id(), 233);
        assert_eq!(req.conf_token(), 1);
        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.src_ip(), Some(IpAddr::from([127, 0, 0, 1])));
        assert_eq!(req.path(), b"/hello");
        assert_eq!(req.header().get("Host"), "a");
        assert_eq!(req.args().get("q").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn path_only_rewrite_contains_path_and_nothing_else() {
        let buf = build_req(Some("/hello"), &[("host", "a")], &[("q", "1")]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut pipe);
        req.set_path(&b"/world"[..]);

        let mut builder = take_builder();
        assert!(req.fetch_changes(&mut builder));
        let resp = http_req_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(resp.action_type(), http_req_call::Action::Rewrite);
        let rewrite = resp.action_as_rewrite().unwrap();
        assert_eq!(rewrite.path(), Some("/world"));
        assert!(rewrite.headers().is_none());
        assert!(rewrite.args().is_none());
        assert!(rewrite.resp_headers().is_none());
    }

    #[tokio::test]
    async fn header_diff_serializes_deletes_and_sets() {
        let buf = build_req(None, &[("host", "a"), ("accept", "*/*")], &[]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut pipe);
        req.header().del("accept");
        req.header().set("x-real", "1");

        let mut builder = take_builder();
        assert!(req.fetch_changes(&mut builder));
        let (id, headers, args) = rewrite_of(builder.finished_data());
        assert_eq!(id, 233);
        assert_eq!(args, None);
        let headers = headers.unwrap();
        assert_eq!(headers.len(), 2);
        assert!(headers.contains(&("accept".to_owned(), None)));
        assert!(headers.contains(&("x-real".to_owned(), Some("1".to_owned()))));
    }

    #[tokio::test]
    async fn changed_multi_value_args_emit_every_value() {
        let buf = build_req(None, &[], &[("tag", "a"), ("tag", "b"), ("keep", "1")]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut pipe);
        req.args().insert("tag".to_owned(), "c".to_owned());

        let mut builder = take_builder();
        assert!(req.fetch_changes(&mut builder));
        let (_, _, args) = rewrite_of(builder.finished_data());
        let args = args.unwrap();
        // "keep" is unchanged and must not appear; "tag" differs and every
        // value comes through
        assert_eq!(args.len(), 3);
        for v in ["a", "b", "c"] {
            assert!(args.contains(&("tag".to_owned(), Some(v.to_owned()))));
        }
    }

    #[tokio::test]
    async fn deleted_arg_is_emitted_name_only() {
        let buf = build_req(None, &[], &[("drop", "1")]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut pipe);
        req.args().remove("drop");

        let mut builder = take_builder();
        assert!(req.fetch_changes(&mut builder));
        let (_, _, args) = rewrite_of(builder.finished_data());
        assert_eq!(args.unwrap(), vec![("drop".to_owned(), None)]);
    }

    #[tokio::test]
    async fn resp_headers_are_additive() {
        let buf = build_req(None, &[], &[]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut pipe);
        req.resp_header().append("x-served-by", http::HeaderValue::from_static("talon"));
        req.resp_header().append("x-served-by", http::HeaderValue::from_static("edge"));

        let mut builder = take_builder();
        assert!(req.fetch_changes(&mut builder));
        let resp = http_req_call::root_as_resp(builder.finished_data()).unwrap();
        let rewrite = resp.action_as_rewrite().unwrap();
        let resp_headers = rewrite.resp_headers().unwrap();
        assert_eq!(resp_headers.len(), 2);
        assert_eq!(resp_headers.get(0).value(), Some("talon"));
        assert_eq!(resp_headers.get(1).value(), Some("edge"));
    }

    #[tokio::test]
    async fn vars_and_body_are_memoized() {
        use talon_proto::{extra_info, frame, read_frame, RpcType};

        let buf = build_req(None, &[], &[]);
        let (mut runner, mut gateway) = tokio::io::duplex(1 << 16);

        let gw = tokio::spawn(async move {
            // exactly two reverse RPCs must arrive: one var, one body
            for expected in [extra_info::Info::Var, extra_info::Info::ReqBody] {
                let (ty, payload) = read_frame(&mut gateway).await.unwrap().unwrap();
                assert_eq!(ty, RpcType::ExtraInfo.as_byte());
                let req = extra_info::root_as_req(&payload).unwrap();
                assert_eq!(req.info_type(), expected);

                let mut builder = take_builder();
                let result = builder.create_vector(b"value");
                let resp =
                    extra_info::Resp::create(&mut *builder, &extra_info::RespArgs { result: Some(result) });
                builder.finish(resp, None);
                frame::write_frame(&mut gateway, RpcType::ExtraInfo.as_byte(), builder.finished_data())
                    .await
                    .unwrap();
            }
        });

        let mut req = Request::new(http_req_call::root_as_req(&buf).unwrap(), &mut runner);
        assert_eq!(&req.var("remote_addr").await.unwrap()[..], b"value");
        assert_eq!(&req.var("remote_addr").await.unwrap()[..], b"value");
        assert_eq!(&req.body().await.unwrap()[..], b"value");
        assert_eq!(&req.body().await.unwrap()[..], b"value");
        gw.await.unwrap();
    }
}
