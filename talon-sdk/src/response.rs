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
use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};
use flatbuffers::FlatBufferBuilder;
use tokio::time::Instant;

use talon_proto::http_resp_call;

use crate::encode;
use crate::extra_info::{ask_extra_info, ConnClosed, GatewayConn, InfoKind};
use crate::header::Header;

const CALL_DEADLINE: Duration = Duration::from_secs(56);

/// The upstream response, backed by the `HTTPRespCall` message.
///
/// Mutations accumulate in the same way as on [`crate::Request`]; the diff is
/// serialized by [`Response::fetch_changes`]. A rewritten body replaces the
/// upstream body wholesale.
pub struct Response<'a> {
    view: http_resp_call::Req<'a>,
    conn: &'a mut dyn GatewayConn,

    hdr: Option<Header>,
    status: u16,
    body: Option<BytesMut>,

    vars: HashMap<String, Bytes>,
    origin_body: Option<Bytes>,

    deadline: Instant,
}

impl<'a> Response<'a> {
    pub fn new(view: http_resp_call::Req<'a>, conn: &'a mut dyn GatewayConn) -> Response<'a> {
        Response {
            view,
            conn,
            hdr: None,
            status: 0,
            body: None,
            vars: HashMap::new(),
            origin_body: None,
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

    /// The status code the response currently carries: the rewritten one if
    /// a filter wrote one, the upstream's otherwise.
    pub fn status_code(&self) -> u16 {
        if self.status == 0 {
            self.view.status()
        } else {
            self.status
        }
    }

    /// Rewrites the status code. The first write wins; later calls are
    /// ignored, mirroring the usual HTTP writer contract.
    pub fn write_header(&mut self, status: u16) {
        if self.status != 0 {
            return;
        }
        self.status = status;
    }

    /// The upstream response headers, materialized and snapshotted on first
    /// access.
    pub fn header(&mut self) -> &mut Header {
        if self.hdr.is_none() {
            let entries = self.view.headers().into_iter().flatten();
            self.hdr = Some(Header::from_entries(
                entries.filter_map(|e| e.name().map(|n| (n, e.value().unwrap_or_default()))),
            ));
        }
        self.hdr.as_mut().expect("just materialized")
    }

    /// Appends to the replacement body.
    pub fn write(&mut self, data: &[u8]) {
        self.body.get_or_insert_with(BytesMut::new).put_slice(data);
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

    /// The original upstream body, fetched from the gateway on first use.
    pub async fn read_body(&mut self) -> Result<Bytes, ConnClosed> {
        if let Some(body) = &self.origin_body {
            return Ok(body.clone());
        }
        let body = ask_extra_info(self.conn, InfoKind::RespBody).await?;
        self.origin_body = Some(body.clone());
        Ok(body)
    }

    /// Advisory deadline for plugin-initiated work in this call.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// True once any mutation layer has been touched.
    pub fn has_change(&self) -> bool {
        !(self.body.is_none() && self.hdr.is_none() && self.status == 0)
    }

    /// Serializes the accumulated mutations as the HTTPRespCall reply.
    /// Returns false (writing nothing) when nothing was touched.
    pub fn fetch_changes(&self, builder: &mut FlatBufferBuilder<'static>) -> bool {
        if !self.has_change() {
            return false;
        }

        let headers = self.hdr.as_ref().map(|hdr| encode::header_diff(builder, hdr));
        let body = match &self.body {
            Some(body) if !body.is_empty() => Some(builder.create_vector(&body[..])),
            _ => None,
        };

        let resp = http_resp_call::Resp::create(
            builder,
            &http_resp_call::RespArgs { id: self.id(), status: self.status, headers, body },
        );
        builder.finish(resp, None);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_proto::{common, take_builder};

    fn build_resp_call(status: u16, headers: &[(&str, &str)]) -> Vec<u8> {
        let mut builder = take_builder();
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
        let req = http_resp_call::Req::create(
            &mut *builder,
            &http_resp_call::ReqArgs { id: 7, conf_token: 1, status, headers },
        );
        builder.finish(req, None);
        builder.finished_data().to_vec()
    }

    #[tokio::test]
    async fn status_write_is_one_shot() {
        let buf = build_resp_call(200, &[]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut resp = Response::new(http_resp_call::root_as_req(&buf).unwrap(), &mut pipe);

        assert_eq!(resp.status_code(), 200);
        resp.write_header(502);
        resp.write_header(404);
        assert_eq!(resp.status_code(), 502);

        let mut builder = take_builder();
        assert!(resp.fetch_changes(&mut builder));
        let reply = http_resp_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(reply.status(), 502);
        assert_eq!(reply.id(), 7);
    }

    #[tokio::test]
    async fn untouched_response_reports_no_change() {
        let buf = build_resp_call(200, &[("server", "upstream")]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let resp = Response::new(http_resp_call::root_as_req(&buf).unwrap(), &mut pipe);

        assert!(!resp.has_change());
        let mut builder = take_builder();
        assert!(!resp.fetch_changes(&mut builder));
    }

    #[tokio::test]
    async fn body_rewrite_without_status_leaves_status_unset() {
        let buf = build_resp_call(200, &[]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut resp = Response::new(http_resp_call::root_as_req(&buf).unwrap(), &mut pipe);
        resp.write(b"hello ");
        resp.write(b"world");

        let mut builder = take_builder();
        assert!(resp.fetch_changes(&mut builder));
        let reply = http_resp_call::root_as_resp(builder.finished_data()).unwrap();
        assert_eq!(reply.status(), 0);
        assert_eq!(reply.body().map(|b| b.bytes().to_vec()), Some(b"hello world".to_vec()));
        assert!(reply.headers().is_none());
    }

    #[tokio::test]
    async fn header_mutation_diffs_against_upstream() {
        let buf = build_resp_call(200, &[("server", "upstream"), ("x-trace", "1")]);
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let mut resp = Response::new(http_resp_call::root_as_req(&buf).unwrap(), &mut pipe);
        resp.header().set("server", "talon");
        resp.header().del("x-trace");

        let mut builder = take_builder();
        assert!(resp.fetch_changes(&mut builder));
        let reply = http_resp_call::root_as_resp(builder.finished_data()).unwrap();
        let headers: Vec<_> = reply
            .headers()
            .unwrap()
            .iter()
            .map(|e| (e.name().unwrap_or_default().to_owned(), e.value().map(str::to_owned)))
            .collect();
        assert_eq!(headers.len(), 2);
        assert!(headers.contains(&("x-trace".to_owned(), None)));
        assert!(headers.contains(&("server".to_owned(), Some("talon".to_owned()))));
    }

    #[tokio::test]
    async fn origin_body_is_fetched_once() {
        use talon_proto::{extra_info, frame, read_frame, RpcType};

        let buf = build_resp_call(200, &[]);
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

        let mut resp = Response::new(http_resp_call::root_as_req(&buf).unwrap(), &mut runner);
        assert_eq!(&resp.read_body().await.unwrap()[..], b"hello world");
        assert_eq!(&resp.read_body().await.unwrap()[..], b"hello world");
        gw.await.unwrap();
    }
}
