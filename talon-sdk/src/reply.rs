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

use bytes::{BufMut, BytesMut};
use flatbuffers::FlatBufferBuilder;
use http::HeaderMap;

use talon_proto::http_req_call;

use crate::encode;

/// The synthetic reply a request-phase filter writes into to short-circuit
/// the call. Any write here makes the pipeline stop and answer the client
/// directly with a Stop action instead of forwarding upstream.
#[derive(Debug, Default)]
pub struct ResponseWriter {
    hdr: Option<HeaderMap>,
    status: u16,
    body: Option<BytesMut>,
}

impl ResponseWriter {
    pub fn new() -> ResponseWriter {
        ResponseWriter::default()
    }

    /// Headers of the synthetic response. Additive: every entry is sent.
    pub fn header(&mut self) -> &mut HeaderMap {
        self.hdr.get_or_insert_with(HeaderMap::new)
    }

    /// Sets the status code. The first write wins; later calls are ignored.
    pub fn write_header(&mut self, status: u16) {
        if self.status != 0 {
            return;
        }
        self.status = status;
    }

    /// Appends body bytes. The gateway turns an unset status into 200, so a
    /// body-only reply needs no `write_header` first.
    pub fn write(&mut self, data: &[u8]) {
        self.body.get_or_insert_with(BytesMut::new).put_slice(data);
    }

    pub fn has_change(&self) -> bool {
        self.status != 0
            || self.hdr.as_ref().is_some_and(|h| !h.is_empty())
            || self.body.as_ref().is_some_and(|b| !b.is_empty())
    }

    /// Serializes the synthetic reply as a Stop action for the given
    /// request id. Returns false (writing nothing) when untouched.
    pub fn fetch_changes(&self, id: u32, builder: &mut FlatBufferBuilder<'static>) -> bool {
        if !self.has_change() {
            return false;
        }

        let headers = match &self.hdr {
            Some(map) if !map.is_empty() => Some(encode::additive_headers(builder, map)),
            _ => None,
        };
        let body = match &self.body {
            Some(body) if !body.is_empty() => Some(builder.create_vector(&body[..])),
            _ => None,
        };
        let status = if self.status == 0 { 200 } else { self.status };

        let stop = http_req_call::Stop::create(builder, &http_req_call::StopArgs { status, headers, body });
        let resp = http_req_call::Resp::create(
            builder,
            &http_req_call::RespArgs {
                id,
                action_type: http_req_call::Action::Stop,
                action: Some(stop.as_union_value()),
            },
        );
        builder.finish(resp, None);
        true
    }
}
