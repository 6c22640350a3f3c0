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

//! The reverse RPC: mid-call requests from the runner back to the gateway
//! for nginx variables and request/response bodies.
//!
//! The gateway is blocked on the reply to its own call, so the exchange is a
//! plain write-then-read on the same socket. The frame read here must never
//! be fed back into the dispatcher.

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, error};

use talon_proto::{extra_info, frame, take_builder, RpcType};

/// The stream a request/response object is bound to for reverse RPCs.
pub trait GatewayConn: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> GatewayConn for T {}

/// The gateway hung up (or the exchange failed) while a plugin was waiting
/// for a variable or a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the connection to the gateway is closed")]
pub struct ConnClosed;

pub(crate) enum InfoKind<'a> {
    Var(&'a str),
    ReqBody,
    RespBody,
}

pub(crate) async fn ask_extra_info(conn: &mut dyn GatewayConn, kind: InfoKind<'_>) -> Result<Bytes, ConnClosed> {
    // a dedicated short-lived builder, so an in-progress reply builder is
    // never interleaved with the reverse RPC
    let mut builder = take_builder();
    let (info_type, info) = match kind {
        InfoKind::Var(name) => {
            let name = builder.create_string(name);
            let var = extra_info::Var::create(&mut *builder, &extra_info::VarArgs { name: Some(name) });
            (extra_info::Info::Var, var.as_union_value())
        },
        InfoKind::ReqBody => {
            let body = extra_info::ReqBody::create(&mut *builder, &extra_info::ReqBodyArgs {});
            (extra_info::Info::ReqBody, body.as_union_value())
        },
        InfoKind::RespBody => {
            let body = extra_info::RespBody::create(&mut *builder, &extra_info::RespBodyArgs {});
            (extra_info::Info::RespBody, body.as_union_value())
        },
    };
    let req = extra_info::Req::create(&mut *builder, &extra_info::ReqArgs { info_type, info: Some(info) });
    builder.finish(req, None);

    if let Err(err) = frame::write_frame(conn, RpcType::ExtraInfo.as_byte(), builder.finished_data()).await {
        error!("write extra info request: {err}");
        return Err(ConnClosed);
    }

    let (ty, payload) = match frame::read_frame(conn).await {
        Ok(Some(got)) => got,
        Ok(None) => {
            error!("gateway closed the connection while an extra info reply was pending");
            return Err(ConnClosed);
        },
        Err(err) => {
            error!("read extra info reply: {err}");
            return Err(ConnClosed);
        },
    };
    debug!("receive rpc type: {ty} data length: {}", payload.len());

    let resp = match extra_info::root_as_resp(&payload) {
        Ok(resp) => resp,
        Err(err) => {
            error!("bad extra info reply: {err}");
            return Err(ConnClosed);
        },
    };
    Ok(resp.result().map(|v| Bytes::copy_from_slice(v.bytes())).unwrap_or_default())
}
