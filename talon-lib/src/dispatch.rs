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

//! Maps an inbound frame to its handler and turns failures into Error
//! frames.

use tracing::{error, warn};

use talon_proto::{err, take_builder, PooledBuilder, RpcType, MAX_PAYLOAD_SIZE};
use talon_sdk::GatewayConn;

use crate::conf::handle_prepare_conf;
use crate::error::CallError;
use crate::pipeline::{handle_http_req_call, handle_http_resp_call};

/// Dispatches one inbound frame. Returns the reply type tag and the
/// finished reply payload; errors never escape, they become Error frames.
pub async fn dispatch(ty: u8, buf: &[u8], conn: &mut dyn GatewayConn) -> (u8, PooledBuilder) {
    let result = match RpcType::from_byte(ty) {
        Some(RpcType::PrepareConf) => handle_prepare_conf(buf),
        Some(RpcType::HttpReqCall) => handle_http_req_call(buf, conn).await,
        Some(RpcType::HttpRespCall) => handle_http_resp_call(buf, conn).await,
        // ExtraInfo frames only ever travel gateway-bound; one arriving here
        // is as bogus as an unknown tag
        Some(RpcType::Error) | Some(RpcType::ExtraInfo) | None => Err(CallError::UnknownType(ty)),
    };

    let builder = match result {
        Ok(builder) => builder,
        Err(err) => return (RpcType::Error.as_byte(), report_error(&err)),
    };

    let size = builder.finished_data().len();
    if size > MAX_PAYLOAD_SIZE {
        // reclaim the oversized buffer before building the error reply
        drop(builder);
        return (RpcType::Error.as_byte(), report_error(&CallError::Oversize(size)));
    }

    (ty, builder)
}

fn report_error(err: &CallError) -> PooledBuilder {
    match err {
        // expected churn when the gateway's token outlived ours
        CallError::TokenNotFound(_) => warn!("{err}"),
        _ => error!("{err}"),
    }

    let mut builder = take_builder();
    let resp = err::Resp::create(&mut *builder, &err::RespArgs { code: err.wire_code() });
    builder.finish(resp, None);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use talon_sdk::{raw_conf, Plugin, PluginConf, Request, ResponseWriter};

    use crate::conf::{insert_rule_conf, ConfEntry};
    use crate::registry;

    fn error_code_of(builder: &PooledBuilder) -> err::Code {
        err::root_as_resp(builder.finished_data()).unwrap().code()
    }

    #[tokio::test]
    async fn unknown_type_reports_bad_request() {
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let (ty, builder) = dispatch(9, &[], &mut pipe).await;
        assert_eq!(ty, RpcType::Error.as_byte());
        assert_eq!(error_code_of(&builder), err::Code::BAD_REQUEST);
    }

    #[tokio::test]
    async fn expired_token_reports_conf_token_not_found() {
        let buf = {
            let mut builder = take_builder();
            let req = talon_proto::http_req_call::Req::create(
                &mut *builder,
                &talon_proto::http_req_call::ReqArgs { id: 1, conf_token: 870_001, ..Default::default() },
            );
            builder.finish(req, None);
            builder.finished_data().to_vec()
        };
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let (ty, builder) = dispatch(RpcType::HttpReqCall.as_byte(), &buf, &mut pipe).await;
        assert_eq!(ty, RpcType::Error.as_byte());
        assert_eq!(error_code_of(&builder), err::Code::CONF_TOKEN_NOT_FOUND);
    }

    #[tokio::test]
    async fn garbage_payload_reports_bad_request() {
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let (ty, builder) = dispatch(RpcType::PrepareConf.as_byte(), &[0xff, 0xff, 0x01], &mut pipe).await;
        assert_eq!(ty, RpcType::Error.as_byte());
        assert_eq!(error_code_of(&builder), err::Code::BAD_REQUEST);
    }

    struct Oversizer(&'static str);

    #[async_trait::async_trait]
    impl Plugin for Oversizer {
        fn name(&self) -> &str {
            self.0
        }

        fn parse_conf(&self, conf: &[u8]) -> talon_sdk::Result<PluginConf> {
            raw_conf(conf)
        }

        async fn request_filter(&self, _conf: &PluginConf, w: &mut ResponseWriter, _r: &mut Request<'_>) {
            w.write(&vec![b'x'; 1 << 24]);
        }
    }

    #[tokio::test]
    async fn oversized_reply_is_replaced_with_service_unavailable() {
        registry::register(Arc::new(Oversizer("dispatch-oversizer"))).unwrap();
        insert_rule_conf(
            870_002,
            vec![ConfEntry { name: "dispatch-oversizer".into(), conf: Arc::new(()) }],
        );

        let buf = {
            let mut builder = take_builder();
            let req = talon_proto::http_req_call::Req::create(
                &mut *builder,
                &talon_proto::http_req_call::ReqArgs { id: 2, conf_token: 870_002, ..Default::default() },
            );
            builder.finish(req, None);
            builder.finished_data().to_vec()
        };
        let (mut pipe, _peer) = tokio::io::duplex(64);
        let (ty, builder) = dispatch(RpcType::HttpReqCall.as_byte(), &buf, &mut pipe).await;
        assert_eq!(ty, RpcType::Error.as_byte());
        assert_eq!(error_code_of(&builder), err::Code::SERVICE_UNAVAILABLE);
    }
}
