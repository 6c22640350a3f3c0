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

use talon_proto::err::Code;

use crate::conf::TokenNotFound;

/// A failed RPC call. Exactly the failures that cross the wire as an Error
/// frame; plugin-level failures never show up here.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("unknown rpc type: {0}")]
    UnknownType(u8),
    #[error("bad request: {0}")]
    BadRequest(#[from] flatbuffers::InvalidFlatbuffer),
    #[error(transparent)]
    TokenNotFound(#[from] TokenNotFound),
    #[error("a reply of {0} bytes exceeds the 24-bit frame cap")]
    Oversize(usize),
}

impl CallError {
    pub fn wire_code(&self) -> Code {
        match self {
            CallError::UnknownType(_) | CallError::BadRequest(_) => Code::BAD_REQUEST,
            CallError::TokenNotFound(_) => Code::CONF_TOKEN_NOT_FOUND,
            CallError::Oversize(_) => Code::SERVICE_UNAVAILABLE,
        }
    }
}
