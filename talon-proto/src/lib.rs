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

//! Wire protocol shared by the runner and its tests: the FlatBuffers message
//! definitions, the 4-byte frame codec, and the builder pool.

pub mod builder;
pub mod fbs;
pub mod frame;

pub use builder::{take_builder, PooledBuilder};
pub use fbs::{common, err, extra_info, http_req_call, http_resp_call, prepare_conf};
pub use frame::{
    decode_header, encode_header, read_frame, write_frame, RpcType, HEADER_LEN, MAX_PAYLOAD_SIZE,
};
