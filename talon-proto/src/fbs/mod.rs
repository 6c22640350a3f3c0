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

//! Checked-in flatc output for the schemas under `schema/`. Regenerate with
//! `flatc --rust -o src/fbs schema/*.fbs` after a schema change.

pub mod common_generated;
pub mod err_generated;
pub mod extra_info_generated;
pub mod http_req_call_generated;
pub mod http_resp_call_generated;
pub mod prepare_conf_generated;

pub use common_generated::common;
pub use err_generated::err;
pub use extra_info_generated::extra_info;
pub use http_req_call_generated::http_req_call;
pub use http_resp_call_generated::http_resp_call;
pub use prepare_conf_generated::prepare_conf;
