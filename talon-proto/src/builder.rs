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

//! Process-wide pool of reusable FlatBuffers builders.
//!
//! Every reply and every reverse-RPC request is serialized through one of
//! these. The guard returns the builder to the pool on drop, so error paths
//! release it too.

use std::ops::{Deref, DerefMut};

use flatbuffers::FlatBufferBuilder;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

const BUILDER_CAPACITY: usize = 256;

static POOL: Lazy<Mutex<Vec<FlatBufferBuilder<'static>>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A pooled [`FlatBufferBuilder`]. Dereferences to the builder; drop resets
/// it and hands it back.
pub struct PooledBuilder {
    inner: Option<FlatBufferBuilder<'static>>,
}

impl std::fmt::Debug for PooledBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledBuilder").finish_non_exhaustive()
    }
}

pub fn take_builder() -> PooledBuilder {
    let builder = POOL.lock().pop().unwrap_or_else(|| FlatBufferBuilder::with_capacity(BUILDER_CAPACITY));
    PooledBuilder { inner: Some(builder) }
}

impl Deref for PooledBuilder {
    type Target = FlatBufferBuilder<'static>;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref().expect("builder taken out of an active guard")
    }
}

impl DerefMut for PooledBuilder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_mut().expect("builder taken out of an active guard")
    }
}

impl Drop for PooledBuilder {
    fn drop(&mut self) {
        if let Some(mut builder) = self.inner.take() {
            builder.reset();
            POOL.lock().push(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err;

    #[test]
    fn builder_is_reusable_after_release() {
        let first = {
            let mut builder = take_builder();
            let resp = err::Resp::create(&mut *builder, &err::RespArgs { code: err::Code::BAD_REQUEST });
            builder.finish(resp, None);
            builder.finished_data().to_vec()
        };

        // a fresh acquire must behave as if the builder were new
        let mut builder = take_builder();
        let resp = err::Resp::create(&mut *builder, &err::RespArgs { code: err::Code::BAD_REQUEST });
        builder.finish(resp, None);
        assert_eq!(builder.finished_data(), &first[..]);
    }
}
