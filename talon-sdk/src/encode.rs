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

//! TextEntry vector serialization shared by the request and response diff
//! paths. All child entries are created before the vector, and the vector
//! before its parent table.

use flatbuffers::{FlatBufferBuilder, ForwardsUOffset, Vector, WIPOffset};
use http::HeaderMap;
use multimap::MultiMap;

use talon_proto::common::{TextEntry, TextEntryArgs};

use crate::header::Header;

pub(crate) type EntryVector = WIPOffset<Vector<'static, ForwardsUOffset<TextEntry<'static>>>>;

pub(crate) fn text_entry(
    builder: &mut FlatBufferBuilder<'static>,
    name: &str,
    value: Option<&str>,
) -> WIPOffset<TextEntry<'static>> {
    let name = builder.create_string(name);
    let value = value.map(|v| builder.create_string(v));
    TextEntry::create(builder, &TextEntryArgs { name: Some(name), value })
}

/// Serializes a header diff: deletions as name-only entries, sets as
/// name+value.
pub(crate) fn header_diff(builder: &mut FlatBufferBuilder<'static>, hdr: &Header) -> EntryVector {
    let mut entries = Vec::new();
    for (name, value) in hdr.diff() {
        entries.push(text_entry(builder, name.as_str(), value.map(|v| v.to_str().unwrap_or_default())));
    }
    builder.create_vector(&entries)
}

/// Serializes every entry of an additive map, one TextEntry per value.
pub(crate) fn additive_headers(builder: &mut FlatBufferBuilder<'static>, map: &HeaderMap) -> EntryVector {
    let mut entries = Vec::new();
    for (name, value) in map {
        entries.push(text_entry(builder, name.as_str(), Some(value.to_str().unwrap_or_default())));
    }
    builder.create_vector(&entries)
}

/// Serializes a query-string diff. Value lists are compared as a whole:
/// when the lists for a name differ, every current value is emitted.
pub(crate) fn args_diff(
    builder: &mut FlatBufferBuilder<'static>,
    current: &MultiMap<String, String>,
    original: &MultiMap<String, String>,
) -> EntryVector {
    let mut entries = Vec::new();
    for name in original.keys() {
        if !current.contains_key(name) {
            entries.push(text_entry(builder, name, None));
        }
    }
    for (name, values) in current.iter_all() {
        if original.get_vec(name) != Some(values) {
            for value in values {
                entries.push(text_entry(builder, name, Some(value)));
            }
        }
    }
    builder.create_vector(&entries)
}
