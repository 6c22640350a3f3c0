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

use http::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

/// A mutable header multimap that remembers the original values it was
/// materialized from, so a minimal set/delete diff can be serialized later.
///
/// Lookups, sets and deletes are case-insensitive; names are emitted in their
/// canonical (lowercase) form.
#[derive(Debug, Default)]
pub struct Header {
    current: HeaderMap,
    original: HeaderMap,
}

/// One entry of a header diff: a deletion when `value` is `None`, otherwise a
/// set of the given value.
pub(crate) type DiffEntry<'a> = (&'a HeaderName, Option<&'a HeaderValue>);

impl Header {
    pub(crate) fn from_entries<'e>(entries: impl Iterator<Item = (&'e str, &'e str)>) -> Self {
        let mut current = HeaderMap::new();
        for (name, value) in entries {
            let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
                debug!("dropping header with invalid name: {name}");
                continue;
            };
            let Ok(value) = HeaderValue::from_str(value) else {
                debug!("dropping header {name} with invalid value");
                continue;
            };
            current.append(name, value);
        }
        let original = current.clone();
        Header { current, original }
    }

    /// First value associated with the name, or "" when absent.
    pub fn get(&self, name: &str) -> &str {
        self.current.get(name).and_then(|v| v.to_str().ok()).unwrap_or("")
    }

    /// Replaces all values associated with the name.
    pub fn set(&mut self, name: &str, value: &str) {
        let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
            debug!("ignoring header set with invalid name: {name}");
            return;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            debug!("ignoring header set with invalid value for {name}");
            return;
        };
        self.current.insert(name, value);
    }

    /// Removes all values associated with the name.
    pub fn del(&mut self, name: &str) {
        self.current.remove(name);
    }

    /// Read-only view of the current state. Writes through other means are
    /// not tracked.
    pub fn view(&self) -> &HeaderMap {
        &self.current
    }

    /// The set/delete entries that turn the original map into the current
    /// one. Comparisons are first-value only.
    pub(crate) fn diff(&self) -> Vec<DiffEntry<'_>> {
        let mut out = Vec::new();
        for name in self.original.keys() {
            if !self.current.contains_key(name) {
                out.push((name, None));
            }
        }
        for name in self.current.keys() {
            let value = self.current.get(name);
            if self.original.get(name) != value {
                out.push((name, value));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with(entries: &[(&str, &str)]) -> Header {
        Header::from_entries(entries.iter().map(|(n, v)| (*n, *v)))
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut h = header_with(&[]);
        h.set("X-Res", "ok");
        assert_eq!(h.get("x-res"), "ok");
        assert_eq!(h.get("X-RES"), "ok");

        h.del("X-RES");
        assert_eq!(h.get("x-res"), "");
    }

    #[test]
    fn untouched_headers_produce_no_diff() {
        let h = header_with(&[("accept", "*/*"), ("host", "example.com")]);
        assert!(h.diff().is_empty());
    }

    #[test]
    fn diff_tracks_set_and_delete() {
        let mut h = header_with(&[("accept", "*/*"), ("host", "example.com")]);
        h.set("accept", "text/html");
        h.del("host");
        h.set("x-extra", "1");

        let diff = h.diff();
        assert_eq!(diff.len(), 3);
        assert!(diff.iter().any(|(n, v)| n.as_str() == "host" && v.is_none()));
        assert!(diff.iter().any(|(n, v)| n.as_str() == "accept" && v.map(|v| v.as_bytes()) == Some(b"text/html".as_slice())));
        assert!(diff.iter().any(|(n, v)| n.as_str() == "x-extra" && v.map(|v| v.as_bytes()) == Some(b"1".as_slice())));
    }

    #[test]
    fn delete_then_readd_under_other_case_collapses() {
        let mut h = header_with(&[("X-Canary", "a")]);
        h.del("x-canary");
        h.set("X-CANARY", "b");

        let diff = h.diff();
        assert_eq!(diff.len(), 1);
        let (name, value) = diff[0];
        assert_eq!(name.as_str(), "x-canary");
        assert_eq!(value.map(|v| v.as_bytes()), Some(b"b".as_slice()));
    }

    #[test]
    fn comparison_is_first_value_only() {
        let mut h = header_with(&[("cookie", "a=1"), ("cookie", "b=2")]);
        // same first value, second value untouched
        h.set("cookie", "a=1");
        let diff = h.diff();
        assert!(diff.is_empty());
    }
}
