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

use tokio::signal::unix::{signal, SignalKind};
use tracing::warn;

/// Resolves once SIGINT or SIGTERM is delivered.
pub async fn wait_signal() {
    let mut sigint = signal(SignalKind::interrupt()).expect("install SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("install SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => warn!("server receive SIGINT and exit"),
        _ = sigterm.recv() => warn!("server receive SIGTERM and exit"),
    }
}
