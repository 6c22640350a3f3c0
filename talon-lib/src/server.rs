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

//! The Unix socket server: accept loop plus the sequential per-connection
//! read/dispatch/write loop.

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;

use futures::FutureExt;
use tokio::net::{UnixListener, UnixStream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use talon_proto::frame::{read_frame, write_frame};

use crate::conf::init_conf_cache;
use crate::dispatch::dispatch;
use crate::settings::Settings;
use crate::Result;

/// Binds the socket and serves connections until the token is cancelled.
/// The socket file is removed on the way out.
pub async fn run(settings: &Settings, shutdown: CancellationToken) -> Result<()> {
    init_conf_cache(settings.conf_cache_ttl);
    warn!("conf cache ttl is {:?}", settings.conf_cache_ttl);

    let path = &settings.socket_path;
    // clean up a socket file left over by a previous run
    if let Err(err) = fs::remove_file(path) {
        if err.kind() != io::ErrorKind::NotFound {
            return Err(format!("remove file {}: {err}", path.display()).into());
        }
    }

    let listener = UnixListener::bind(path).map_err(|err| format!("listen {}: {err}", path.display()))?;

    // the default mode keeps the gateway's unprivileged workers from
    // connecting when the runner itself is started as root
    fs::set_permissions(path, fs::Permissions::from_mode(0o766))
        .map_err(|err| format!("can't change mode for file {}: {err}", path.display()))?;

    warn!("listening to {}", path.display());

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _)) => {
                        tokio::spawn(handle_connection(stream));
                    },
                    Err(err) => error!("accept: {err}"),
                }
            },
        }
    }

    if let Err(err) = fs::remove_file(path) {
        error!("remove file {}: {err}", path.display());
    }
    Ok(())
}

async fn handle_connection(mut stream: UnixStream) {
    info!("client connected");

    // a panicking plugin tears down this connection, not the process
    if std::panic::AssertUnwindSafe(connection_loop(&mut stream)).catch_unwind().await.is_err() {
        error!("panic recovered in connection handler");
    }
}

async fn connection_loop(stream: &mut UnixStream) {
    loop {
        let (ty, payload) = match read_frame(stream).await {
            Ok(Some(frame)) => frame,
            Ok(None) => return,
            Err(err) => {
                error!("read: {err}");
                return;
            },
        };

        debug!("receive rpc type: {ty} data length: {}", payload.len());

        let (reply_ty, builder) = dispatch(ty, &payload, stream).await;
        if let Err(err) = write_frame(stream, reply_ty, builder.finished_data()).await {
            error!("write: {err}");
            return;
        }
    }
}
