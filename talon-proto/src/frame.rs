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

//! Length-prefixed framing for the gateway socket.
//!
//! Every message is a 4-byte header followed by the payload. Byte 0 carries
//! the RPC type tag, bytes 1-3 the payload length as a 24-bit big-endian
//! integer, which caps a single payload at [`MAX_PAYLOAD_SIZE`].

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

pub const HEADER_LEN: usize = 4;
pub const MAX_PAYLOAD_SIZE: usize = (1 << 24) - 1;

/// RPC type tags as they appear in byte 0 of the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RpcType {
    Error = 0,
    PrepareConf = 1,
    HttpReqCall = 2,
    ExtraInfo = 3,
    HttpRespCall = 4,
}

impl RpcType {
    pub fn from_byte(b: u8) -> Option<RpcType> {
        match b {
            0 => Some(RpcType::Error),
            1 => Some(RpcType::PrepareConf),
            2 => Some(RpcType::HttpReqCall),
            3 => Some(RpcType::ExtraInfo),
            4 => Some(RpcType::HttpRespCall),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

#[inline]
pub fn encode_header(ty: u8, len: usize) -> [u8; HEADER_LEN] {
    debug_assert!(len <= MAX_PAYLOAD_SIZE);
    [ty, (len >> 16) as u8, (len >> 8) as u8, len as u8]
}

#[inline]
pub fn decode_header(header: [u8; HEADER_LEN]) -> (u8, usize) {
    let len = ((header[1] as usize) << 16) | ((header[2] as usize) << 8) | header[3] as usize;
    (header[0], len)
}

/// Reads one framed message. Returns `None` on a clean end of stream (no
/// header byte received). A partial header or a payload cut short by EOF is
/// reported as [`io::ErrorKind::UnexpectedEof`].
pub async fn read_frame<R>(r: &mut R) -> io::Result<Option<(u8, Vec<u8>)>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut header = [0u8; HEADER_LEN];
    let mut got = 0;
    while got < HEADER_LEN {
        let n = r.read(&mut header[got..]).await?;
        if n == 0 {
            if got == 0 {
                return Ok(None);
            }
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("truncated header, only got the first {got} bytes"),
            ));
        }
        got += n;
    }

    let (ty, len) = decode_header(header);
    let mut payload = vec![0u8; len];
    r.read_exact(&mut payload).await?;
    Ok(Some((ty, payload)))
}

/// Writes one framed message: header then payload.
pub async fn write_frame<W>(w: &mut W, ty: u8, payload: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("the max length of data is {MAX_PAYLOAD_SIZE} but got {}", payload.len()),
        ));
    }
    let header = encode_header(ty, payload.len());
    w.write_all(&header).await?;
    w.write_all(payload).await?;
    Ok(())
}
