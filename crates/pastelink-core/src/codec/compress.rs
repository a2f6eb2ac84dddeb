// crates/pastelink-core/src/codec/compress.rs
//
// Streaming zstd around the token payload. Both directions drain the stream
// through a fixed-size chunk loop; output byte order is load-bearing, so
// chunks are appended strictly in read order.

use std::io::Read;

use crate::error::{Result, ShareError};

/// Tokens ride in an address bar; favor density over encode speed.
const LEVEL: i32 = 19;

const CHUNK: usize = 16 * 1024;

pub fn pack(bytes: &[u8]) -> Result<Vec<u8>> {
    let enc = zstd::stream::read::Encoder::new(bytes, LEVEL)
        .map_err(|e| ShareError::CapabilityUnavailable(format!("compressor init: {e}")))?;

    // The source is an in-memory slice, so a mid-stream failure can only be
    // the compressor itself.
    drain(enc).map_err(|e| ShareError::CapabilityUnavailable(format!("compress: {e}")))
}

pub fn unpack(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.is_empty() {
        return Err(ShareError::CorruptPayload("empty compressed payload".into()));
    }

    let dec = zstd::stream::read::Decoder::new(bytes)
        .map_err(|e| ShareError::CapabilityUnavailable(format!("decompressor init: {e}")))?;

    drain(dec).map_err(|e| ShareError::CorruptPayload(format!("decompress: {e}")))
}

/// Pull chunks until the stream is exhausted, concatenating in order.
/// Total output length is not known in advance.
fn drain(mut src: impl Read) -> std::io::Result<Vec<u8>> {
    let mut out: Vec<u8> = Vec::new();
    let mut chunk = [0u8; CHUNK];

    loop {
        let n = src.read(&mut chunk)?;
        if n == 0 {
            return Ok(out);
        }
        out.extend_from_slice(&chunk[..n]);
    }
}
