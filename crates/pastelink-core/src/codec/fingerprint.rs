/// A stable 16-byte content identifier: truncated blake3 over the raw bytes.
/// Tokens are deterministic, so the id doubles as a cache/provenance key.
pub fn content_id_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

pub fn content_id_hex(bytes: &[u8]) -> String {
    let id = content_id_16(bytes);
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in &id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
