/// Seed derivation: a stable 32-bit seed from the request inputs.

use md5::{Digest, Md5};

/// Derive the generator seed from a topic and optional audience.
///
/// The seed is the first 32 bits (the first 8 hex digits, big-endian) of
/// MD5(topic ‖ audience). A missing audience hashes as the empty string, so
/// `seed(t, None) == seed(t, Some(""))`.
pub fn seed(topic: &str, audience: Option<&str>) -> u32 {
    let mut hasher = Md5::new();
    hasher.update(topic.as_bytes());
    hasher.update(audience.unwrap_or("").as_bytes());
    let digest = hasher.finalize();
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
