//! Credential obfuscation.
//!
//! NOT a security primitive: a deterministic fold over the input's
//! UTF-16 code units, kept bit-compatible with the hashes the first
//! release already persisted. Collisions are possible; login equality is
//! exact string match of hashes. A production deployment replaces this
//! with a slow, salted KDF and rehashes on next login.

/// Hash a plaintext credential into a short printable token.
///
/// The `h_` prefix distinguishes a hash from an accidentally stored
/// plaintext value.
pub fn simple_hash(plain: &str) -> String {
    let mut h: i32 = 0;
    for unit in plain.encode_utf16() {
        h = (h << 5).wrapping_sub(h).wrapping_add(unit as i32);
    }
    format!("h_{}", to_base36(i64::from(h).unsigned_abs()))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ascii")
}
