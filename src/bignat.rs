//! Arbitrary-precision non-negative integer conversions.
//!
//! Everything here treats byte sequences as big-endian unsigned integers;
//! the heavy lifting is delegated to `dashu`'s `UBig`.

use dashu::integer::UBig;

/// Decodes a big-endian byte sequence into a non-negative integer.
/// Never fails; an empty slice decodes to zero.
pub fn decode_big_endian(bytes: &[u8]) -> UBig {
    UBig::from_be_bytes(bytes)
}

/// Encodes `v` as the minimal-length big-endian byte sequence.
/// `v = 0` encodes to a single `0x00` byte.
pub fn encode_big_endian(v: &UBig) -> Vec<u8> {
    if *v == UBig::ZERO {
        return vec![0u8];
    }
    v.to_be_bytes().to_vec()
}

/// Encodes `v` as exactly `len` big-endian bytes, zero-extended on the
/// left. If `v >= 256^len`, the result is `v mod 256^len`.
pub fn encode_big_endian_padded(len: usize, v: &UBig) -> Vec<u8> {
    let modulus = UBig::ONE << (len * 8);
    let reduced = if v >= &modulus { v % &modulus } else { v.clone() };
    let bytes = encode_big_endian(&reduced);
    let mut out = vec![0u8; len];
    let start = len - bytes.len();
    out[start..].copy_from_slice(&bytes);
    out
}

/// Decomposes `v` into its bits, least-significant first, in the
/// shortest representation: `0` decomposes to the empty sequence.
pub fn bits_lsb_first(v: &UBig) -> Vec<bool> {
    if *v == UBig::ZERO {
        return Vec::new();
    }
    let bytes = v.to_be_bytes();
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes.iter().rev() {
        for i in 0..8 {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    while bits.last() == Some(&false) {
        bits.pop();
    }
    bits
}
