use dashu::integer::UBig;

use crate::field::{FpElt, FrElt};
use crate::point::Point;

/// Domain constants for secp256k1: y² = x³ + 7 over 𝔽p, subgroup order 𝑁.
pub struct Curve;

impl Curve {
    /// Field prime 𝑃 = 2²⁵⁶ − 2³² − 977.
    pub const P: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff,
        0xfc, 0x2f,
    ];

    /// Subgroup order 𝑁 generated by 𝐺.
    pub const N: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
        0x41, 0x41,
    ];

    /// Generator point 𝐺, X half.
    pub const GX: [u8; 32] = [
        0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
        0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
        0x17, 0x98,
    ];

    /// Generator point 𝐺, Y half.
    pub const GY: [u8; 32] = [
        0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
        0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
        0xD4, 0xB8,
    ];

    /// Curve coefficient `a`. Always zero for secp256k1.
    pub const A: u64 = 0;
    /// Curve coefficient `b`.
    pub const B: u64 = 7;
}

/// `P` as an arbitrary-precision integer.
pub fn p() -> UBig {
    UBig::from_be_bytes(&Curve::P)
}

/// `N` as an arbitrary-precision integer.
pub fn n() -> UBig {
    UBig::from_be_bytes(&Curve::N)
}

/// `(P + 1) / 4`, the Tonelli–Shanks exponent valid because `P ≡ 3 (mod 4)`.
///
/// Derived from `P` rather than hardcoded so a transcription error in a
/// second 32-byte constant can't silently diverge from `P` itself.
pub fn p_sqrt_exponent() -> UBig {
    (p() + UBig::ONE) / UBig::from_word(4)
}

/// `(N + 1) / 2`, the low-S threshold: valid signatures have `s < n_half()`.
pub fn n_half() -> UBig {
    (n() + UBig::ONE) / UBig::from_word(2)
}

/// The generator point `G`.
pub fn g() -> Point {
    Point::Affine(
        FpElt::from_int(&UBig::from_be_bytes(&Curve::GX)),
        FpElt::from_int(&UBig::from_be_bytes(&Curve::GY)),
    )
}

/// `0` lifted into `Fr`, for convenience at call sites that compare against it.
pub fn fr_zero() -> FrElt {
    FrElt::from_int(&UBig::ZERO)
}

/// `0` lifted into `Fp`.
pub fn fp_zero() -> FpElt {
    FpElt::from_int(&UBig::ZERO)
}
