//! SEC1 point serialization and DER signature serialization.

use dashu::integer::UBig;

use crate::bignat::{decode_big_endian, encode_big_endian, encode_big_endian_padded};
use crate::curve;
use crate::errors::Error;
use crate::field::FpElt;
use crate::point::Point;
use crate::sqrt::get_y_from_x;

const SEC1_UNCOMPRESSED: u8 = 0x04;
const SEC1_COMPRESSED_EVEN: u8 = 0x02;
const SEC1_COMPRESSED_ODD: u8 = 0x03;

/// Serializes an affine point as `0x04 ‖ X[32] ‖ Y[32]`.
///
/// Panics if handed `Point::Zero`. The point at infinity has no SEC1
/// encoding, and every `PublicKey` this crate hands out is guaranteed
/// non-zero (private keys live in `[1, n-1]`).
pub fn serialize_uncompressed(point: &Point) -> [u8; 65] {
    let (x, y) = match point {
        Point::Affine(x, y) => (x, y),
        Point::Zero => panic!("the point at infinity has no SEC1 encoding"),
    };
    let mut out = [0u8; 65];
    out[0] = SEC1_UNCOMPRESSED;
    out[1..33].copy_from_slice(&encode_big_endian_padded(32, &x.to_int()));
    out[33..65].copy_from_slice(&encode_big_endian_padded(32, &y.to_int()));
    out
}

/// Deserializes an uncompressed SEC1 point. Rejects wrong length, wrong
/// prefix, or a coordinate `>= p`. Does not re-check that the point is on
/// the curve; call `Point::is_valid` if that matters for the input.
pub fn deserialize_uncompressed(bytes: &[u8]) -> Option<Point> {
    if bytes.len() != 65 || bytes[0] != SEC1_UNCOMPRESSED {
        return None;
    }
    let p = curve::p();
    let x_int = decode_big_endian(&bytes[1..33]);
    let y_int = decode_big_endian(&bytes[33..65]);
    if x_int >= p || y_int >= p {
        return None;
    }
    Some(Point::Affine(FpElt::from_int(&x_int), FpElt::from_int(&y_int)))
}

/// Serializes an affine point as `(0x02 | 0x03) ‖ X[32]`.
///
/// Panics on `Point::Zero`, for the same reason as [`serialize_uncompressed`].
pub fn serialize_compressed(point: &Point) -> [u8; 33] {
    let (x, y) = match point {
        Point::Affine(x, y) => (x, y),
        Point::Zero => panic!("the point at infinity has no SEC1 encoding"),
    };
    let even = (&y.to_int() % UBig::from_word(2)) == UBig::ZERO;
    let mut out = [0u8; 33];
    out[0] = if even { SEC1_COMPRESSED_EVEN } else { SEC1_COMPRESSED_ODD };
    out[1..].copy_from_slice(&encode_big_endian_padded(32, &x.to_int()));
    out
}

/// Deserializes a compressed SEC1 point, recovering `Y` via Tonelli–Shanks.
/// Rejects wrong length, wrong prefix, `X >= p`, or an `X` off the curve.
pub fn deserialize_compressed(bytes: &[u8]) -> Option<Point> {
    if bytes.len() != 33 {
        return None;
    }
    let want_even = match bytes[0] {
        SEC1_COMPRESSED_EVEN => true,
        SEC1_COMPRESSED_ODD => false,
        _ => return None,
    };
    let x_int = decode_big_endian(&bytes[1..33]);
    if x_int >= curve::p() {
        return None;
    }
    let x = FpElt::from_int(&x_int);
    let y = get_y_from_x(&x, want_even)?;
    Some(Point::Affine(x, y))
}

fn der_integer(v: &UBig) -> Vec<u8> {
    let mut bytes = encode_big_endian(v);
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    let mut out = Vec::with_capacity(bytes.len() + 2);
    out.push(0x02);
    out.push(bytes.len() as u8);
    out.extend_from_slice(&bytes);
    out
}

/// DER-encodes `SEQUENCE { INTEGER r, INTEGER s }`.
pub fn serialize_der(r: &UBig, s: &UBig) -> Vec<u8> {
    let enc_r = der_integer(r);
    let enc_s = der_integer(s);
    let mut out = Vec::with_capacity(2 + enc_r.len() + enc_s.len());
    out.push(0x30);
    out.push((enc_r.len() + enc_s.len()) as u8);
    out.extend_from_slice(&enc_r);
    out.extend_from_slice(&enc_s);
    out
}

fn parse_der_integer(bytes: &[u8], pos: &mut usize) -> Option<UBig> {
    if *pos + 2 > bytes.len() || bytes[*pos] != 0x02 {
        return None;
    }
    let len = bytes[*pos + 1] as usize;
    let start = *pos + 2;
    if start + len > bytes.len() {
        return None;
    }
    let value = decode_big_endian(&bytes[start..start + len]);
    *pos = start + len;
    Some(value)
}

/// Parses a DER signature, accepting only byte-exact input (no trailing bytes).
pub fn deserialize_der(bytes: &[u8]) -> Result<(UBig, UBig), Error> {
    if bytes.len() < 2 || bytes[0] != 0x30 {
        return Err(Error::InvalidSignature);
    }
    let len = bytes[1] as usize;
    if len != bytes.len() - 2 {
        return Err(Error::InvalidSignature);
    }
    let mut pos = 2;
    let r = parse_der_integer(bytes, &mut pos).ok_or(Error::InvalidSignature)?;
    let s = parse_der_integer(bytes, &mut pos).ok_or(Error::InvalidSignature)?;
    if pos != bytes.len() {
        return Err(Error::InvalidSignature);
    }
    Ok((r, s))
}
