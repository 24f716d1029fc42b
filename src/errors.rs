use std::fmt::{self, Display, Formatter};

/// Failure causes surfaced by the fallible operations of this crate.
///
/// Operations whose only possible outcome is "absent, no further detail"
/// (a zero nonce, an `r` that reduced to zero, a high-S signature) stay
/// `Option`/`bool` per the component contracts; this enum only covers
/// failures with a distinguishable cause worth naming to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `inv`/`div` was asked to invert a value that shares a factor with
    /// the modulus (gcd ≠ 1).
    NotInvertible,
    /// Square-root recovery found no `y` with `y² = x³ + 7 (mod p)`.
    InvalidYCoordinate,
    /// A serialized public key had the wrong length, wrong prefix byte,
    /// or an out-of-range coordinate.
    InvalidPublicKey,
    /// A DER signature was structurally malformed.
    InvalidSignature,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::NotInvertible => "value has no modular inverse",
            Error::InvalidYCoordinate => "x-coordinate is not on the curve",
            Error::InvalidPublicKey => "malformed public key encoding",
            Error::InvalidSignature => "malformed DER signature encoding",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}
