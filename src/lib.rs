//! A self-contained ECDSA implementation over secp256k1.
//!
//! Modular arithmetic over the base field `Fp` and scalar field `Fr`,
//! affine point arithmetic on `y² = x³ + 7`, scalar multiplication,
//! ECDSA sign/verify with low-S normalization, and SEC1/DER
//! serialization. SHA-256 and the source of nonce randomness are the
//! only external collaborators: the former is linked in via `sha2`, the
//! latter is always supplied by the caller.
//!
//! Not constant-time: modular inversion and scalar multiplication here
//! are variable-time, same as the reference this crate tracks. Don't use
//! this where timing side-channels are in the threat model.

pub mod bignat;
pub mod curve;
pub mod ecdsa;
pub mod errors;
pub mod field;
pub mod hash;
pub mod modular;
pub mod point;
pub mod ser;
pub mod sqrt;

pub use curve::Curve;
pub use ecdsa::{
    get_public_key, get_secret_key, normalize_signature, sign, sign_hashed, verify, verify_hashed,
    PrivateKey, PublicKey, Signature,
};
pub use errors::Error;
pub use field::{FpElt, FrElt};
pub use point::Point;
pub use sqrt::{fp_sqrt, get_y_from_x};
