//! Square roots in `Fp`, specialised to `p ≡ 3 (mod 4)`.

use dashu::integer::UBig;

use crate::curve;
use crate::field::FpElt;

/// `sqrt(u)` when `u` is a quadratic residue, via `u^((p+1)/4) mod p`.
/// Returns `None` when `u` is a non-residue.
pub fn fp_sqrt(u: &FpElt) -> Option<FpElt> {
    let r = u.pow(&curve::p_sqrt_exponent());
    if r.sqr() == *u {
        Some(r)
    } else {
        None
    }
}

fn is_even(v: &UBig) -> bool {
    (v % UBig::from_word(2)) == UBig::ZERO
}

/// Recovers the `y` coordinate for a given `x`, choosing the root whose
/// parity matches `want_even`. Returns `None` when `x` is not on the curve.
pub fn get_y_from_x(x: &FpElt, want_even: bool) -> Option<FpElt> {
    let seven = FpElt::from_int(&UBig::from_word(7));
    let rhs = x.pow(&UBig::from_word(3)).add(&seven);
    let r = fp_sqrt(&rhs)?;
    let r_even = is_even(&r.to_int());
    Some(if r_even == want_even { r } else { r.neg() })
}
