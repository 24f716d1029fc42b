//! Modular arithmetic kernel.
//!
//! Every function here assumes a modulus `m > 1` and that inputs already
//! lie in `[0, m)`; callers (the `field` wrappers) are responsible for
//! reducing first.

use dashu::integer::fast_div::ConstDivisor;
use dashu::integer::modular::IntoRing;
use dashu::integer::{IBig, UBig};

use crate::errors::Error;

pub fn add(x: &UBig, y: &UBig, m: &UBig) -> UBig {
    let z = x + y;
    if &z < m {
        z
    } else {
        z - m
    }
}

pub fn sub(x: &UBig, y: &UBig, m: &UBig) -> UBig {
    if x >= y {
        x - y
    } else {
        x + m - y
    }
}

pub fn neg(x: &UBig, m: &UBig) -> UBig {
    if *x == UBig::ZERO {
        UBig::ZERO
    } else {
        m - x
    }
}

pub fn mul(x: &UBig, y: &UBig, m: &UBig) -> UBig {
    (x * y) % m
}

pub fn sqr(x: &UBig, m: &UBig) -> UBig {
    mul(x, x, m)
}

/// `x^e mod m` by left-to-right square-and-multiply, via a `ConstDivisor`
/// ring so the intermediate product isn't re-reduced with a fresh
/// division at every step.
pub fn pow(x: &UBig, e: &UBig, m: &UBig) -> UBig {
    if *m == UBig::ONE {
        return UBig::ZERO;
    }
    let ring = ConstDivisor::new(m.clone());
    let base = x.clone().into_ring(&ring);
    base.pow(e).residue()
}

/// Extended Euclidean algorithm: returns `(g, u, v)` with `g = gcd(a, b)`
/// and `u*a + v*b = g`. Any particular solution within the family is
/// acceptable; this implementation follows the textbook iterative form,
/// carrying the Bézout coefficients as `IBig` since they can go negative.
pub fn ext_gcd(a: &UBig, b: &UBig) -> (UBig, IBig, IBig) {
    let mut old_r = IBig::from(a.clone());
    let mut r = IBig::from(b.clone());
    let mut old_s = IBig::ONE;
    let mut s = IBig::ZERO;
    let mut old_t = IBig::ZERO;
    let mut t = IBig::ONE;

    while r != IBig::ZERO {
        let q = &old_r / &r;
        let new_r = &old_r - &q * &r;
        old_r = r;
        r = new_r;

        let new_s = &old_s - &q * &s;
        old_s = s;
        s = new_s;

        let new_t = &old_t - &q * &t;
        old_t = t;
        t = new_t;
    }

    let g: UBig = old_r.try_into().expect("gcd of two UBig inputs is never negative");
    (g, old_s, old_t)
}

/// Reduces a signed value into `[0, m)`.
fn ibig_to_mod(v: IBig, m: &UBig) -> UBig {
    let m_signed = IBig::from(m.clone());
    let r = v % &m_signed;
    let r = if r < IBig::ZERO { r + &m_signed } else { r };
    r.try_into().expect("reduced value is non-negative by construction")
}

/// Modular inverse of `x` modulo `m`, in `[0, m)`. Fails when `gcd(x, m) != 1`.
pub fn inv(x: &UBig, m: &UBig) -> Result<UBig, Error> {
    let (g, u, _v) = ext_gcd(x, m);
    if g != UBig::ONE {
        return Err(Error::NotInvertible);
    }
    Ok(ibig_to_mod(u, m))
}

pub fn div(x: &UBig, y: &UBig, m: &UBig) -> Result<UBig, Error> {
    Ok(mul(x, &inv(y, m)?, m))
}
