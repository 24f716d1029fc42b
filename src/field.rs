//! `Fp` and `Fr`: tagged wrappers around the modular kernel that fix the
//! modulus to the curve's base field `p` or scalar field `n`, and keep the
//! two algebraic objects nominally distinct so an x-coordinate can never
//! be passed where a scalar is expected (or vice versa) without saying so.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use dashu::integer::UBig;

use crate::curve::{n, p};
use crate::errors::Error;
use crate::modular;

/// A modulus tag. `PBase`/`NBase` are the only implementors; adding a
/// third would add a third field, never blurring these two.
pub trait Modulus {
    fn modulus() -> UBig;
    /// Short tag used only in `Debug` output, to tell `Fp`/`Fr` apart at a glance.
    fn tag() -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PBase;
impl Modulus for PBase {
    fn modulus() -> UBig {
        p()
    }
    fn tag() -> &'static str {
        "Fp"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NBase;
impl Modulus for NBase {
    fn modulus() -> UBig {
        n()
    }
    fn tag() -> &'static str {
        "Fr"
    }
}

/// An element of the field fixed by `M`, always reduced into `[0, m)`.
#[derive(Clone)]
pub struct FieldElement<M: Modulus> {
    v: UBig,
    _marker: PhantomData<M>,
}

pub type FpElt = FieldElement<PBase>;
pub type FrElt = FieldElement<NBase>;

impl<M: Modulus> PartialEq for FieldElement<M> {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}
impl<M: Modulus> Eq for FieldElement<M> {}

impl<M: Modulus> Debug for FieldElement<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x", M::tag())?;
        for byte in crate::bignat::encode_big_endian(&self.v) {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl<M: Modulus> FieldElement<M> {
    pub fn from_int(v: &UBig) -> Self {
        FieldElement { v: v % &M::modulus(), _marker: PhantomData }
    }

    pub fn to_int(&self) -> UBig {
        self.v.clone()
    }

    pub fn zero() -> Self {
        Self::from_int(&UBig::ZERO)
    }

    pub fn one() -> Self {
        Self::from_int(&UBig::ONE)
    }

    pub fn is_zero(&self) -> bool {
        self.v == UBig::ZERO
    }

    pub fn add(&self, other: &Self) -> Self {
        FieldElement { v: modular::add(&self.v, &other.v, &M::modulus()), _marker: PhantomData }
    }

    pub fn sub(&self, other: &Self) -> Self {
        FieldElement { v: modular::sub(&self.v, &other.v, &M::modulus()), _marker: PhantomData }
    }

    pub fn neg(&self) -> Self {
        FieldElement { v: modular::neg(&self.v, &M::modulus()), _marker: PhantomData }
    }

    pub fn mul(&self, other: &Self) -> Self {
        FieldElement { v: modular::mul(&self.v, &other.v, &M::modulus()), _marker: PhantomData }
    }

    pub fn sqr(&self) -> Self {
        FieldElement { v: modular::sqr(&self.v, &M::modulus()), _marker: PhantomData }
    }

    pub fn pow(&self, e: &UBig) -> Self {
        FieldElement { v: modular::pow(&self.v, e, &M::modulus()), _marker: PhantomData }
    }

    pub fn inv(&self) -> Result<Self, Error> {
        Ok(FieldElement { v: modular::inv(&self.v, &M::modulus())?, _marker: PhantomData })
    }

    pub fn div(&self, other: &Self) -> Result<Self, Error> {
        Ok(FieldElement { v: modular::div(&self.v, &other.v, &M::modulus())?, _marker: PhantomData })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_laws_hold_for_small_values() {
        let a = FpElt::from_int(&UBig::from_word(17));
        let b = FpElt::from_int(&UBig::from_word(5));
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.sub(&b), a.add(&b.neg()));
        assert_eq!(a.div(&b).unwrap(), a.mul(&b.inv().unwrap()));
        assert_eq!(a.add(&a.neg()), FpElt::zero());
        assert_eq!(a.mul(&a.inv().unwrap()), FpElt::one());
        assert_eq!(a.pow(&UBig::ZERO), FpElt::one());
        assert_eq!(a.pow(&UBig::ONE), a);
        assert_eq!(a.pow(&UBig::from_word(3)), a.pow(&UBig::from_word(2)).mul(&a));
    }

    #[test]
    fn fp_and_fr_share_no_accidental_equality_path() {
        // Different moduli: same underlying integer compares equal within
        // each type but the types themselves cannot be compared directly.
        // That is exactly the point. This only compiles because to_int()
        // is an explicit, visible crossover.
        let fp = FpElt::from_int(&UBig::from_word(9));
        let fr = FrElt::from_int(&UBig::from_word(9));
        assert_eq!(fp.to_int(), fr.to_int());
    }
}
