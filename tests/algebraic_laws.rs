//! Property-based checks of the field and curve laws from the component
//! design: commutativity/associativity of add and mul, additive/multiplicative
//! inverses, and the scalar-multiplication recurrence `mul(P, k+1) = add(mul(P, k), P)`.

use dashu::integer::UBig;
use proptest::prelude::*;
use secp256k1_ecdsa::curve;
use secp256k1_ecdsa::{FpElt, FrElt};

fn arb_u64() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    #[test]
    fn fp_add_is_commutative(a in arb_u64(), b in arb_u64()) {
        let a = FpElt::from_int(&UBig::from(a));
        let b = FpElt::from_int(&UBig::from(b));
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn fp_mul_is_commutative(a in arb_u64(), b in arb_u64()) {
        let a = FpElt::from_int(&UBig::from(a));
        let b = FpElt::from_int(&UBig::from(b));
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn fp_add_is_associative(a in arb_u64(), b in arb_u64(), c in arb_u64()) {
        let a = FpElt::from_int(&UBig::from(a));
        let b = FpElt::from_int(&UBig::from(b));
        let c = FpElt::from_int(&UBig::from(c));
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn fp_additive_inverse_is_zero(a in arb_u64()) {
        let a = FpElt::from_int(&UBig::from(a));
        prop_assert_eq!(a.add(&a.neg()), FpElt::zero());
    }

    #[test]
    fn fp_multiplicative_inverse_is_one(a in arb_u64()) {
        prop_assume!(a != 0);
        let a = FpElt::from_int(&UBig::from(a));
        prop_assert_eq!(a.mul(&a.inv().unwrap()), FpElt::one());
    }

    #[test]
    fn fr_sub_matches_add_neg(a in arb_u64(), b in arb_u64()) {
        let a = FrElt::from_int(&UBig::from(a));
        let b = FrElt::from_int(&UBig::from(b));
        prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
    }

    #[test]
    fn fr_div_matches_mul_inv(a in arb_u64(), b in arb_u64()) {
        prop_assume!(b != 0);
        let a = FrElt::from_int(&UBig::from(a));
        let b = FrElt::from_int(&UBig::from(b));
        prop_assert_eq!(a.div(&b).unwrap(), a.mul(&b.inv().unwrap()));
    }

    #[test]
    fn scalar_mul_recurrence_holds_for_small_k(k in 0u64..64) {
        let g = curve::g();
        let k_elt = FrElt::from_int(&UBig::from(k));
        let k_plus_1 = FrElt::from_int(&UBig::from(k + 1));
        let lhs = g.mul(&k_plus_1);
        let rhs = g.mul(&k_elt).add(&g);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn point_add_is_commutative_for_small_multiples(j in 1u64..32, k in 1u64..32) {
        let g = curve::g();
        let p = g.mul(&FrElt::from_int(&UBig::from(j)));
        let q = g.mul(&FrElt::from_int(&UBig::from(k)));
        prop_assert_eq!(p.add(&q), q.add(&p));
    }
}
