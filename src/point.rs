//! Affine-coordinate point arithmetic on `y² = x³ + 7` over `Fp`.

use dashu::integer::UBig;

use crate::bignat::bits_lsb_first;
use crate::field::FpElt;

/// A point on the curve, or the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    Zero,
    Affine(FpElt, FpElt),
}

impl Point {
    pub fn is_zero(&self) -> bool {
        matches!(self, Point::Zero)
    }

    /// `true` iff `(x, y)` satisfies `y² = x³ + 7 (mod p)`.
    pub fn is_valid(x: &FpElt, y: &FpElt) -> bool {
        let lhs = y.sqr();
        let rhs = x.pow(&UBig::from_word(3)).add(&FpElt::from_int(&UBig::from_word(7)));
        lhs == rhs
    }

    pub fn neg(&self) -> Point {
        match self {
            Point::Zero => Point::Zero,
            Point::Affine(x, y) => Point::Affine(x.clone(), y.neg()),
        }
    }

    pub fn dbl(&self) -> Point {
        match self {
            Point::Zero => Point::Zero,
            Point::Affine(x, y) => {
                if y.is_zero() {
                    return Point::Zero;
                }
                let two = FpElt::from_int(&UBig::from_word(2));
                let three = FpElt::from_int(&UBig::from_word(3));
                // lambda = (3x^2 + a) / 2y, a = 0
                let lambda = three
                    .mul(&x.sqr())
                    .div(&two.mul(y))
                    .expect("y != 0 was checked above");
                let x3 = lambda.sqr().sub(&two.mul(x));
                let y3 = lambda.mul(&x.sub(&x3)).sub(y);
                Point::Affine(x3, y3)
            }
        }
    }

    pub fn add(&self, other: &Point) -> Point {
        match (self, other) {
            (Point::Zero, _) => other.clone(),
            (_, Point::Zero) => self.clone(),
            (Point::Affine(x1, y1), Point::Affine(x2, y2)) => {
                if x1 == x2 {
                    if *y1 == y2.neg() {
                        Point::Zero
                    } else {
                        self.dbl()
                    }
                } else {
                    let lambda = y1.sub(y2).div(&x1.sub(x2)).expect("x1 != x2 was checked above");
                    let x3 = lambda.sqr().sub(x1).sub(x2);
                    let y3 = lambda.mul(&x1.sub(&x3)).sub(y1);
                    Point::Affine(x3, y3)
                }
            }
        }
    }

    /// Left-to-right double-and-add scalar multiplication.
    pub fn mul(&self, k: &crate::field::FrElt) -> Point {
        let bits = bits_lsb_first(&k.to_int());
        let mut acc = Point::Zero;
        for bit in bits.iter().rev() {
            acc = acc.dbl();
            if *bit {
                acc = acc.add(self);
            }
        }
        acc
    }
}
