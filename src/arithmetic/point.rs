//! Projective points on short Weierstrass curves.
//!
//! A [`WPoint`] is a triple `(x : y : z)` of Montgomery-domain residues
//! mod `p` satisfying the homogeneous curve equation
//! `y²z ≡ x³ + axz² + bz³ (mod p)`. When `z ≠ 0` the triple represents
//! the affine point `(x/z, y/z)`; every triple with `z = 0` is the point
//! at infinity. The canonical infinity is `(0, 1, 0)` (Montgomery `1`),
//! which keeps it distinct from all-zero uninitialized storage.

use super::{curve::WCurve, mpzn::Mpzn};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// Point on a short Weierstrass curve in projective coordinates,
/// Montgomery domain mod `p`.
#[derive(Clone, Copy, Debug)]
pub struct WPoint<const N: usize> {
    pub(crate) x: Mpzn<N>,
    pub(crate) y: Mpzn<N>,
    pub(crate) z: Mpzn<N>,
}

impl<const N: usize> WPoint<N> {
    /// The distinguished base point of the curve, `z` normalized to the
    /// Montgomery unit.
    pub fn generator(wc: &WCurve<N>) -> Self {
        Self {
            x: wc.px,
            y: wc.py,
            z: Mpzn::mont_one(&wc.p),
        }
    }

    /// The point at infinity.
    pub fn infinity(wc: &WCurve<N>) -> Self {
        Self {
            x: Mpzn::ZERO,
            y: Mpzn::mont_one(&wc.p),
            z: Mpzn::ZERO,
        }
    }

    /// Lift natural-domain affine coordinates onto the curve.
    ///
    /// The coordinates are reduced mod `p`; membership is not checked
    /// here (see [`WPoint::is_on_curve`]).
    pub fn from_affine(x: &Mpzn<N>, y: &Mpzn<N>, wc: &WCurve<N>) -> Self {
        Self {
            x: x.rem(&wc.p).to_montgomery(&wc.p, wc.n, &wc.r2),
            y: y.rem(&wc.p).to_montgomery(&wc.p, wc.n, &wc.r2),
            z: Mpzn::mont_one(&wc.p),
        }
    }

    /// Natural-domain affine coordinates, or `None` for infinity.
    pub fn affine_coordinates(&self, wc: &WCurve<N>) -> Option<(Mpzn<N>, Mpzn<N>)> {
        if self.is_infinity().into() {
            return None;
        }
        let reduced = self.reduce(wc);
        Some((
            reduced.x.to_natural(&wc.p, wc.n),
            reduced.y.to_natural(&wc.p, wc.n),
        ))
    }

    /// Whether this is the point at infinity (`z ≡ 0`).
    pub fn is_infinity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Verify the homogeneous curve equation
    /// `y²z ≡ x³ + axz² + bz³ (mod p)`.
    pub fn is_on_curve(&self, wc: &WCurve<N>) -> bool {
        let p = &wc.p;
        let n = wc.n;
        let lhs = self
            .y
            .mul_montgomery(&self.y, p, n)
            .mul_montgomery(&self.z, p, n);
        let zz = self.z.mul_montgomery(&self.z, p, n);
        let xxx = self
            .x
            .mul_montgomery(&self.x, p, n)
            .mul_montgomery(&self.x, p, n);
        let axzz = wc
            .a
            .mul_montgomery(&self.x, p, n)
            .mul_montgomery(&zz, p, n);
        let bzzz = wc
            .b
            .mul_montgomery(&zz, p, n)
            .mul_montgomery(&self.z, p, n);
        let rhs = xxx.add_mod(&axzz, p).add_mod(&bzzz, p);
        lhs == rhs
    }

    /// Whether `[q]P` is the point at infinity.
    pub fn has_order_q(&self, wc: &WCurve<N>) -> bool {
        self.mul(&wc.q, wc).is_infinity().into()
    }

    /// Point doubling in projective coordinates.
    pub fn double(&self, wc: &WCurve<N>) -> Self {
        if self.is_infinity().into() {
            return Self::infinity(wc);
        }
        let p = &wc.p;
        let n = wc.n;

        let xx = self.x.mul_montgomery(&self.x, p, n);
        let zz = self.z.mul_montgomery(&self.z, p, n);
        // w = a·z² + 3x²
        let w = wc
            .a
            .mul_montgomery(&zz, p, n)
            .add_mod(&xx, p)
            .add_mod(&xx, p)
            .add_mod(&xx, p);
        // s = 2yz
        let yz = self.y.mul_montgomery(&self.z, p, n);
        let s = yz.add_mod(&yz, p);
        let r = self.y.mul_montgomery(&s, p, n);
        // b = 2xr
        let xr = self.x.mul_montgomery(&r, p, n);
        let b = xr.add_mod(&xr, p);
        // h = w² − 2b
        let h = w
            .mul_montgomery(&w, p, n)
            .sub_mod(&b.add_mod(&b, p), p);
        let rr = r.mul_montgomery(&r, p, n);

        Self {
            x: h.mul_montgomery(&s, p, n),
            y: w
                .mul_montgomery(&b.sub_mod(&h, p), p, n)
                .sub_mod(&rr.add_mod(&rr, p), p),
            z: s.mul_montgomery(&s, p, n).mul_montgomery(&s, p, n),
        }
    }

    /// Point addition `self + other` in projective coordinates.
    ///
    /// The degenerate configurations are cased explicitly: either operand
    /// at infinity, equal operands (doubling) and opposite operands
    /// (infinity).
    pub fn add(&self, other: &Self, wc: &WCurve<N>) -> Self {
        if self.is_infinity().into() {
            return *other;
        }
        if other.is_infinity().into() {
            return *self;
        }
        let p = &wc.p;
        let n = wc.n;

        let y1z2 = self.y.mul_montgomery(&other.z, p, n);
        let y2z1 = other.y.mul_montgomery(&self.z, p, n);
        let x1z2 = self.x.mul_montgomery(&other.z, p, n);
        let x2z1 = other.x.mul_montgomery(&self.z, p, n);

        if x1z2 == x2z1 {
            if y1z2 == y2z1 {
                return self.double(wc);
            }
            return Self::infinity(wc);
        }

        let u = y2z1.sub_mod(&y1z2, p);
        let v = x2z1.sub_mod(&x1z2, p);
        let uu = u.mul_montgomery(&u, p, n);
        let vv = v.mul_montgomery(&v, p, n);
        let vvv = v.mul_montgomery(&vv, p, n);
        let z1z2 = self.z.mul_montgomery(&other.z, p, n);
        let r = vv.mul_montgomery(&x1z2, p, n);
        // a = u²·z1z2 − v³ − 2r
        let a = uu
            .mul_montgomery(&z1z2, p, n)
            .sub_mod(&vvv, p)
            .sub_mod(&r.add_mod(&r, p), p);

        Self {
            x: v.mul_montgomery(&a, p, n),
            y: u
                .mul_montgomery(&r.sub_mod(&a, p), p, n)
                .sub_mod(&vvv.mul_montgomery(&y1z2, p, n), p),
            z: vvv.mul_montgomery(&z1z2, p, n),
        }
    }

    /// Normalize to `(x/z, y/z, 1)` with `z⁻¹` computed by Fermat
    /// inversion (`z^{p−2}` via Montgomery exponentiation).
    pub fn reduce(&self, wc: &WCurve<N>) -> Self {
        if self.is_infinity().into() {
            return Self::infinity(wc);
        }
        let exp = wc.p.wrapping_sub(&Mpzn::from_u64(2));
        let zi = self.z.modpow_montgomery(&exp, &wc.p, wc.n);
        Self {
            x: self.x.mul_montgomery(&zi, &wc.p, wc.n),
            y: self.y.mul_montgomery(&zi, &wc.p, wc.n),
            z: Mpzn::mont_one(&wc.p),
        }
    }

    /// Scalar multiplication `[k]·self` for a natural-domain scalar.
    ///
    /// Scans all `64·N` bits MSB-first with a double-always schedule and
    /// `subtle` selection of the conditional addition, so the work is
    /// independent of the scalar's Hamming weight.
    pub fn mul(&self, k: &Mpzn<N>, wc: &WCurve<N>) -> Self {
        let mut acc = Self::infinity(wc);
        let words = k.as_words();
        let mut i = N;
        while i > 0 {
            i -= 1;
            let limb = words[i];
            let mut j = 64;
            while j > 0 {
                j -= 1;
                acc = acc.double(wc);
                let sum = acc.add(self, wc);
                let bit = Choice::from(((limb >> j) & 1) as u8);
                acc = Self::conditional_select(&acc, &sum, bit);
            }
        }
        acc
    }
}

impl<const N: usize> ConditionallySelectable for WPoint<N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Mpzn::conditional_select(&a.x, &b.x, choice),
            y: Mpzn::conditional_select(&a.y, &b.y, choice),
            z: Mpzn::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<const N: usize> Zeroize for WPoint<N> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::WPoint;
    use crate::arithmetic::mpzn::Mpzn;
    use crate::params::TC26_GOST_3410_2012_256_PARAM_SET_TEST;

    #[test]
    fn generator_is_on_curve() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        let g = WPoint::generator(wc);
        assert!(g.is_on_curve(wc));
        assert!(!bool::from(g.is_infinity()));
    }

    #[test]
    fn infinity_is_on_curve_and_absorbing() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        let g = WPoint::generator(wc);
        let inf = WPoint::infinity(wc);
        assert!(inf.is_on_curve(wc));
        assert!(bool::from(inf.double(wc).is_infinity()));

        let left = inf.add(&g, wc).reduce(wc);
        let right = g.add(&inf, wc).reduce(wc);
        assert_eq!(left.x, right.x);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn doubling_matches_addition() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        let g = WPoint::generator(wc);
        let doubled = g.double(wc).reduce(wc);
        let added = g.add(&g, wc).reduce(wc);
        assert_eq!(doubled.x, added.x);
        assert_eq!(doubled.y, added.y);
        assert!(doubled.is_on_curve(wc));
    }

    #[test]
    fn opposite_points_add_to_infinity() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        let g = WPoint::generator(wc);
        let neg = WPoint {
            x: g.x,
            y: Mpzn::ZERO.sub_mod(&g.y, &wc.p),
            z: g.z,
        };
        assert!(neg.is_on_curve(wc));
        assert!(bool::from(g.add(&neg, wc).is_infinity()));
    }

    #[test]
    fn generator_has_subgroup_order() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        assert!(WPoint::generator(wc).has_order_q(wc));
    }

    #[test]
    fn small_multiples_agree_with_repeated_addition() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        let g = WPoint::generator(wc);
        let mut expected = WPoint::infinity(wc);
        for k in 1u64..=9 {
            expected = expected.add(&g, wc);
            let multiple = g.mul(&Mpzn::from_u64(k), wc);
            assert!(multiple.is_on_curve(wc));
            let lhs = multiple.reduce(wc);
            let rhs = expected.reduce(wc);
            assert_eq!(lhs.x, rhs.x);
            assert_eq!(lhs.y, rhs.y);
        }
    }

    #[test]
    fn affine_round_trip() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        let g = WPoint::generator(wc);
        let (x, y) = g.affine_coordinates(wc).unwrap();
        assert_eq!(x, Mpzn::from_u64(2));
        let lifted = WPoint::from_affine(&x, &y, wc);
        assert!(lifted.is_on_curve(wc));
        assert!(WPoint::infinity(wc).affine_coordinates(wc).is_none());
    }
}
