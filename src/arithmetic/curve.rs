//! Elliptic curves in short Weierstrass form.
//!
//! A [`WCurve`] bundles the parameters of a curve
//! `y² ≡ x³ + ax + b (mod p)` together with a distinguished point
//! `P = (px, py)` generating a subgroup of prime order `q`, and the
//! Montgomery constants (`r2`, `n`, and their mod-`q` twins) that the
//! arithmetic layer consumes. The full group order is `cofactor·q`.
//!
//! Curves are compiled-in constants: [`WCurve::from_hex_params`] is a
//! `const fn`, so the Montgomery constants and the Montgomery forms of
//! `a`, `b` and the generator coordinates are derived at compile time
//! from the published natural-domain parameters.

use super::{mpzn::Mpzn, point::WPoint};

/// Short Weierstrass curve parameters over `N` 64-bit limbs.
///
/// `a`, `b`, `px` and `py` are stored in Montgomery form mod `p`;
/// `p` and `q` are natural-domain primes.
#[derive(Debug)]
pub struct WCurve<const N: usize> {
    /// Divisor of the group order not contained in the subgroup order.
    pub cofactor: u32,
    /// Coefficient `a` (Montgomery mod `p`).
    pub a: Mpzn<N>,
    /// Coefficient `b` (Montgomery mod `p`).
    pub b: Mpzn<N>,
    /// Field modulus `p`.
    pub p: Mpzn<N>,
    /// `r² mod p` with `r = 2^{64·N}`.
    pub r2: Mpzn<N>,
    /// `−p⁻¹ mod 2⁶⁴`.
    pub n: u64,
    /// Prime order `q` of the subgroup generated by `(px, py)`.
    pub q: Mpzn<N>,
    /// `r² mod q`.
    pub r2q: Mpzn<N>,
    /// `−q⁻¹ mod 2⁶⁴`.
    pub nq: u64,
    /// x-coordinate of the generator (Montgomery mod `p`).
    pub px: Mpzn<N>,
    /// y-coordinate of the generator (Montgomery mod `p`).
    pub py: Mpzn<N>,
}

impl<const N: usize> WCurve<N> {
    /// Build a curve from natural-domain big-endian hex parameters,
    /// deriving every Montgomery constant.
    ///
    /// # Panics
    ///
    /// On malformed hex. Intended for compiled-in constants only.
    pub const fn from_hex_params(
        p_hex: &str,
        a_hex: &str,
        b_hex: &str,
        q_hex: &str,
        px_hex: &str,
        py_hex: &str,
        cofactor: u32,
    ) -> Self {
        let p = Mpzn::from_be_hex(p_hex);
        let q = Mpzn::from_be_hex(q_hex);
        let n = Mpzn::mont_n0(&p);
        let nq = Mpzn::mont_n0(&q);
        let r2 = Mpzn::mont_r2(&p);
        let r2q = Mpzn::mont_r2(&q);
        let a = Mpzn::from_be_hex(a_hex).rem(&p).to_montgomery(&p, n, &r2);
        let b = Mpzn::from_be_hex(b_hex).rem(&p).to_montgomery(&p, n, &r2);
        let px = Mpzn::from_be_hex(px_hex).rem(&p).to_montgomery(&p, n, &r2);
        let py = Mpzn::from_be_hex(py_hex).rem(&p).to_montgomery(&p, n, &r2);
        Self {
            cofactor,
            a,
            b,
            p,
            r2,
            n,
            q,
            r2q,
            nq,
            px,
            py,
        }
    }

    /// Curve discriminant `16(4a³ + 27b²) mod p`, in Montgomery form.
    pub fn discriminant(&self) -> Mpzn<N> {
        let aa = self.a.mul_montgomery(&self.a, &self.p, self.n);
        let a3 = aa.mul_montgomery(&self.a, &self.p, self.n);
        let b2 = self.b.mul_montgomery(&self.b, &self.p, self.n);
        let t = self
            .mul_small(&a3, 4)
            .add_mod(&self.mul_small(&b2, 27), &self.p);
        self.mul_small(&t, 16)
    }

    /// Validate the parameter set: `p` and `q` probably prime, non-zero
    /// discriminant, generator on the curve and of order `q`.
    ///
    /// Exercised by the self-test suite; compiled-in curves are trusted
    /// at runtime.
    pub fn is_ok(&self) -> bool {
        if !probable_prime(&self.p) || !probable_prime(&self.q) {
            return false;
        }
        if bool::from(self.discriminant().is_zero()) {
            return false;
        }
        let generator = WPoint::generator(self);
        generator.is_on_curve(self) && generator.has_order_q(self)
    }

    /// Multiply a residue mod `p` by a small public constant via
    /// double-and-add; domain-agnostic like [`Mpzn::add_mod`].
    pub(crate) fn mul_small(&self, x: &Mpzn<N>, k: u64) -> Mpzn<N> {
        let mut acc = Mpzn::ZERO;
        let mut i = 64 - k.leading_zeros();
        while i > 0 {
            i -= 1;
            acc = acc.add_mod(&acc, &self.p);
            if (k >> i) & 1 == 1 {
                acc = acc.add_mod(x, &self.p);
            }
        }
        acc
    }
}

/// Miller-Rabin probable-primality test with a fixed witness set.
fn probable_prime<const N: usize>(m: &Mpzn<N>) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if m.as_words()[0] & 1 == 0 {
        return *m == Mpzn::from_u64(2);
    }
    if *m == Mpzn::ONE {
        return false;
    }

    // m − 1 = 2^s · d
    let m1 = m.wrapping_sub(&Mpzn::ONE);
    let mut d = m1;
    let mut s = 0u32;
    while d.as_words()[0] & 1 == 0 {
        d = d.shr1();
        s += 1;
    }

    let n0 = Mpzn::mont_n0(m);
    let r2 = Mpzn::mont_r2(m);
    let one_m = Mpzn::mont_one(m);
    let neg_one_m = Mpzn::ZERO.sub_mod(&one_m, m);

    'witness: for w in WITNESSES {
        let base = Mpzn::from_u64(w).rem(m);
        if bool::from(base.is_zero()) {
            continue;
        }
        let mut x = base
            .to_montgomery(m, n0, &r2)
            .modpow_montgomery(&d, m, n0);
        if x == one_m || x == neg_one_m {
            continue;
        }
        for _ in 1..s {
            x = x.mul_montgomery(&x, m, n0);
            if x == neg_one_m {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::probable_prime;
    use crate::arithmetic::mpzn::Mpzn256;
    use crate::params::{
        TC26_GOST_3410_2012_256_PARAM_SET_TEST, TC26_GOST_3410_2012_512_PARAM_SET_TEST,
    };

    #[test]
    fn primality_of_small_values() {
        assert!(probable_prime(&Mpzn256::from_u64(2)));
        assert!(probable_prime(&Mpzn256::from_u64(65537)));
        assert!(!probable_prime(&Mpzn256::from_u64(1)));
        assert!(!probable_prime(&Mpzn256::from_u64(561))); // Carmichael
        assert!(!probable_prime(&Mpzn256::from_u64(1 << 20)));
    }

    #[test]
    fn test_curves_validate() {
        assert!(TC26_GOST_3410_2012_256_PARAM_SET_TEST.is_ok());
        assert!(TC26_GOST_3410_2012_512_PARAM_SET_TEST.is_ok());
    }

    #[test]
    fn montgomery_constants_derived_consistently() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        // n·p ≡ −1 mod 2⁶⁴ and the same for q
        assert_eq!(wc.n.wrapping_mul(wc.p.to_words()[0]), u64::MAX);
        assert_eq!(wc.nq.wrapping_mul(wc.q.to_words()[0]), u64::MAX);
        // a was lifted out of the Montgomery domain correctly
        assert_eq!(
            wc.a.to_natural(&wc.p, wc.n),
            Mpzn256::from_u64(7)
        );
    }

    #[test]
    fn discriminant_is_non_zero() {
        let wc = &TC26_GOST_3410_2012_256_PARAM_SET_TEST;
        assert!(!bool::from(wc.discriminant().is_zero()));
    }
}
