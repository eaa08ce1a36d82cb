//! Support for verifying GOST R 34.10-2012 signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Reject unless 0 < r < q and 0 < s < q.
//! 2. v = e mod q, replaced by 1 when zero; invert: v ← v^{q-2} mod q.
//! 3. z1 = s·v mod q, z2 = −r·v mod q.
//! 4. C = [z1]P + [z2]Q, reduced to affine form.
//! 5. Accept iff C.x mod q = r.
//! ```

use super::Signature;
use crate::arithmetic::{curve::WCurve, mpzn::Mpzn, point::WPoint};
use crate::error::{Error, Result};
use core::fmt::{self, Debug};
use core::marker::PhantomData;
use digest::Digest;
use signature::{hazmat::PrehashVerifier, Verifier};
use streebog::{Streebog256, Streebog512};

/// GOST R 34.10-2012 public key: the curve point `Q = [d]P` in reduced
/// affine form.
///
/// Immutable after construction and safe to share between threads.
#[derive(Clone)]
pub struct VerifyingKey<D, const N: usize> {
    curve: &'static WCurve<N>,
    q_point: WPoint<N>,
    _hash: PhantomData<D>,
}

/// 256-bit verifying key hashing with Streebog-256.
pub type VerifyingKey256 = VerifyingKey<Streebog256, 4>;

/// 512-bit verifying key hashing with Streebog-512.
pub type VerifyingKey512 = VerifyingKey<Streebog512, 8>;

impl<D: Digest, const N: usize> VerifyingKey<D, N> {
    /// Internal constructor for a point already validated and reduced.
    pub(crate) fn from_parts(curve: &'static WCurve<N>, q_point: WPoint<N>) -> Self {
        Self {
            curve,
            q_point,
            _hash: PhantomData,
        }
    }

    /// Build a verifying key from natural-domain affine coordinates,
    /// checking curve membership and subgroup order.
    pub fn from_affine(curve: &'static WCurve<N>, x: &Mpzn<N>, y: &Mpzn<N>) -> Result<Self> {
        if <D as Digest>::output_size() != N * 8 {
            return Err(Error::CurveNotSupported);
        }
        let point = WPoint::from_affine(x, y, curve);
        if point.is_infinity().into() {
            return Err(Error::InvalidPoint);
        }
        if !point.is_on_curve(curve) || !point.has_order_q(curve) {
            return Err(Error::InvalidPoint);
        }
        Ok(Self::from_parts(curve, point))
    }

    /// Natural-domain affine coordinates of the public point.
    pub fn to_affine(&self) -> (Mpzn<N>, Mpzn<N>) {
        // the stored point is reduced, so never infinity
        self.q_point
            .affine_coordinates(self.curve)
            .unwrap_or((Mpzn::ZERO, Mpzn::ZERO))
    }

    /// Verify a signature over a message hash representative of exactly
    /// `N·8` bytes (little-endian limb image).
    ///
    /// Returns `Ok(false)` on any cryptographic mismatch; `Err` is
    /// reserved for malformed inputs.
    pub fn verify_hash(&self, hash: &[u8], signature: &Signature<N>) -> Result<bool> {
        let e = Mpzn::from_le_slice(hash)?;
        let wc = self.curve;
        let r = *signature.r();
        let s = *signature.s();

        if bool::from(r.is_zero()) || bool::from(s.is_zero()) || r >= wc.q || s >= wc.q {
            return Ok(false);
        }

        // v = (e mod q)^{q-2}, in the Montgomery domain
        let mut v = e.rem(&wc.q);
        if v.is_zero().into() {
            v = Mpzn::ONE;
        }
        let exp = wc.q.wrapping_sub(&Mpzn::from_u64(2));
        let v_inv = v
            .to_montgomery(&wc.q, wc.nq, &wc.r2q)
            .modpow_montgomery(&exp, &wc.q, wc.nq);

        // z1 = s·v, z2 = −r·v, both back in the natural domain
        let z1 = s
            .to_montgomery(&wc.q, wc.nq, &wc.r2q)
            .mul_montgomery(&v_inv, &wc.q, wc.nq)
            .to_natural(&wc.q, wc.nq);
        let neg_r = Mpzn::ZERO.sub_mod(&r.to_montgomery(&wc.q, wc.nq, &wc.r2q), &wc.q);
        let z2 = neg_r
            .mul_montgomery(&v_inv, &wc.q, wc.nq)
            .to_natural(&wc.q, wc.nq);

        // C = [z1]P + [z2]Q
        let c = WPoint::generator(wc)
            .mul(&z1, wc)
            .add(&self.q_point.mul(&z2, wc), wc);
        if c.is_infinity().into() {
            return Ok(false);
        }
        let c = c.reduce(wc);
        let big_r = c.x.to_natural(&wc.p, wc.n).rem(&wc.q);
        Ok(big_r == r)
    }

    /// Hash a message with `D` and verify the signature over the digest.
    pub fn verify_msg(&self, msg: &[u8], signature: &Signature<N>) -> Result<bool> {
        let hash = D::digest(msg);
        self.verify_hash(&hash, signature)
    }

    /// The curve this key lives on.
    pub fn curve(&self) -> &'static WCurve<N> {
        self.curve
    }

    /// Borrow the public point.
    pub fn as_point(&self) -> &WPoint<N> {
        &self.q_point
    }
}

//
// `*Verifier` trait impls
//

impl<D: Digest, const N: usize> Verifier<Signature<N>> for VerifyingKey<D, N> {
    fn verify(&self, msg: &[u8], signature: &Signature<N>) -> signature::Result<()> {
        match self.verify_msg(msg, signature) {
            Ok(true) => Ok(()),
            _ => Err(signature::Error::new()),
        }
    }
}

impl<D: Digest, const N: usize> PrehashVerifier<Signature<N>> for VerifyingKey<D, N> {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature<N>) -> signature::Result<()> {
        match self.verify_hash(prehash, signature) {
            Ok(true) => Ok(()),
            _ => Err(signature::Error::new()),
        }
    }
}

impl<D, const N: usize> Debug for VerifyingKey<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("q_point", &self.q_point)
            .finish()
    }
}
