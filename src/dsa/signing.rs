//! Support for signing messages with GOST R 34.10-2012.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Pick a random nonce k in [1, q-1].
//! 2. Compute C = [k]P and reduce to affine form.
//! 3. r = C.x mod q; restart if r = 0.
//! 4. s = r·d + k·e mod q, with e replaced by 1 when e ≡ 0 mod q;
//!    restart if s = 0.
//! 5. The signature is r ‖ s.
//! ```
//!
//! The secret scalar `d` is never materialized during signing: the key
//! is stored as the pair `(d·μ mod q, μ⁻¹ mod q)` for a random mask
//! `μ`, the product `r·d` is assembled from the two masked halves, and
//! the mask is refreshed with a fresh random factor before every sign
//! call returns.

use super::{Signature, VerifyingKey};
use crate::arithmetic::{curve::WCurve, mpzn::Mpzn, point::WPoint};
use crate::error::{Error, Result};
use core::fmt::{self, Debug};
use core::marker::PhantomData;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};
use streebog::{Streebog256, Streebog512};
use zeroize::Zeroize;

/// GOST R 34.10-2012 secret key bound to a curve and a hash function.
///
/// The masked scalar and its mask both live in the Montgomery domain
/// mod `q`; their Montgomery product is `d`. Signing mutates the pair
/// (the mask refresh), so the signing methods take `&mut self` and a
/// key cannot be shared between threads while signing — serialize per
/// key, as the borrow checker will insist.
pub struct SigningKey<D, const N: usize> {
    curve: &'static WCurve<N>,
    /// `d·μ mod q`, Montgomery domain.
    key: Mpzn<N>,
    /// `μ⁻¹ mod q`, Montgomery domain.
    mask: Mpzn<N>,
    _hash: PhantomData<D>,
}

/// 256-bit signing key hashing with Streebog-256.
pub type SigningKey256 = SigningKey<Streebog256, 4>;

/// 512-bit signing key hashing with Streebog-512.
pub type SigningKey512 = SigningKey<Streebog512, 8>;

impl<D: Digest, const N: usize> SigningKey<D, N> {
    /// Import a secret scalar from its `N·8`-byte little-endian
    /// encoding and install the first mask.
    ///
    /// The scalar is reduced mod `q`; a scalar congruent to zero is
    /// rejected.
    pub fn from_slice(
        curve: &'static WCurve<N>,
        bytes: &[u8],
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Self> {
        let mut d = Mpzn::from_le_slice(bytes)?;
        let key = Self::install(curve, &d, rng);
        d.zeroize();
        key
    }

    /// Generate a fresh random secret key.
    pub fn generate(
        curve: &'static WCurve<N>,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Self> {
        let mut d = Mpzn::random_mod(rng, &curve.q)?;
        let key = Self::install(curve, &d, rng);
        d.zeroize();
        key
    }

    /// Reduce a natural-domain scalar mod `q` and store it under a
    /// fresh multiplicative mask.
    fn install(
        curve: &'static WCurve<N>,
        d: &Mpzn<N>,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Self> {
        if <D as Digest>::output_size() != N * 8 {
            return Err(Error::CurveNotSupported);
        }

        let mut d = d.rem(&curve.q);
        if d.is_zero().into() {
            return Err(Error::ZeroLength);
        }

        // The sampled limbs are read directly as a Montgomery residue μ;
        // rejection sampling already made the residue uniform and
        // non-zero, so no r² correction is needed.
        let mut mu = Mpzn::random_mod(rng, &curve.q)?;
        let mut d_m = d.to_montgomery(&curve.q, curve.nq, &curve.r2q);
        d.zeroize();
        let key = d_m.mul_montgomery(&mu, &curve.q, curve.nq);
        d_m.zeroize();

        // mask ← μ^{q−2} = μ⁻¹
        let exp = curve.q.wrapping_sub(&Mpzn::from_u64(2));
        let mask = mu.modpow_montgomery(&exp, &curve.q, curve.nq);
        mu.zeroize();

        Ok(Self {
            curve,
            key,
            mask,
            _hash: PhantomData,
        })
    }

    /// Replace the mask `μ` by `μ·ζ` for a fresh random `ζ`, leaving
    /// the represented scalar unchanged.
    fn remask(&mut self, rng: &mut (impl RngCore + CryptoRng)) -> Result<()> {
        let wc = self.curve;
        let mut zeta = Mpzn::random_mod(rng, &wc.q)?;
        self.key = self.key.mul_montgomery(&zeta, &wc.q, wc.nq);

        let exp = wc.q.wrapping_sub(&Mpzn::from_u64(2));
        let mut zeta_inv = zeta.modpow_montgomery(&exp, &wc.q, wc.nq);
        zeta.zeroize();
        self.mask = self.mask.mul_montgomery(&zeta_inv, &wc.q, wc.nq);
        zeta_inv.zeroize();
        Ok(())
    }

    /// Unmask and export the secret scalar in natural form, consuming
    /// (and thereby wiping) the key.
    pub fn into_secret_scalar(self) -> Mpzn<N> {
        let wc = self.curve;
        self.key
            .mul_montgomery(&self.mask, &wc.q, wc.nq)
            .to_natural(&wc.q, wc.nq)
    }

    /// Derive the public key `[d]P`.
    ///
    /// The derivation walks through the masked representation — scalar
    /// multiplication by `d·μ` followed by `μ⁻¹` — so the raw scalar
    /// never appears; the mask is refreshed afterwards.
    pub fn verifying_key(
        &mut self,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<VerifyingKey<D, N>> {
        let wc = self.curve;
        let mut blinded = self.key.to_natural(&wc.q, wc.nq);
        let mut point = WPoint::generator(wc).mul(&blinded, wc);
        blinded.zeroize();

        let mut unblind = self.mask.to_natural(&wc.q, wc.nq);
        point = point.mul(&unblind, wc);
        unblind.zeroize();

        let point = point.reduce(wc);
        self.remask(rng)?;
        Ok(VerifyingKey::from_parts(wc, point))
    }

    /// Sign a message hash representative of exactly `N·8` bytes
    /// (little-endian limb image).
    pub fn sign_hash(
        &mut self,
        rng: &mut (impl RngCore + CryptoRng),
        hash: &[u8],
    ) -> Result<Signature<N>> {
        let e = Mpzn::from_le_slice(hash)?;
        let wc = self.curve;

        let signature = loop {
            let mut k = Mpzn::random_mod(rng, &wc.q)?;
            let attempt = self.sign_prehash_with_nonce(&k, &e);
            k.zeroize();
            if let Some(signature) = attempt {
                break signature;
            }
        };

        self.remask(rng)?;
        Ok(signature)
    }

    /// Hash a message with `D` and sign the digest.
    pub fn sign_msg(
        &mut self,
        rng: &mut (impl RngCore + CryptoRng),
        msg: &[u8],
    ) -> Result<Signature<N>> {
        let hash = D::digest(msg);
        self.sign_hash(rng, &hash)
    }

    /// Deterministic signing core for a caller-supplied nonce.
    ///
    /// Returns `None` on a degenerate `r = 0` or `s = 0`, which the
    /// public entry points answer by drawing a fresh nonce. Does not
    /// refresh the mask; callers do.
    pub(crate) fn sign_prehash_with_nonce(&self, k: &Mpzn<N>, e: &Mpzn<N>) -> Option<Signature<N>> {
        let wc = self.curve;

        // C = [k]P, then r = C.x mod q
        let mut c = WPoint::generator(wc).mul(k, wc).reduce(wc);
        let x = c.x.to_natural(&wc.p, wc.n);
        c.zeroize();
        let r = x.rem(&wc.q);
        if r.is_zero().into() {
            return None;
        }

        // s = r·d, assembled from the masked halves
        let r_m = r.to_montgomery(&wc.q, wc.nq, &wc.r2q);
        let mut s = r_m.mul_montgomery(&self.key, &wc.q, wc.nq);
        s = s.mul_montgomery(&self.mask, &wc.q, wc.nq);

        // s += k·e, with e = 1 when e ≡ 0 mod q
        let mut k_m = k.to_montgomery(&wc.q, wc.nq, &wc.r2q);
        let mut e_red = e.rem(&wc.q);
        if e_red.is_zero().into() {
            e_red = Mpzn::ONE;
        }
        let e_m = e_red.to_montgomery(&wc.q, wc.nq, &wc.r2q);
        let mut ke = k_m.mul_montgomery(&e_m, &wc.q, wc.nq);
        k_m.zeroize();
        s = s.add_mod(&ke, &wc.q);
        ke.zeroize();

        let s = s.to_natural(&wc.q, wc.nq);
        if s.is_zero().into() {
            return None;
        }

        Some(Signature::from_scalars(r, s))
    }

    /// The curve this key lives on.
    pub fn curve(&self) -> &'static WCurve<N> {
        self.curve
    }
}

impl<D, const N: usize> Drop for SigningKey<D, N> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.mask.zeroize();
    }
}

impl<D, const N: usize> Debug for SigningKey<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
