//! Fixed-width unsigned big integers with Montgomery modular arithmetic.
//!
//! [`Mpzn`] is an ordered sequence of `N` 64-bit limbs, little-endian
//! (limb 0 least significant), representing an unsigned integer in
//! `[0, 2^{64·N})`. `N = 4` covers 256-bit curves and `N = 8` covers
//! 512-bit curves.
//!
//! A value is either in the *natural* domain or the *Montgomery* domain
//! relative to an odd modulus `m` with `r = 2^{64·N}`: the Montgomery
//! representative of `x` is `x·r mod m`. The domain is a property of the
//! code path and is never stored, so every operation below documents the
//! domain of its inputs and output. Transitions are multiplications:
//! entering the Montgomery domain multiplies by `r² mod m`
//! ([`Mpzn::to_montgomery`]), leaving it multiplies by `1`
//! ([`Mpzn::to_natural`]).

use crate::error::{Error, Result};
use core::{cmp::Ordering, fmt};
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Fixed-width unsigned integer with `N` little-endian 64-bit limbs.
#[derive(Clone, Copy)]
pub struct Mpzn<const N: usize> {
    limbs: [u64; N],
}

/// 256-bit fixed-width integer.
pub type Mpzn256 = Mpzn<4>;

/// 512-bit fixed-width integer.
pub type Mpzn512 = Mpzn<8>;

impl<const N: usize> Mpzn<N> {
    /// The value `0`.
    pub const ZERO: Self = Self { limbs: [0; N] };

    /// The value `1` (natural domain).
    pub const ONE: Self = {
        let mut limbs = [0u64; N];
        limbs[0] = 1;
        Self { limbs }
    };

    /// Number of limbs.
    pub const LIMBS: usize = N;

    /// Size of the canonical little-endian byte encoding.
    pub const BYTES: usize = N * 8;

    /// Create a value from little-endian limbs.
    pub const fn from_words(words: [u64; N]) -> Self {
        Self { limbs: words }
    }

    /// Return the little-endian limbs.
    pub const fn to_words(&self) -> [u64; N] {
        self.limbs
    }

    /// Borrow the little-endian limbs.
    pub const fn as_words(&self) -> &[u64; N] {
        &self.limbs
    }

    /// Create a value from a `u64`.
    pub const fn from_u64(v: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = v;
        Self { limbs }
    }

    /// Parse a value from a big-endian hexadecimal string.
    ///
    /// Intended for defining compiled-in constants; the input may be
    /// shorter than `16·N` digits and is interpreted by value.
    ///
    /// # Panics
    ///
    /// On malformed hex or when the value overflows `N` limbs.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        let mut out = Self::ZERO;
        let mut i = 0;
        while i < bytes.len() {
            let digit = match bytes[i] {
                b'0'..=b'9' => bytes[i] - b'0',
                b'a'..=b'f' => bytes[i] - b'a' + 10,
                b'A'..=b'F' => bytes[i] - b'A' + 10,
                _ => panic!("invalid character in hex literal"),
            };
            let (shifted, carry) = out.mul_ui(16);
            assert!(carry == 0, "hex literal overflows the limb width");
            out = shifted;
            out.limbs[0] |= digit as u64;
            i += 1;
        }
        out
    }

    /// Decode a value from its canonical little-endian byte encoding.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            return Err(Error::WrongLength);
        }
        let mut limbs = [0u64; N];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = 0u64;
            for (k, byte) in chunk.iter().enumerate() {
                word |= (*byte as u64) << (8 * k);
            }
            limbs[i] = word;
        }
        Ok(Self { limbs })
    }

    /// Write the canonical little-endian byte encoding into `out`.
    pub fn write_le_bytes(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != Self::BYTES {
            return Err(Error::WrongLength);
        }
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        Ok(())
    }

    /// Determine whether the value is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Multiply by a single limb, returning the low `N` limbs and the
    /// carry limb.
    pub const fn mul_ui(&self, rhs: u64) -> (Self, u64) {
        let mut out = [0u64; N];
        let mut carry = 0u64;
        let mut j = 0;
        while j < N {
            let (lo, hi) = mac(0, self.limbs[j], rhs, carry);
            out[j] = lo;
            carry = hi;
            j += 1;
        }
        (Self { limbs: out }, carry)
    }

    /// Shift left by one bit, returning the shifted value and the bit
    /// shifted out of the top.
    pub const fn shl1(&self) -> (Self, u64) {
        let mut out = [0u64; N];
        let mut top = 0u64;
        let mut j = 0;
        while j < N {
            out[j] = (self.limbs[j] << 1) | top;
            top = self.limbs[j] >> 63;
            j += 1;
        }
        (Self { limbs: out }, top)
    }

    /// Subtraction modulo `2^{64·N}` (the borrow out is discarded).
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs).0
    }

    /// Modular addition; both operands must already be reduced mod `m`.
    ///
    /// Domain-agnostic: addition commutes with the Montgomery map.
    pub const fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
        let mut t = [0u64; N];
        let mut carry = 0u64;
        let mut j = 0;
        while j < N {
            let (lo, c) = adc(self.limbs[j], rhs.limbs[j], carry);
            t[j] = lo;
            carry = c;
            j += 1;
        }
        reduce_once(t, carry, &m.limbs)
    }

    /// Modular subtraction; both operands must already be reduced mod `m`.
    pub const fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (diff, borrow) = self.borrowing_sub(rhs);
        // add m back when the subtraction borrowed
        let mask = borrow.wrapping_neg();
        let mut out = [0u64; N];
        let mut carry = 0u64;
        let mut j = 0;
        while j < N {
            let (lo, c) = adc(diff.limbs[j], m.limbs[j] & mask, carry);
            out[j] = lo;
            carry = c;
            j += 1;
        }
        Self { limbs: out }
    }

    /// Remainder of division by `m` (natural domain, Barrett-free binary
    /// long division). Variable time; `m` must be a public value.
    pub const fn rem(&self, m: &Self) -> Self {
        let mut r = Self::ZERO;
        let mut i = 64 * N;
        while i > 0 {
            i -= 1;
            let bit = (self.limbs[i / 64] >> (i % 64)) & 1;
            let (mut shifted, carry) = r.shl1();
            shifted.limbs[0] |= bit;
            let (diff, borrow) = shifted.borrowing_sub(m);
            // 2r + bit < 2m, so a single correction step suffices even
            // when the shift carried out of the top limb
            if carry == 1 || borrow == 0 {
                r = diff;
            } else {
                r = shifted;
            }
        }
        r
    }

    /// Montgomery multiplication: `self·rhs·r⁻¹ mod m` where
    /// `r = 2^{64·N}` and `n0 = −m⁻¹ mod 2⁶⁴`.
    ///
    /// Operands must be reduced mod `m`; the output is reduced. CIOS
    /// product scanning with no data-dependent branches on limb values.
    pub const fn mul_montgomery(&self, rhs: &Self, m: &Self, n0: u64) -> Self {
        let a = &self.limbs;
        let b = &rhs.limbs;
        let p = &m.limbs;

        let mut t = [0u64; N];
        let mut t_hi = 0u64;
        let mut t_ex = 0u64;

        let mut i = 0;
        while i < N {
            // t += a·b[i]
            let mut carry = 0u64;
            let mut j = 0;
            while j < N {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
                j += 1;
            }
            let (lo, c) = adc(t_hi, carry, 0);
            t_hi = lo;
            t_ex += c;

            // t = (t + u·m) / 2⁶⁴ with u chosen to clear the low limb
            let u = t[0].wrapping_mul(n0);
            let (_, mut carry) = mac(t[0], u, p[0], 0);
            let mut j = 1;
            while j < N {
                let (lo, hi) = mac(t[j], u, p[j], carry);
                t[j - 1] = lo;
                carry = hi;
                j += 1;
            }
            let (lo, c) = adc(t_hi, carry, 0);
            t[N - 1] = lo;
            t_hi = t_ex + c;
            t_ex = 0;

            i += 1;
        }

        reduce_once(t, t_hi, p)
    }

    /// Montgomery exponentiation: `self^exp` with `self` and the result
    /// in the Montgomery domain mod `m`.
    ///
    /// Left-to-right square-and-multiply over all `64·N` exponent bits
    /// with a multiply-always schedule: the number of multiplications is
    /// a function of the bit length only, never of the bit values.
    pub fn modpow_montgomery(&self, exp: &Self, m: &Self, n0: u64) -> Self {
        let mut acc = Self::mont_one(m);
        let mut i = N;
        while i > 0 {
            i -= 1;
            let limb = exp.limbs[i];
            let mut j = 64;
            while j > 0 {
                j -= 1;
                acc = acc.mul_montgomery(&acc, m, n0);
                let multiplied = acc.mul_montgomery(self, m, n0);
                let bit = Choice::from(((limb >> j) & 1) as u8);
                acc = Self::conditional_select(&acc, &multiplied, bit);
            }
        }
        acc
    }

    /// Montgomery representative of `1`, i.e. `r mod m`.
    pub const fn mont_one(m: &Self) -> Self {
        // r − m is congruent to r and fits in N limbs
        Self::ZERO.wrapping_sub(m).rem(m)
    }

    /// `r² mod m`, the constant that moves values into the Montgomery
    /// domain.
    pub const fn mont_r2(m: &Self) -> Self {
        let mut x = Self::mont_one(m);
        let mut i = 0;
        while i < 64 * N {
            x = x.add_mod(&x, m);
            i += 1;
        }
        x
    }

    /// `−m⁻¹ mod 2⁶⁴` for odd `m`: the low-limb constant consumed by the
    /// CIOS reduction.
    pub const fn mont_n0(m: &Self) -> u64 {
        let m0 = m.limbs[0];
        // Hensel lifting; the seed is correct mod 2³ and every step
        // doubles the number of correct bits
        let mut inv = m0;
        let mut i = 0;
        while i < 5 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
            i += 1;
        }
        inv.wrapping_neg()
    }

    /// Move a natural-domain value into the Montgomery domain.
    pub const fn to_montgomery(&self, m: &Self, n0: u64, r2: &Self) -> Self {
        self.mul_montgomery(r2, m, n0)
    }

    /// Move a Montgomery-domain value back to the natural domain.
    pub const fn to_natural(&self, m: &Self, n0: u64) -> Self {
        self.mul_montgomery(&Self::ONE, m, n0)
    }

    /// Sample a uniform value in `(0, m)` by rejection.
    ///
    /// The only fallible mpzn operation: errors are propagated from the
    /// generator.
    pub fn random_mod(rng: &mut (impl RngCore + CryptoRng), m: &Self) -> Result<Self> {
        let mut buf = [0u8; 64];
        debug_assert!(Self::BYTES <= buf.len());
        let buf = &mut buf[..Self::BYTES];
        loop {
            rng.try_fill_bytes(buf).map_err(|_| Error::Random)?;
            let candidate = Self::from_le_slice(buf)?;
            let (_, borrow) = candidate.borrowing_sub(m);
            if borrow == 1 && !bool::from(candidate.is_zero()) {
                buf.zeroize();
                return Ok(candidate);
            }
        }
    }

    /// Shift right by one bit.
    pub(crate) const fn shr1(&self) -> Self {
        let mut out = [0u64; N];
        let mut top = 0u64;
        let mut j = N;
        while j > 0 {
            j -= 1;
            out[j] = (self.limbs[j] >> 1) | (top << 63);
            top = self.limbs[j] & 1;
        }
        Self { limbs: out }
    }

    /// Full-width subtraction returning the borrow.
    const fn borrowing_sub(&self, rhs: &Self) -> (Self, u64) {
        let mut out = [0u64; N];
        let mut borrow = 0u64;
        let mut j = 0;
        while j < N {
            let (lo, b) = sbb(self.limbs[j], rhs.limbs[j], borrow);
            out[j] = lo;
            borrow = b;
            j += 1;
        }
        (Self { limbs: out }, borrow)
    }
}

/// Conditionally subtract `m` from the `(hi, t)` accumulator, which must
/// be below `2m`; the result is fully reduced.
const fn reduce_once<const N: usize>(t: [u64; N], hi: u64, m: &[u64; N]) -> Mpzn<N> {
    let mut r = [0u64; N];
    let mut borrow = 0u64;
    let mut j = 0;
    while j < N {
        let (lo, b) = sbb(t[j], m[j], borrow);
        r[j] = lo;
        borrow = b;
        j += 1;
    }
    // keep the subtracted value when the accumulator overflowed the limb
    // width or the subtraction did not borrow
    let keep = (hi | (1 ^ borrow)) & 1;
    let mask = keep.wrapping_neg();
    let mut out = [0u64; N];
    let mut j = 0;
    while j < N {
        out[j] = (r[j] & mask) | (t[j] & !mask);
        j += 1;
    }
    Mpzn { limbs: out }
}

/// `a + b·c + carry` as a double-limb `(lo, hi)` pair.
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// `a + b + carry` as `(sum, carry)`; the carry out is 0 or 1.
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// `a − b − borrow` as `(diff, borrow)`; the borrow out is 0 or 1.
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let (d, b1) = a.overflowing_sub(b);
    let (d, b2) = d.overflowing_sub(borrow);
    (d, (b1 | b2) as u64)
}

//
// `subtle` trait impls
//

impl<const N: usize> ConditionallySelectable for Mpzn<N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; N];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self { limbs }
    }
}

impl<const N: usize> ConstantTimeEq for Mpzn<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl<const N: usize> Eq for Mpzn<N> {}

/// Constant-time comparison.
impl<const N: usize> PartialEq for Mpzn<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

/// Variable-time comparison; not for secret values.
impl<const N: usize> Ord for Mpzn<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl<const N: usize> PartialOrd for Mpzn<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Default for Mpzn<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Zeroize for Mpzn<N> {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

//
// `core::fmt` trait impls
//

impl<const N: usize> fmt::Debug for Mpzn<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mpzn<{}>(0x{:X})", N, self)
    }
}

impl<const N: usize> fmt::Display for Mpzn<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const N: usize> fmt::LowerHex for Mpzn<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::UpperHex for Mpzn<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:016X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Mpzn, Mpzn256};

    /// p of the 256-bit GOST test curve.
    const P_HEX: &str = "8000000000000000000000000000000000000000000000000000000000000431";

    #[test]
    fn hex_parsing_matches_words() {
        let x = Mpzn256::from_be_hex(P_HEX);
        assert_eq!(
            x.to_words(),
            [0x0000000000000431, 0, 0, 0x8000000000000000]
        );
        assert_eq!(Mpzn256::from_be_hex("2"), Mpzn256::from_u64(2));
    }

    #[test]
    fn le_bytes_round_trip() {
        let x = Mpzn256::from_be_hex(P_HEX);
        let mut buf = [0u8; 32];
        x.write_le_bytes(&mut buf).unwrap();
        assert_eq!(Mpzn256::from_le_slice(&buf).unwrap(), x);
        assert_eq!(buf[0], 0x31);
        assert_eq!(buf[31], 0x80);
    }

    #[test]
    fn add_sub_mod_small() {
        let m = Mpzn256::from_u64(97);
        let a = Mpzn256::from_u64(50);
        let b = Mpzn256::from_u64(60);
        assert_eq!(a.add_mod(&b, &m), Mpzn256::from_u64(13));
        assert_eq!(
            Mpzn256::from_u64(3).sub_mod(&Mpzn256::from_u64(5), &m),
            Mpzn256::from_u64(95)
        );
    }

    #[test]
    fn wrapping_sub_wraps() {
        let a = Mpzn256::from_u64(3).wrapping_sub(&Mpzn256::from_u64(5));
        assert_eq!(
            a.to_words(),
            [u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]
        );
    }

    #[test]
    fn mul_ui_carries() {
        let (lo, carry) = Mpzn256::from_u64(u64::MAX).mul_ui(16);
        assert_eq!(lo.to_words(), [0xFFFF_FFFF_FFFF_FFF0, 0xF, 0, 0]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn rem_edge_cases() {
        let p = Mpzn256::from_be_hex(P_HEX);
        let p_minus_1 = p.wrapping_sub(&Mpzn256::ONE);
        assert_eq!(p.rem(&p), Mpzn256::ZERO);
        assert_eq!(p_minus_1.rem(&p), p_minus_1);
        assert_eq!(
            Mpzn256::from_u64(1234).rem(&Mpzn256::from_u64(97)),
            Mpzn256::from_u64(1234 % 97)
        );
    }

    #[test]
    fn montgomery_round_trip() {
        let p = Mpzn256::from_be_hex(P_HEX);
        let n0 = Mpzn256::mont_n0(&p);
        let r2 = Mpzn256::mont_r2(&p);
        let x = Mpzn256::from_be_hex(
            "2DFBC1B372D89A1188C09C52E0EEC61FCE52032AB1022E8E67ECE6672B043EE5",
        );
        assert_eq!(x.to_montgomery(&p, n0, &r2).to_natural(&p, n0), x);
    }

    #[test]
    fn montgomery_multiplication_law() {
        let p = Mpzn256::from_be_hex(P_HEX);
        let n0 = Mpzn256::mont_n0(&p);
        let r2 = Mpzn256::mont_r2(&p);
        let a = Mpzn256::from_u64(3).to_montgomery(&p, n0, &r2);
        let b = Mpzn256::from_u64(5).to_montgomery(&p, n0, &r2);
        let ab = a.mul_montgomery(&b, &p, n0).to_natural(&p, n0);
        assert_eq!(ab, Mpzn256::from_u64(15));
    }

    #[test]
    fn fermat_little_theorem() {
        let p = Mpzn256::from_be_hex(P_HEX);
        let n0 = Mpzn256::mont_n0(&p);
        let r2 = Mpzn256::mont_r2(&p);
        let one_m = Mpzn256::mont_one(&p);
        let exp = p.wrapping_sub(&Mpzn256::ONE);
        for v in [2u64, 3, 65537] {
            let base = Mpzn256::from_u64(v).to_montgomery(&p, n0, &r2);
            assert_eq!(base.modpow_montgomery(&exp, &p, n0), one_m);
        }
    }

    #[test]
    fn mont_constants_against_wide_arithmetic() {
        // r mod p equals r − p for a modulus with the top bit set
        let p = Mpzn256::from_be_hex(P_HEX);
        assert_eq!(Mpzn256::mont_one(&p), Mpzn256::ZERO.wrapping_sub(&p));
        // n0·p ≡ −1 mod 2⁶⁴
        let n0 = Mpzn256::mont_n0(&p);
        assert_eq!(n0.wrapping_mul(p.to_words()[0]), u64::MAX);
    }

    #[test]
    fn sampling_rejects_out_of_range() {
        use crate::dev::Lcg;
        use rand_core::SeedableRng;

        let mut rng = Lcg::seed_from_u64(42);
        let m = Mpzn256::from_be_hex(P_HEX);
        for _ in 0..32 {
            let x = Mpzn::random_mod(&mut rng, &m).unwrap();
            assert!(x > Mpzn256::ZERO && x < m);
        }
    }
}
