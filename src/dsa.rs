//! GOST R 34.10-2012 digital signature algorithm.
//!
//! ## Usage
//!
//! ```
//! use gost3410::{
//!     dev::Lcg,
//!     dsa::{SigningKey256, VerifyingKey256},
//!     oid,
//! };
//! use rand_core::SeedableRng;
//!
//! # fn main() -> Result<(), gost3410::Error> {
//! let curve = oid::find_by_name("id-tc26-gost-3410-2012-256-paramSetTest")
//!     .ok_or(gost3410::Error::OidId)?
//!     .curve256()?;
//!
//! // Signing. The Lcg generator is deterministic and for demonstration
//! // only; production keys need a cryptographic generator.
//! let mut rng = Lcg::seed_from_u64(1);
//! let mut signing_key = SigningKey256::generate(curve, &mut rng)?;
//! let message = b"test message";
//! let signature = signing_key.sign_msg(&mut rng, message)?;
//!
//! // Verifying
//! let verifying_key: VerifyingKey256 = signing_key.verifying_key(&mut rng)?;
//! assert!(verifying_key.verify_msg(message, &signature)?);
//! # Ok(())
//! # }
//! ```

mod signing;
mod verifying;

pub use signature;

pub use self::{
    signing::{SigningKey, SigningKey256, SigningKey512},
    verifying::{VerifyingKey, VerifyingKey256, VerifyingKey512},
};

use crate::arithmetic::mpzn::Mpzn;
use crate::error::{Error, Result};
use core::fmt::{self, Debug};

/// GOST R 34.10-2012 signature over an `N`-limb curve: the scalar pair
/// `(r, s)`.
///
/// The wire form is exactly `2·N·8` bytes, the concatenation `r ‖ s`
/// with each half an `N`-limb little-endian integer (the byte-for-byte
/// memory image of the limbs).
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Signature<const N: usize> {
    r: Mpzn<N>,
    s: Mpzn<N>,
}

/// Signature over a 256-bit curve (64 bytes on the wire).
pub type Signature256 = Signature<4>;

/// Signature over a 512-bit curve (128 bytes on the wire).
pub type Signature512 = Signature<8>;

impl<const N: usize> Signature<N> {
    /// Size of the encoded signature in bytes.
    pub const BYTE_SIZE: usize = 2 * N * 8;

    pub(crate) fn from_scalars(r: Mpzn<N>, s: Mpzn<N>) -> Self {
        Self { r, s }
    }

    /// Parse a signature from its `r ‖ s` byte encoding.
    ///
    /// Range checks against the curve order are performed by
    /// verification, not here.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTE_SIZE {
            return Err(Error::WrongLength);
        }
        let (r_bytes, s_bytes) = bytes.split_at(Self::BYTE_SIZE / 2);
        Ok(Self {
            r: Mpzn::from_le_slice(r_bytes)?,
            s: Mpzn::from_le_slice(s_bytes)?,
        })
    }

    /// Write the `r ‖ s` byte encoding into `out`, which must hold
    /// exactly [`Signature::BYTE_SIZE`] bytes.
    pub fn write_to(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != Self::BYTE_SIZE {
            return Err(Error::WrongLength);
        }
        let (r_bytes, s_bytes) = out.split_at_mut(Self::BYTE_SIZE / 2);
        self.r.write_le_bytes(r_bytes)?;
        self.s.write_le_bytes(s_bytes)?;
        Ok(())
    }

    /// The `r` component.
    pub fn r(&self) -> &Mpzn<N> {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Mpzn<N> {
        &self.s
    }
}

impl Signature256 {
    /// Serialize as a byte array.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        let mut out = [0u8; Self::BYTE_SIZE];
        self.write_to(&mut out).expect("buffer length is fixed");
        out
    }
}

impl Signature512 {
    /// Serialize as a byte array.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        let mut out = [0u8; Self::BYTE_SIZE];
        self.write_to(&mut out).expect("buffer length is fixed");
        out
    }
}

impl<const N: usize> Debug for Signature<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(r: {:X}, s: {:X})", self.r, self.s)
    }
}
