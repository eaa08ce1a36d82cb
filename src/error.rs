//! Error types.

use core::fmt;

/// Result type with the `gost3410` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by the signature core.
///
/// Cryptographic verification failure is not an error: verification
/// reports it as a `false` return. Degenerate values encountered while
/// signing (`r = 0`, `s = 0`) are handled by restarting and never surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A buffer has a length other than the one the curve size dictates.
    WrongLength,

    /// A secret scalar is zero (or congruent to zero mod `q`).
    ZeroLength,

    /// The curve size does not match the algorithm or hash function.
    CurveNotSupported,

    /// An OID entry belongs to the wrong engine for this operation.
    OidEngine,

    /// An OID entry has the wrong mode for this operation.
    OidMode,

    /// No OID entry matches the requested name or identifier.
    OidId,

    /// A point is not on the curve or not in the prime-order subgroup.
    InvalidPoint,

    /// The random number generator failed to produce output.
    Random,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::WrongLength => "buffer with unexpected length",
            Error::ZeroLength => "zero secret key value",
            Error::CurveNotSupported => "elliptic curve not supported for this algorithm",
            Error::OidEngine => "OID with wrong engine",
            Error::OidMode => "OID with wrong mode",
            Error::OidId => "unknown OID name or identifier",
            Error::InvalidPoint => "point is not a member of the prime-order subgroup",
            Error::Random => "random number generator failure",
        })
    }
}

impl core::error::Error for Error {}
