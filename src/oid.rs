//! Object identifier registry.
//!
//! A flat, compile-time table mapping human-readable names and dotted
//! identifiers to algorithm and curve entries. A single entry may expose
//! several aliases: the historical RFC 4357 CryptoPro names resolve to
//! the same curves as their TC26 counterparts.
//!
//! All queries borrow from the static table; iterator-returning queries
//! ([`find_by_engine`], [`find_by_mode`]) play the role of a cursor.

use crate::arithmetic::curve::WCurve;
use crate::error::{Error, Result};
use crate::params::{
    TC26_GOST_3410_2012_256_PARAM_SET_A, TC26_GOST_3410_2012_256_PARAM_SET_B,
    TC26_GOST_3410_2012_256_PARAM_SET_C, TC26_GOST_3410_2012_256_PARAM_SET_D,
    TC26_GOST_3410_2012_256_PARAM_SET_TEST, TC26_GOST_3410_2012_512_PARAM_SET_A,
    TC26_GOST_3410_2012_512_PARAM_SET_B, TC26_GOST_3410_2012_512_PARAM_SET_TEST,
};

/// Functional class of a registry entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Engine {
    /// Named object without executable behavior (curve parameters).
    Identifier,
    /// Signature generation algorithm.
    SignFunction,
    /// Signature verification algorithm.
    VerifyFunction,
    /// Hash function.
    HashFunction,
    /// Random number generator.
    RandomGenerator,
}

/// Interpretation of the data carried by a registry entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// A directly usable algorithm.
    Algorithm,
    /// Parameters of an elliptic curve in short Weierstrass form.
    WCurveParams,
}

/// Payload of a registry entry.
#[derive(Clone, Copy, Debug)]
pub enum OidData {
    /// No payload; the entry only names an algorithm.
    None,
    /// Parameters of a 256-bit curve.
    Curve256(&'static WCurve<4>),
    /// Parameters of a 512-bit curve.
    Curve512(&'static WCurve<8>),
}

impl OidData {
    /// Payload identity, by reference.
    fn same_as(&self, other: &OidData) -> bool {
        match (self, other) {
            (OidData::Curve256(a), OidData::Curve256(b)) => core::ptr::eq(*a, *b),
            (OidData::Curve512(a), OidData::Curve512(b)) => core::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

/// Registry entry: an engine/mode pair, the alias lists, and an optional
/// data payload.
#[derive(Debug)]
pub struct Oid {
    /// Functional class.
    pub engine: Engine,
    /// Data interpretation.
    pub mode: Mode,
    /// Dotted-decimal identifiers, most specific first.
    pub id: &'static [&'static str],
    /// Human-readable alias names.
    pub names: &'static [&'static str],
    /// Optional payload.
    pub data: OidData,
}

impl Oid {
    /// Extract 256-bit curve parameters, verifying the entry's class.
    pub fn curve256(&self) -> Result<&'static WCurve<4>> {
        if self.engine != Engine::Identifier {
            return Err(Error::OidEngine);
        }
        if self.mode != Mode::WCurveParams {
            return Err(Error::OidMode);
        }
        match self.data {
            OidData::Curve256(wc) => Ok(wc),
            _ => Err(Error::CurveNotSupported),
        }
    }

    /// Extract 512-bit curve parameters, verifying the entry's class.
    pub fn curve512(&self) -> Result<&'static WCurve<8>> {
        if self.engine != Engine::Identifier {
            return Err(Error::OidEngine);
        }
        if self.mode != Mode::WCurveParams {
            return Err(Error::OidMode);
        }
        match self.data {
            OidData::Curve512(wc) => Ok(wc),
            _ => Err(Error::CurveNotSupported),
        }
    }
}

static REGISTRY: [Oid; 15] = [
    Oid {
        engine: Engine::RandomGenerator,
        mode: Mode::Algorithm,
        id: &["1.2.643.2.52.1.1.1"],
        names: &["lcg"],
        data: OidData::None,
    },
    Oid {
        engine: Engine::HashFunction,
        mode: Mode::Algorithm,
        id: &["1.2.643.7.1.1.2.2"],
        names: &["streebog256", "md_gost12_256"],
        data: OidData::None,
    },
    Oid {
        engine: Engine::HashFunction,
        mode: Mode::Algorithm,
        id: &["1.2.643.7.1.1.2.3"],
        names: &["streebog512", "md_gost12_512"],
        data: OidData::None,
    },
    Oid {
        engine: Engine::SignFunction,
        mode: Mode::Algorithm,
        id: &["1.2.643.7.1.1.3.2"],
        names: &["id-tc26-signwithdigest-gost3410-12-256", "sign256"],
        data: OidData::None,
    },
    Oid {
        engine: Engine::SignFunction,
        mode: Mode::Algorithm,
        id: &["1.2.643.7.1.1.3.3"],
        names: &["id-tc26-signwithdigest-gost3410-12-512", "sign512"],
        data: OidData::None,
    },
    Oid {
        engine: Engine::VerifyFunction,
        mode: Mode::Algorithm,
        id: &["1.2.643.7.1.1.1.1"],
        names: &["id-tc26-gost3410-12-256", "verify256"],
        data: OidData::None,
    },
    Oid {
        engine: Engine::VerifyFunction,
        mode: Mode::Algorithm,
        id: &["1.2.643.7.1.1.1.2"],
        names: &["id-tc26-gost3410-12-512", "verify512"],
        data: OidData::None,
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.1.0", "1.2.643.2.2.35.0"],
        names: &["id-tc26-gost-3410-2012-256-paramSetTest"],
        data: OidData::Curve256(&TC26_GOST_3410_2012_256_PARAM_SET_TEST),
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.1.1"],
        names: &["id-tc26-gost-3410-2012-256-paramSetA"],
        data: OidData::Curve256(&TC26_GOST_3410_2012_256_PARAM_SET_A),
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.1.2", "1.2.643.2.2.35.1", "1.2.643.2.2.36.0"],
        names: &[
            "id-tc26-gost-3410-2012-256-paramSetB",
            "id-rfc4357-gost-3410-2001-paramSetA",
            "id-rfc4357-2001dh-paramSet",
            "cspdh",
            "cspa",
        ],
        data: OidData::Curve256(&TC26_GOST_3410_2012_256_PARAM_SET_B),
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.1.3", "1.2.643.2.2.35.2"],
        names: &[
            "id-tc26-gost-3410-2012-256-paramSetC",
            "id-rfc4357-gost-3410-2001-paramSetB",
            "cspb",
        ],
        data: OidData::Curve256(&TC26_GOST_3410_2012_256_PARAM_SET_C),
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.1.4", "1.2.643.2.2.35.3"],
        names: &[
            "id-tc26-gost-3410-2012-256-paramSetD",
            "id-rfc4357-gost-3410-2001-paramSetC",
            "cspc",
        ],
        data: OidData::Curve256(&TC26_GOST_3410_2012_256_PARAM_SET_D),
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.2.0"],
        names: &["id-tc26-gost-3410-2012-512-paramSetTest"],
        data: OidData::Curve512(&TC26_GOST_3410_2012_512_PARAM_SET_TEST),
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.2.1"],
        names: &["id-tc26-gost-3410-2012-512-paramSetA"],
        data: OidData::Curve512(&TC26_GOST_3410_2012_512_PARAM_SET_A),
    },
    Oid {
        engine: Engine::Identifier,
        mode: Mode::WCurveParams,
        id: &["1.2.643.7.1.2.1.2.2"],
        names: &["id-tc26-gost-3410-2012-512-paramSetB"],
        data: OidData::Curve512(&TC26_GOST_3410_2012_512_PARAM_SET_B),
    },
];

/// All registry entries, in registration order.
pub fn entries() -> &'static [Oid] {
    &REGISTRY
}

/// Look up an entry by one of its alias names.
pub fn find_by_name(name: &str) -> Option<&'static Oid> {
    REGISTRY
        .iter()
        .find(|oid| oid.names.iter().any(|n| *n == name))
}

/// Look up an entry by one of its dotted identifiers.
pub fn find_by_id(id: &str) -> Option<&'static Oid> {
    REGISTRY.iter().find(|oid| oid.id.iter().any(|i| *i == id))
}

/// Look up an entry by name or dotted identifier.
pub fn find_by_ni(ni: &str) -> Option<&'static Oid> {
    find_by_name(ni).or_else(|| find_by_id(ni))
}

/// Look up the entry carrying the given payload (pointer identity).
pub fn find_by_data(data: &OidData) -> Option<&'static Oid> {
    REGISTRY.iter().find(|oid| oid.data.same_as(data))
}

/// Iterate over the entries of one engine.
pub fn find_by_engine(engine: Engine) -> impl Iterator<Item = &'static Oid> {
    REGISTRY.iter().filter(move |oid| oid.engine == engine)
}

/// Iterate over the entries of one mode.
pub fn find_by_mode(mode: Mode) -> impl Iterator<Item = &'static Oid> {
    REGISTRY.iter().filter(move |oid| oid.mode == mode)
}

#[cfg(test)]
mod tests {
    use super::{find_by_data, find_by_engine, find_by_id, find_by_mode, find_by_name, find_by_ni};
    use super::{Engine, Mode, OidData};
    use crate::params::TC26_GOST_3410_2012_256_PARAM_SET_B;

    #[test]
    fn aliases_resolve_to_one_entry() {
        let by_tc26 = find_by_name("id-tc26-gost-3410-2012-256-paramSetB").unwrap();
        let by_rfc = find_by_name("id-rfc4357-gost-3410-2001-paramSetA").unwrap();
        let by_csp = find_by_name("cspa").unwrap();
        assert!(core::ptr::eq(by_tc26, by_rfc));
        assert!(core::ptr::eq(by_tc26, by_csp));
        assert!(by_tc26.curve256().is_ok());
    }

    #[test]
    fn lookup_by_identifier() {
        let oid = find_by_id("1.2.643.2.2.35.1").unwrap();
        assert_eq!(oid.mode, Mode::WCurveParams);
        let direct = find_by_ni("1.2.643.7.1.1.3.2").unwrap();
        assert_eq!(direct.engine, Engine::SignFunction);
        assert!(find_by_name("1.2.643.7.1.1.3.2").is_none());
        assert!(find_by_ni("no-such-algorithm").is_none());
    }

    #[test]
    fn curve_accessors_enforce_entry_class() {
        // the sign256 entry carries no curve payload
        let sign = find_by_name("sign256").unwrap();
        assert!(sign.curve256().is_err());
        let curve = find_by_name("cspa").unwrap();
        assert!(curve.curve512().is_err());
    }

    #[test]
    fn data_lookup_is_by_identity() {
        let data = OidData::Curve256(&TC26_GOST_3410_2012_256_PARAM_SET_B);
        let oid = find_by_data(&data).unwrap();
        assert!(oid.names.contains(&"cspa"));
        assert!(find_by_data(&OidData::None).is_none());
    }

    #[test]
    fn registered_curve_count() {
        assert_eq!(find_by_mode(Mode::WCurveParams).count(), 8);
        assert_eq!(find_by_engine(Engine::Identifier).count(), 8);
    }
}
