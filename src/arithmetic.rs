//! Curve and field arithmetic: the fixed-width Montgomery engine, curve
//! parameter bundles, and projective point operations.

pub mod curve;
pub mod mpzn;
pub mod point;
