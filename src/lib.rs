#![no_std]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod dev;
pub mod dsa;
pub mod oid;
pub mod params;

mod arithmetic;
mod error;

pub use crate::{
    arithmetic::{
        curve::WCurve,
        mpzn::{Mpzn, Mpzn256, Mpzn512},
        point::WPoint,
    },
    error::{Error, Result},
};

pub use digest;
pub use rand_core;
pub use signature;
pub use streebog;
