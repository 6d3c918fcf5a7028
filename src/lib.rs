//! Fixed-width unsigned big number arithmetic.
//!
//! ```
//! use fixed_bignum::bignum::Bn64;
//!
//! let base = Bn64::from_int(4_u8).unwrap();
//! let exponent = Bn64::from_int(13_u8).unwrap();
//! let modulus = Bn64::from_int(497_u16).unwrap();
//!
//! let mut out = Bn64::ZERO;
//! base.powmod(&exponent, &modulus, &mut out).unwrap();
//! assert_eq!(out.to_string(), "0000_0000_0000_01BD");
//! ```

pub mod bignum;
pub mod rand;

pub use bignum::{Bignum, BignumError, Limb, ParseBignumError, SubMode};
