#![allow(unused)]

use fixed_bignum::bignum::{Bignum, Bn64};

/// Bignum with the original program's layout, two 32 bit limbs
pub type B32x2 = Bignum<u32, 2>;

/// 64 bits in 8 bit limbs, exercises many limb boundaries
pub type B8x8 = Bignum<u8, 8>;

pub fn bn(x: u64) -> Bn64 {
    Bn64::from_int(x).unwrap()
}

pub fn native(x: &Bn64) -> u64 {
    x.to_u128()
        .and_then(|x| u64::try_from(x).ok())
        .expect("a 64 bit bignum always fits in a u64")
}
