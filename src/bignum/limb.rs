use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

/// A single digit of a [`Bignum`](super::Bignum), radix `2^BITS`.
///
/// Each implementation carries an unsigned accumulator one step wider than the limb for
/// carry propagation and a signed accumulator of the same width for borrow propagation.
pub trait Limb:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::UpperHex
    + Send
    + Sync
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// `self + rhs + carry`, returning the low limb and the carry out
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool);

    /// `self - rhs - borrow`, returning the low limb and the borrow out
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Keep only the lowest `BITS` bits of `value`
    fn truncate_from(value: u128) -> Self;

    fn widen(self) -> u128;
}

macro_rules! impl_limb {
    ($limb:ty, $wide:ty, $signed:ty) => {
        impl Limb for $limb {
            const BITS: u32 = <$limb>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$limb>::MAX;

            #[inline]
            fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                let m = self as $wide + rhs as $wide + carry as $wide;
                (m as $limb, (m >> Self::BITS) != 0)
            }

            #[inline]
            fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let m = self as $signed - rhs as $signed - borrow as $signed;
                // arithmetic shift leaves either 0 or -1 behind
                (m as $limb, (m >> Self::BITS) != 0)
            }

            #[inline]
            fn truncate_from(value: u128) -> Self {
                value as $limb
            }

            #[inline]
            fn widen(self) -> u128 {
                self as u128
            }
        }
    };
}

impl_limb!(u8, u16, i16);
impl_limb!(u16, u32, i32);
impl_limb!(u32, u64, i64);
impl_limb!(u64, u128, i128);
