//! Fixed-width unsigned big numbers built from an array of limbs.
//!
//! Every value of a given `Bignum<L, LIMBS>` is exactly `L::BITS * LIMBS` bits wide. Nothing
//! grows: results that do not fit are reported as [`BignumError::Overflow`] instead of being
//! truncated.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::rand::Rng32;

mod arith;
mod div;
mod error;
mod limb;
mod mul;
mod powmod;

pub use arith::SubMode;
pub use error::{BignumError, ParseBignumError, Result};
pub use limb::Limb;

/// 64 bits in 16 bit limbs
pub type Bn64 = Bignum<u16, 4>;
pub type Bn128 = Bignum<u16, 8>;
pub type Bn256 = Bignum<u32, 8>;
pub type Bn512 = Bignum<u64, 8>;

/// An unsigned integer of `L::BITS * LIMBS` bits, least significant limb first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bignum<L: Limb, const LIMBS: usize> {
    limbs: [L; LIMBS],
}

/// Public utility functions
impl<L: Limb, const LIMBS: usize> Bignum<L, LIMBS> {
    /// Total width in bits
    pub const BITS: usize = L::BITS as usize * LIMBS;

    pub const ZERO: Self = Self {
        limbs: [L::ZERO; LIMBS],
    };

    pub const MAX: Self = Self {
        limbs: [L::MAX; LIMBS],
    };

    pub fn one() -> Self {
        let mut out = Self::ZERO;
        if let Some(low) = out.limbs.first_mut() {
            *low = L::ONE;
        }
        out
    }

    pub const fn from_limbs(limbs: [L; LIMBS]) -> Self {
        Self { limbs }
    }

    pub fn limbs(&self) -> &[L; LIMBS] {
        &self.limbs
    }

    /// Direct limb access, mostly useful for building test values
    pub fn limbs_mut(&mut self) -> &mut [L; LIMBS] {
        &mut self.limbs
    }

    /// Set every limb to zero
    pub fn clear(&mut self) {
        self.limbs = [L::ZERO; LIMBS];
    }

    /// Overwrite `out` with this value, `out`'s previous contents are never read
    pub fn copy_into(&self, out: &mut Self) {
        out.limbs = self.limbs;
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|limb| *limb == L::ZERO)
    }

    pub fn is_one(&self) -> bool {
        match self.limbs.split_first() {
            Some((low, rest)) => *low == L::ONE && rest.iter().all(|limb| *limb == L::ZERO),
            None => false,
        }
    }

    /// Is the least significant bit set
    pub fn is_odd(&self) -> bool {
        self.limbs
            .first()
            .map_or(false, |low| *low & L::ONE == L::ONE)
    }

    /// The number of bits required to represent this number
    pub fn bit_length(&self) -> usize {
        self.limbs
            .iter()
            .rposition(|limb| *limb != L::ZERO)
            .map_or(0, |top| {
                let top_bits = 128 - self.limbs[top].widen().leading_zeros() as usize;
                top * L::BITS as usize + top_bits
            })
    }

    /// Three way comparison, scanning from the most significant limb down
    pub fn compare(&self, other: &Self) -> Ordering {
        self.limbs
            .iter()
            .zip(other.limbs.iter())
            .rev()
            .map(|(a, b)| a.cmp(b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Read bit `index`, 0 being the least significant
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.test_bit(index))
    }

    /// Set bit `index` to `value`, 0 being the least significant
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.put_bit(index, value);
        Ok(())
    }

    /// Replace this value with `value`, failing if it needs more than [`Self::BITS`] bits.
    ///
    /// On failure `self` is left as it was.
    pub fn load_int(&mut self, value: impl Into<u128>) -> Result<()> {
        let mut rest: u128 = value.into();
        let mut limbs = [L::ZERO; LIMBS];
        for limb in limbs.iter_mut() {
            if rest == 0 {
                break;
            }
            *limb = L::truncate_from(rest);
            rest >>= L::BITS;
        }

        if rest != 0 {
            return Err(BignumError::Overflow);
        }

        self.limbs = limbs;
        Ok(())
    }

    pub fn from_int(value: impl Into<u128>) -> Result<Self> {
        let mut out = Self::ZERO;
        out.load_int(value)?;
        Ok(out)
    }

    /// The value as a native integer, if it fits in one
    pub fn to_u128(&self) -> Option<u128> {
        if self.bit_length() > 128 {
            return None;
        }

        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, limb| (acc << L::BITS) | limb.widen()),
        )
    }

    /// Generate a uniformly random Bignum from Bignum::ZERO to Bignum::MAX inclusive
    pub fn random(mut rng: impl Rng32) -> Self {
        let mut out = Self::ZERO;
        for limb in out.limbs.iter_mut() {
            *limb = L::truncate_from(u128::from_le_bytes(rng.gen_array()));
        }
        out
    }
}

// private helper functions
impl<L: Limb, const LIMBS: usize> Bignum<L, LIMBS> {
    fn check_index(&self, index: usize) -> Result<()> {
        if index < Self::BITS {
            Ok(())
        } else {
            Err(BignumError::IndexOutOfRange {
                index,
                bits: Self::BITS,
            })
        }
    }

    /// Test bit `index` without a range check, callers iterate over `0..BITS`
    fn test_bit(&self, index: usize) -> bool {
        let limb = self.limbs[index / L::BITS as usize];
        (limb >> (index as u32 % L::BITS)) & L::ONE == L::ONE
    }

    fn put_bit(&mut self, index: usize, value: bool) {
        let limb = &mut self.limbs[index / L::BITS as usize];
        let mask = L::ONE << (index as u32 % L::BITS);
        *limb = if value { *limb | mask } else { *limb & !mask };
    }
}

impl<L: Limb, const LIMBS: usize> Default for Bignum<L, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<L: Limb, const LIMBS: usize> From<[L; LIMBS]> for Bignum<L, LIMBS> {
    fn from(limbs: [L; LIMBS]) -> Self {
        Self { limbs }
    }
}

impl<L: Limb, const LIMBS: usize> PartialOrd for Bignum<L, LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L: Limb, const LIMBS: usize> Ord for Bignum<L, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Most significant limb first, each limb zero padded, limbs separated by `_`.
impl<L: Limb, const LIMBS: usize> fmt::Display for Bignum<L, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (L::BITS / 4) as usize;
        for (i, limb) in self.limbs.iter().rev().enumerate() {
            if i != 0 {
                f.write_str("_")?;
            }
            write!(f, "{limb:0width$X}")?;
        }
        Ok(())
    }
}

impl<L: Limb, const LIMBS: usize> FromStr for Bignum<L, LIMBS> {
    type Err = ParseBignumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.is_empty() {
            return Err(ParseBignumError::Empty);
        }

        let mut out = Self::ZERO;
        if s.contains('_') {
            let found = s.split('_').count();
            if found != LIMBS {
                return Err(ParseBignumError::LimbCount {
                    expected: LIMBS,
                    found,
                });
            }

            for (limb, group) in out.limbs.iter_mut().zip(s.rsplit('_')) {
                *limb = parse_limb(group.as_bytes())?;
            }
        } else {
            let digits_per_limb = (L::BITS / 4) as usize;
            let mut chunks = s.as_bytes().rchunks(digits_per_limb);
            for (limb, chunk) in out.limbs.iter_mut().zip(chunks.by_ref()) {
                *limb = parse_limb(chunk)?;
            }

            // anything left over has to be leading zeros
            for &digit in chunks.flatten() {
                if hex_digit(digit)? != 0 {
                    return Err(ParseBignumError::Overflow);
                }
            }
        }

        Ok(out)
    }
}

fn hex_digit(b: u8) -> Result<u128, ParseBignumError> {
    (b as char)
        .to_digit(16)
        .map(u128::from)
        .ok_or(ParseBignumError::InvalidDigit(b as char))
}

fn parse_limb<L: Limb>(digits: &[u8]) -> Result<L, ParseBignumError> {
    if digits.is_empty() {
        return Err(ParseBignumError::Empty);
    }

    let mut value = 0u128;
    for &digit in digits {
        value = (value << 4) | hex_digit(digit)?;
        if value > L::MAX.widen() {
            return Err(ParseBignumError::Overflow);
        }
    }
    Ok(L::truncate_from(value))
}
