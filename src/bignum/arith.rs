use super::{Bignum, BignumError, Limb, Result};

/// What subtraction does when the subtrahend is larger than the minuend
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SubMode {
    /// Produce `a - b mod 2^BITS`
    #[default]
    Wrapping,
    /// Fail with [`BignumError::NegativeResult`]
    Strict,
}

// in-place primitives, each reports what fell off the end
impl<L: Limb, const LIMBS: usize> Bignum<L, LIMBS> {
    pub(super) fn add_with_overflow(&mut self, rhs: &Self) -> bool {
        let mut carry = false;
        for (l, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            let (sum, overflow) = l.carrying_add(*r, carry);
            *l = sum;
            carry = overflow;
        }
        carry
    }

    pub(super) fn sub_with_borrow(&mut self, rhs: &Self) -> bool {
        let mut borrow = false;
        for (l, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            let (diff, underflow) = l.borrowing_sub(*r, borrow);
            *l = diff;
            borrow = underflow;
        }
        borrow
    }

    /// Shift left one bit, returning the bit shifted out of the top limb
    pub(super) fn shl1_with_carry(&mut self) -> bool {
        let mut carry = false;
        for limb in self.limbs.iter_mut() {
            let top = (*limb >> (L::BITS - 1)) == L::ONE;
            *limb = (*limb << 1) | if carry { L::ONE } else { L::ZERO };
            carry = top;
        }
        carry
    }

    /// Shift right one bit, returning the bit shifted out of the bottom limb
    pub(super) fn shr1_with_carry(&mut self) -> bool {
        let mut carry = false;
        for limb in self.limbs.iter_mut().rev() {
            let bottom = (*limb & L::ONE) == L::ONE;
            let fill = if carry { L::ONE << (L::BITS - 1) } else { L::ZERO };
            *limb = (*limb >> 1) | fill;
            carry = bottom;
        }
        carry
    }
}

impl<L: Limb, const LIMBS: usize> Bignum<L, LIMBS> {
    /// `out = self + rhs`, failing with [`BignumError::Overflow`] when the carry escapes the
    /// top limb. `out` is only written on success.
    pub fn add(&self, rhs: &Self, out: &mut Self) -> Result<()> {
        let mut sum = *self;
        if sum.add_with_overflow(rhs) {
            return Err(BignumError::Overflow);
        }
        *out = sum;
        Ok(())
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        let mut out = Self::ZERO;
        self.add(rhs, &mut out)?;
        Ok(out)
    }

    /// `out = self - rhs`, wrapping modulo `2^BITS` when `rhs > self`
    pub fn sub(&self, rhs: &Self, out: &mut Self) -> Result<()> {
        self.sub_with_mode(rhs, out, SubMode::Wrapping)
    }

    /// `out = self - rhs`, failing with [`BignumError::NegativeResult`] when `rhs > self`
    pub fn sub_strict(&self, rhs: &Self, out: &mut Self) -> Result<()> {
        self.sub_with_mode(rhs, out, SubMode::Strict)
    }

    pub fn sub_with_mode(&self, rhs: &Self, out: &mut Self, mode: SubMode) -> Result<()> {
        let mut diff = *self;
        let borrow = diff.sub_with_borrow(rhs);
        if borrow && mode == SubMode::Strict {
            return Err(BignumError::NegativeResult);
        }
        *out = diff;
        Ok(())
    }

    /// Wrapping subtraction, this never fails
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        let mut out = Self::ZERO;
        self.sub(rhs, &mut out)?;
        Ok(out)
    }

    pub fn checked_sub_strict(&self, rhs: &Self) -> Result<Self> {
        let mut out = Self::ZERO;
        self.sub_strict(rhs, &mut out)?;
        Ok(out)
    }

    /// `out = self << 1`, the top bit is discarded
    pub fn shift_left_1(&self, out: &mut Self) {
        *out = *self;
        out.shl1_with_carry();
    }

    /// `out = self >> 1`
    pub fn shift_right_1(&self, out: &mut Self) {
        *out = *self;
        out.shr1_with_carry();
    }

    pub fn shl1_in_place(&mut self) {
        self.shl1_with_carry();
    }

    pub fn shr1_in_place(&mut self) {
        self.shr1_with_carry();
    }
}
