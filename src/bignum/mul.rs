use super::{Bignum, BignumError, Limb, Result};

impl<L: Limb, const LIMBS: usize> Bignum<L, LIMBS> {
    /// `out = self * rhs` by shift-and-add.
    ///
    /// Fails with [`BignumError::Overflow`] exactly when the true product needs more than
    /// [`Self::BITS`] bits. `out` is only written on success.
    pub fn mul(&self, rhs: &Self, out: &mut Self) -> Result<()> {
        let mut multiplier = *self;
        let mut multiplicand = *rhs;
        let mut acc = Self::ZERO;
        let mut rounds = 0usize;

        while !multiplier.is_zero() {
            if multiplier.is_odd() && acc.add_with_overflow(&multiplicand) {
                tracing::debug!(rounds, "multiplication overflowed while accumulating");
                return Err(BignumError::Overflow);
            }

            multiplier.shr1_with_carry();
            // a bit lost off the top of the multiplicand still counts if any multiplier bits
            // remain to pick it up
            if multiplicand.shl1_with_carry() && !multiplier.is_zero() {
                tracing::debug!(rounds, "multiplication overflowed while shifting");
                return Err(BignumError::Overflow);
            }
            rounds += 1;
        }

        tracing::trace!(rounds, "multiplication finished");
        *out = acc;
        Ok(())
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let mut out = Self::ZERO;
        self.mul(rhs, &mut out)?;
        Ok(out)
    }
}
