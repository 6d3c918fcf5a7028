use super::{Bignum, BignumError, Limb, Result};

impl<L: Limb, const LIMBS: usize> Bignum<L, LIMBS> {
    /// `out = self^exponent mod modulus` by right-to-left square-and-multiply.
    ///
    /// Every intermediate product is at most `(modulus - 1)^2`, when that does not fit in
    /// [`Self::BITS`] bits the multiplication fails and the [`BignumError::Overflow`] is
    /// returned. `out` is only written on success.
    pub fn powmod(&self, exponent: &Self, modulus: &Self, out: &mut Self) -> Result<()> {
        if modulus.is_zero() {
            tracing::debug!("modular exponentiation with a zero modulus");
            return Err(BignumError::DivideByZero);
        }

        let mut result = Self::one().checked_rem(modulus)?;
        let mut base = self.checked_rem(modulus)?;
        let mut exp = *exponent;
        let mut squarings = 0usize;

        while !exp.is_zero() {
            if exp.is_odd() {
                result = result.mul_mod(&base, modulus)?;
            }

            exp.shr1_with_carry();
            // the square after the final bit would never be used
            if !exp.is_zero() {
                base = base.mul_mod(&base, modulus)?;
                squarings += 1;
            }
        }

        tracing::trace!(squarings, "modular exponentiation finished");
        *out = result;
        Ok(())
    }

    pub fn checked_powmod(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        let mut out = Self::ZERO;
        self.powmod(exponent, modulus, &mut out)?;
        Ok(out)
    }

    fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self> {
        let mut product = Self::ZERO;
        self.mul(rhs, &mut product).map_err(|err| {
            tracing::debug!(%err, "modular exponentiation product does not fit");
            err
        })?;

        let mut reduced = Self::ZERO;
        product.div(modulus, None, Some(&mut reduced))?;
        Ok(reduced)
    }
}
