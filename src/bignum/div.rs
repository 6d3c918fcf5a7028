use super::{Bignum, BignumError, Limb, Result};

impl<L: Limb, const LIMBS: usize> Bignum<L, LIMBS> {
    /// Restoring binary long division: `quotient = self / divisor`, `remainder = self % divisor`.
    ///
    /// Either output may be omitted. Fails with [`BignumError::DivideByZero`] before touching
    /// either output when `divisor` is zero.
    pub fn div(
        &self,
        divisor: &Self,
        quotient: Option<&mut Self>,
        remainder: Option<&mut Self>,
    ) -> Result<()> {
        if divisor.is_zero() {
            tracing::debug!("division by zero");
            return Err(BignumError::DivideByZero);
        }

        let mut q = Self::ZERO;
        let mut r = Self::ZERO;
        for i in (0..Self::BITS).rev() {
            // r < divisor before the shift, so a bit carried out means 2r + b >= 2^BITS > divisor
            let carried = r.shl1_with_carry();
            r.put_bit(0, self.test_bit(i));

            if carried || r >= *divisor {
                // with `carried` set the true remainder is 2^BITS + r, the wrapped difference is
                // exactly the true one since it is below the divisor
                let borrowed = r.sub_with_borrow(divisor);
                debug_assert_eq!(borrowed, carried);
                q.put_bit(i, true);
            }
        }

        debug_assert!(r < *divisor);
        tracing::trace!(bits = Self::BITS, "division finished");

        if let Some(quotient) = quotient {
            *quotient = q;
        }
        if let Some(remainder) = remainder {
            *remainder = r;
        }
        Ok(())
    }

    /// performs both division and mod and returns the pair (div, mod)
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let mut q = Self::ZERO;
        let mut r = Self::ZERO;
        self.div(divisor, Some(&mut q), Some(&mut r))?;
        Ok((q, r))
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        let mut q = Self::ZERO;
        self.div(divisor, Some(&mut q), None)?;
        Ok(q)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        let mut r = Self::ZERO;
        self.div(divisor, None, Some(&mut r))?;
        Ok(r)
    }
}
