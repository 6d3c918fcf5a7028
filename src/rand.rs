//! Small deterministic generators for drawing test operands.

pub trait Rng32 {
    /// Generate a 32 bit random value
    fn gen(&mut self) -> u32;

    /// Generate an array of random bytes
    fn gen_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0; N];
        let bytes = std::iter::from_fn(|| Some(self.gen().to_le_bytes())).flatten();

        for (o, b) in out.iter_mut().zip(bytes) {
            *o = b;
        }

        out
    }
}

impl<T: Rng32> Rng32 for &mut T {
    fn gen(&mut self) -> u32 {
        (*self).gen()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn from_seed(seed: u32) -> Self {
        assert!(seed != 0, "XorShift32 cannot be seeded with zero.");
        Self { state: seed }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::from_seed(0x2545_F491)
    }
}

impl Rng32 for XorShift32 {
    fn gen(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.state
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[should_panic]
    fn test_zero_seed_fails() {
        XorShift32::from_seed(0);
    }

    #[test]
    fn test_gen_array() {
        let mut rng = XorShift32::from_seed(42);
        let a = rng.gen();
        let b = rng.gen();
        let [b1, b2, b3, b4] = a.to_le_bytes();
        let [b5, b6, b7, _] = b.to_le_bytes();

        let gen: [u8; 7] = XorShift32::from_seed(42).gen_array();

        assert_eq!(gen, [b1, b2, b3, b4, b5, b6, b7]);
    }
}
