use std::marker::{PhantomData};

use rand::{Rng, SeedableRng};
use rand_pcg::{Pcg64};

use super::width::{FixedWidth};

/**
 * An endless, reproducible sequence of `(value, offset)` test samples.
 *
 * The value ranges over all of `T`. The offset ranges over `0..=T::BITS`.
 */
pub struct SamplePairs<T: FixedWidth> {
    rng: Pcg64,
    _t: PhantomData<T>,
}

impl<T: FixedWidth> SamplePairs<T> {
    pub fn new(seed: u64) -> Self {
        SamplePairs {rng: Pcg64::seed_from_u64(seed), _t: PhantomData}
    }
}

impl<T: FixedWidth> Iterator for SamplePairs<T> {
    type Item = (T, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let value = T::truncate_from(self.rng.gen::<u128>());
        let offset = self.rng.gen_range(0..=T::BITS);
        Some((value, offset))
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn offsets_in_range() {
        let mut seen = [false; 9];
        for (_, n) in SamplePairs::<u8>::new(0).take(1000) {
            assert!(n <= 8);
            seen[n as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "Not every offset was generated");
    }

    #[test]
    fn reproducible() {
        let a: Vec<_> = SamplePairs::<i64>::new(42).take(100).collect();
        let b: Vec<_> = SamplePairs::<i64>::new(42).take(100).collect();
        assert_eq!(a, b);
    }
}
