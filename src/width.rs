use std::fmt::{Debug};
use std::ops::{BitOr};

/**
 * An integer type with a statically known number of bits.
 *
 * Signed and unsigned types of the same width behave identically here: all
 * operations act on the bit pattern, not on the numeric value.
 */
pub trait FixedWidth: Debug + Copy + Eq + BitOr<Output=Self> {
    /** The bit-width `W`. */
    const BITS: u32;

    /**
     * Shift left by `n` places, filling with zeros.
     * Shifting by `BITS` or more gives zero.
     */
    fn shl_logical(self, n: u32) -> Self;

    /**
     * Shift right by `n` places, filling with zeros even if `Self` is signed.
     * Shifting by `BITS` or more gives zero.
     */
    fn shr_logical(self, n: u32) -> Self;

    /** The number of set bits. */
    fn count_ones(self) -> u32;

    /** Keep the low `BITS` bits of `bits`. */
    fn truncate_from(bits: u128) -> Self;
}

/**
 * Implements [`FixedWidth`] for `$t`, whose bit pattern is shifted as the
 * unsigned type `$u` of the same width.
 */
macro_rules! fixed_width {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl FixedWidth for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn shl_logical(self, n: u32) -> Self {
                (self as $u).checked_shl(n).unwrap_or(0) as $t
            }

            #[inline(always)]
            fn shr_logical(self, n: u32) -> Self {
                (self as $u).checked_shr(n).unwrap_or(0) as $t
            }

            #[inline(always)]
            fn count_ones(self) -> u32 { <$t>::count_ones(self) }

            #[inline(always)]
            fn truncate_from(bits: u128) -> Self { bits as $u as $t }
        }
    )*}
}

fixed_width! {
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
}

//-----------------------------------------------------------------------------
