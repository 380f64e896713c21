use std::fmt;
use std::ops::{Shl, Shr, ShlAssign, ShrAssign};

use super::width::{FixedWidth};
use super::rotate::{rotate_left, rotate_right, rotate_left_assign, rotate_right_assign};

/**
 * A value whose shift operators rotate instead of discarding bits.
 *
 * `Circular(x) << n` is `rotate_left(x, n)` and `>>` is `rotate_right()`.
 * The offset must be at most `T::BITS`, as for the functions.
 */
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Circular<T>(pub T);

impl<T> From<T> for Circular<T> {
    fn from(x: T) -> Self { Circular(x) }
}

impl<T: FixedWidth> Shl<u32> for Circular<T> {
    type Output = Self;

    #[inline]
    fn shl(self, n: u32) -> Self { Circular(rotate_left(self.0, n)) }
}

impl<T: FixedWidth> Shr<u32> for Circular<T> {
    type Output = Self;

    #[inline]
    fn shr(self, n: u32) -> Self { Circular(rotate_right(self.0, n)) }
}

impl<T: FixedWidth> ShlAssign<u32> for Circular<T> {
    #[inline]
    fn shl_assign(&mut self, n: u32) { rotate_left_assign(&mut self.0, n) }
}

impl<T: FixedWidth> ShrAssign<u32> for Circular<T> {
    #[inline]
    fn shr_assign(&mut self, n: u32) { rotate_right_assign(&mut self.0, n) }
}

impl<T: fmt::Display> fmt::Display for Circular<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl<T: fmt::Binary> fmt::Binary for Circular<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl<T: fmt::LowerHex> fmt::LowerHex for Circular<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

impl<T: fmt::UpperHex> fmt::UpperHex for Circular<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

//-----------------------------------------------------------------------------
