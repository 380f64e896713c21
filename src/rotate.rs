use super::width::{FixedWidth};

/**
 * Panics unless `0 <= n <= T::BITS`.
 *
 * The check is a single comparison; the failure path is out of line.
 */
#[inline(always)]
fn check_offset<T: FixedWidth>(n: u32) {
    if n > T::BITS {
        offset_out_of_range(n, T::BITS);
    }
}

#[cold]
#[inline(never)]
fn offset_out_of_range(n: u32, bits: u32) -> ! {
    log::error!("Rotation offset {} is out of range 0..={}", n, bits);
    panic!("rotation offset {} exceeds bit-width {}", n, bits);
}

/**
 * Bitwise left rotate.
 *
 * The `n` highest bits of `x` move to the low end. `n` must be at most
 * `T::BITS`, otherwise this panics. See [`wrapping_rotate_left()`] for a
 * version that accepts any `n`.
 */
#[inline]
pub fn rotate_left<T: FixedWidth>(x: T, n: u32) -> T {
    check_offset::<T>(n);
    x.shl_logical(n) | x.shr_logical(T::BITS - n)
}

/**
 * Bitwise right rotate.
 *
 * The `n` lowest bits of `x` move to the high end. `n` must be at most
 * `T::BITS`, otherwise this panics. See [`wrapping_rotate_right()`] for a
 * version that accepts any `n`.
 */
#[inline]
pub fn rotate_right<T: FixedWidth>(x: T, n: u32) -> T {
    check_offset::<T>(n);
    x.shr_logical(n) | x.shl_logical(T::BITS - n)
}

/** Replaces `*x` with `rotate_left(*x, n)`. */
#[inline]
pub fn rotate_left_assign<T: FixedWidth>(x: &mut T, n: u32) {
    *x = rotate_left(*x, n);
}

/** Replaces `*x` with `rotate_right(*x, n)`. */
#[inline]
pub fn rotate_right_assign<T: FixedWidth>(x: &mut T, n: u32) {
    *x = rotate_right(*x, n);
}

/** Like [`rotate_left()`] but returns `None` if `n > T::BITS`. */
#[inline]
pub fn checked_rotate_left<T: FixedWidth>(x: T, n: u32) -> Option<T> {
    if n > T::BITS { return None; }
    Some(x.shl_logical(n) | x.shr_logical(T::BITS - n))
}

/** Like [`rotate_right()`] but returns `None` if `n > T::BITS`. */
#[inline]
pub fn checked_rotate_right<T: FixedWidth>(x: T, n: u32) -> Option<T> {
    if n > T::BITS { return None; }
    Some(x.shr_logical(n) | x.shl_logical(T::BITS - n))
}

/** Bitwise left rotate by `n` modulo `T::BITS`. Never panics. */
#[inline]
pub fn wrapping_rotate_left<T: FixedWidth>(x: T, n: u32) -> T {
    // All widths are powers of two.
    rotate_left(x, n & (T::BITS - 1))
}

/** Bitwise right rotate by `n` modulo `T::BITS`. Never panics. */
#[inline]
pub fn wrapping_rotate_right<T: FixedWidth>(x: T, n: u32) -> T {
    rotate_right(x, n & (T::BITS - 1))
}

//-----------------------------------------------------------------------------
