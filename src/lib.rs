//! Bitwise rotation (circular shift) for fixed-width integers.
//!
//! Every function is generic over [`FixedWidth`], which is implemented for
//! all the primitive integer types, signed and unsigned. Rotation acts on the
//! bit pattern, so signedness does not affect the result.
//!
//! The offset must lie in `0..=BITS`. Rotating by `0` or by `BITS` returns
//! the value unchanged. A larger offset panics, except in the `checked_*`
//! functions, which return `None`, and the `wrapping_*` functions, which
//! reduce it modulo `BITS`.
//!
//! ```
//! use circular_shift::{rotate_left, rotate_right, Circular};
//!
//! assert_eq!(rotate_left(0b11100000u8, 2), 0b10000011);
//! assert_eq!(rotate_right(0b10111001u8, 5), 0b11001101);
//! assert_eq!(Circular(0b10000000u8) << 4, Circular(0b00001000));
//! ```

mod width;
pub use width::{FixedWidth};

mod rotate;
pub use rotate::{
    rotate_left, rotate_right, rotate_left_assign, rotate_right_assign,
    checked_rotate_left, checked_rotate_right,
    wrapping_rotate_left, wrapping_rotate_right,
};

mod circular;
pub use circular::{Circular};

#[cfg(test)]
mod samples;

/// Initialise logging for tests.
#[cfg(test)]
pub fn init_test_logging() {
    use std::io::Write;

    // The logger can only be initialised once, but we don't know the order of
    // tests. Therefore we use `try_init` and ignore the result.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("trace"))
        .format(|out, record| {
            writeln!(out, "{:>7} {}", record.level(), record.args())
        })
        .is_test(true)
        .try_init();
}
