//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have opposite sign
//! - `same_sign`     : `true` if values share the same sign
//! - `sign_change`   : strict form, both non-zero and opposite

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}


/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() == y.is_sign_positive()
}


/// Returns `true` iff `x * y < 0`, without forming the product.
///
/// The product of two tiny values can underflow to `-0.0`, which would
/// wrongly reject a genuine bracket.
#[inline]
pub(crate) fn sign_change(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && opposite_sign(x, y)
}
