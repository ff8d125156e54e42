// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("morph_targets requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn ceil(self) -> Self => ceil;
    fn floor(self) -> Self => floor;
    fn sqrt(self) -> Self => sqrt;
}

/// Linear interpolation between two values.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// The `q`-th quantile of an ascending slice.
///
/// Uses linear interpolation between the two nearest order statistics, so the
/// median of `[1, 2, 3, 4]` is `2.5`. `q` is clamped to `[0, 1]`.
///
/// Returns `None` if `sorted` is empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = q.clamp(0.0, 1.0) * last as f64;
    let lo = pos.floor();
    let hi = pos.ceil();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "`pos` is non-negative and at most `last`"
    )]
    let (lo_ix, hi_ix) = (lo as usize, hi as usize);
    Some(lerp(sorted[lo_ix], sorted[hi_ix], pos - lo))
}

#[cfg(test)]
mod tests {
    use super::quantile_sorted;

    #[test]
    fn quantile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&data, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&data, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&data, 1.0), Some(4.0));
        let q = quantile_sorted(&data, 0.05).unwrap();
        assert!((q - 1.15).abs() < 1e-12);
    }

    #[test]
    fn quantile_edges() {
        assert_eq!(quantile_sorted(&[], 0.5), None);
        assert_eq!(quantile_sorted(&[7.0], 0.95), Some(7.0));
        assert_eq!(quantile_sorted(&[1.0, 3.0], 2.0), Some(3.0));
    }
}
