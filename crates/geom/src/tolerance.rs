//! The geometric tolerance used to decide interiority of a projection.
//!
//! A single fixed epsilon works for a mesh of bounded size, but is
//! either too loose (millimeter-scale parts) or too tight
//! (kilometer-scale terrain) at the extremes, so every call site scales
//! [`BASE_EPS`] by the primitive's own extent.

/// Base tolerance before scaling by primitive extent.
pub const BASE_EPS: f64 = 1e-14;

/// Scales [`BASE_EPS`] by the extent (e.g. bounding-box diagonal, or
/// edge length) of the primitive a projection is being tested against.
///
/// `extent <= 0.0` (a degenerate, zero-size primitive) still returns a
/// usable, non-zero epsilon so interiority checks don't divide by zero
/// or become vacuously true.
#[inline]
pub fn eps_for_extent(extent: f64) -> f64 {
    BASE_EPS * extent.abs().max(1.0)
}

/// `approx`-style absolute-difference comparison, local to this crate
/// so tests (here and in dependents) don't need to inline `.abs() <
/// eps` by hand.
#[inline]
pub fn abs_diff_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_with_extent() {
        assert!(eps_for_extent(1.0) < eps_for_extent(1_000_000.0));
    }

    #[test]
    fn never_zero() {
        assert!(eps_for_extent(0.0) > 0.0);
        assert!(eps_for_extent(-5.0) > 0.0);
    }

    #[test]
    fn abs_diff_eq_respects_tolerance() {
        assert!(abs_diff_eq(1.0, 1.0 + 1e-10, 1e-9));
        assert!(!abs_diff_eq(1.0, 1.1, 1e-9));
    }
}
