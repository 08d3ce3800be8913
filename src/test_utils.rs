/// Asserts that two floating point numbers are close to each other.
///
/// The default relative tolerance is 1e-6. Values that are both exactly zero
/// are always close.
///
/// # Examples
///
/// ```ignore
/// assert_is_close!(1.0, 1.0);
/// assert_is_close!(1.0, 1.0, 1e-10);
/// ```
#[macro_export]
macro_rules! assert_is_close {
    ($a:expr, $b:expr) => {
        $crate::assert_is_close!($a, $b, 1e-6)
    };
    ($a:expr, $b:expr, $rel_tol:expr) => {{
        let (a, b) = ($a as f64, $b as f64);
        assert!(
            a == b || $crate::utils::float_eq_rel(a, b, $rel_tol),
            "{} is not close to {}",
            a,
            b
        );
    }};
}
