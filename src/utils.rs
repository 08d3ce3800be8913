use num_traits::Float;

/// Compute approximate equality between floating point numbers using a
/// relative tolerance bound.
///
/// Return
/// ------
/// true if the difference between values is within tolerance.
pub fn float_eq_rel<N: Float>(a: N, b: N, max_diff: N) -> bool {
    let largest = a.abs().max(b.abs());
    (a - b).abs() <= (largest * max_diff)
}

pub trait ApproxEq {
    fn approx_eq(self, x: Self) -> bool;
}
impl ApproxEq for f64 {
    fn approx_eq(self, x: Self) -> bool {
        float_eq_rel(self, x, 1e-6)
    }
}

pub trait RoundDigits {
    /// Round half away from zero to `ndigits` decimal places.
    #[must_use]
    fn round_digits(self, ndigits: i32) -> Self;
}
impl RoundDigits for f64 {
    fn round_digits(self, ndigits: i32) -> Self {
        // Rescale to round with expected precision and then scale back.
        let factor = Float::powi(10.0, ndigits);
        (self * factor).round() / factor
    }
}
