/// Canonical form of a floating point amount used for equality, ordering and hashing.
///
/// All NaN values collapse to a single NaN and `-0.0` collapses to `0.0`, so that
/// `total_cmp` and the bit pattern agree with each other.
#[inline]
pub(crate) fn canonical(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Bit pattern of the canonical form, suitable for `std::hash::Hash`.
#[inline]
pub(crate) fn canonical_bits(value: f64) -> u64 {
    canonical(value).to_bits()
}
