use std::fmt::Debug;

/// A family of interchangeable units sharing one canonical unit (e.g. every unit of mass).
///
/// Each unit carries a multiplicative factor that converts an amount expressed in
/// that unit into the canonical unit of the family.
pub trait Unit: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Name of the family, used in error messages (e.g. `mass`).
    const FAMILY: &'static str;

    /// The canonical unit, whose factor is 1.
    const BASE: Self;

    /// Every unit of the family ordered from largest to smallest factor.
    const DESCENDING: &'static [Self];

    /// Multiplier from this unit to the canonical unit.
    fn factor(self) -> f64;

    /// Abbreviation used for parsing and display (e.g. `kg`).
    fn symbol(self) -> &'static str;

    /// Rounding rule applied to canonical amounts and to converted values.
    /// Continuous families keep the value as-is.
    #[inline]
    fn quantize(value: f64) -> f64 {
        value
    }

    /// Look up a unit by its exact, case-sensitive symbol.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::DESCENDING
            .iter()
            .copied()
            .find(|u| u.symbol() == symbol)
    }
}
