use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use num_traits::AsPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::{SiError, SiResult},
    hash::{canonical, canonical_bits},
    parser::quantity_parser,
    unit::Unit,
    utils::{ApproxEq, RoundDigits},
};

/// Number of decimals used by [`Quantity::to_human`].
pub const HUMAN_PRECISION: usize = 1;

/// An immutable amount of some unit family, e.g. `4 kg` or `512 KB`.
///
/// The amount is always stored in the canonical unit of the family. All unit
/// accessors are derived from it, and equality, ordering and hashing only look at it.
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit> {
    /// e.g. `4_000_000` milligrams for `4 kg`.
    amount: f64,

    _marker: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    pub const ZERO: Self = Self::raw(0.0);
    pub const MAX: Self = Self::raw(f64::MAX);
    pub const MIN: Self = Self::raw(f64::MIN);
    pub const INFINITY: Self = Self::raw(f64::INFINITY);
    pub const NEG_INFINITY: Self = Self::raw(f64::NEG_INFINITY);
    pub const NAN: Self = Self::raw(f64::NAN);

    const fn raw(amount: f64) -> Self {
        Self {
            amount,
            _marker: PhantomData, // Only needed to carry the unit family.
        }
    }

    /// Create a quantity from an amount expressed in the canonical unit.
    pub fn from_base(amount: f64) -> Self {
        Self::raw(U::quantize(amount))
    }

    /// Create a quantity of `value` expressed in `unit`.
    pub fn of<N: AsPrimitive<f64>>(value: N, unit: U) -> Self {
        Self::from_base(value.as_() * unit.factor())
    }

    /// The underlying amount in the canonical unit.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The value of this quantity expressed in `unit`.
    pub fn in_unit(&self, unit: U) -> f64 {
        U::quantize(self.amount / unit.factor())
    }

    /// Approximate equality between quantities, accounting for floating point imprecision.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.amount.approx_eq(other.amount)
    }

    pub fn abs(self) -> Self {
        Self::raw(self.amount.abs())
    }

    pub fn is_nan(&self) -> bool {
        self.amount.is_nan()
    }

    /// The largest unit in which this quantity has a magnitude of at least one.
    /// Falls back to the canonical unit for small amounts (and NaN).
    pub fn human_unit(&self) -> U {
        let magnitude = self.amount.abs();
        U::DESCENDING
            .iter()
            .copied()
            .find(|u| magnitude / u.factor() >= 1.0)
            .unwrap_or(U::BASE)
    }

    /// Human readable representation with one decimal, e.g. `10.1 kg`.
    pub fn to_human(&self) -> String {
        self.to_human_with_precision(HUMAN_PRECISION)
    }

    /// Human readable representation rounded half away from zero to `ndigits` decimals.
    pub fn to_human_with_precision(&self, ndigits: usize) -> String {
        let unit = self.human_unit();
        // Adding zero clears the sign of a value that rounded to -0.
        let value = (self.amount / unit.factor()).round_digits(ndigits as i32) + 0.0;
        format!("{:.*} {}", ndigits, value, unit.symbol())
    }

    /// Parse an expression into a quantity (e.g. "78.4 kg").
    pub fn parse(s: &str) -> SiResult<Self> {
        let (value, symbol) = quantity_parser::quantity(s).map_err(|e| {
            log::debug!("Invalid {} expression '{}': {}", U::FAMILY, s, e);
            SiError::InvalidExpression(U::FAMILY, s.into())
        })?;
        let unit = U::from_symbol(symbol).ok_or_else(|| {
            log::debug!("Unknown {} unit '{}' in '{}'", U::FAMILY, symbol, s);
            SiError::UnknownUnit(U::FAMILY, symbol.into())
        })?;
        Ok(Self::of(value, unit))
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = SiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats like [`Quantity::to_human`]; a format precision (`{:.3}`) overrides the decimals.
impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ndigits = f.precision().unwrap_or(HUMAN_PRECISION);
        f.write_str(&self.to_human_with_precision(ndigits))
    }
}

//==================================================
// Serialization
//
// A quantity is encoded as its canonical amount.
// Decoding goes through `from_base` so that
// family rounding rules hold for any payload.
//==================================================
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount)
    }
}
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::from_base)
    }
}

//==================================================
// Comparison
//==================================================
impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<U: Unit> Ord for Quantity<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.amount).total_cmp(&canonical(other.amount))
    }
}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.amount).hash(state);
    }
}

//==================================================
// Arithmetic operators
//==================================================
/// Add quantities
impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_base(self.amount + rhs.amount)
    }
}
impl<U: Unit> AddAssign for Quantity<U> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Subtract quantities
impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_base(self.amount - rhs.amount)
    }
}
impl<U: Unit> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Negate quantities
impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::raw(-self.amount)
    }
}

/// Scalar multiplication
impl<U: Unit, N: AsPrimitive<f64>> Mul<N> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: N) -> Self::Output {
        Self::from_base(self.amount * rhs.as_())
    }
}
impl<U: Unit, N: AsPrimitive<f64>> MulAssign<N> for Quantity<U> {
    fn mul_assign(&mut self, rhs: N) {
        *self = *self * rhs;
    }
}

/// Divide by scalar
impl<U: Unit, N: AsPrimitive<f64>> Div<N> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: N) -> Self::Output {
        Self::from_base(self.amount / rhs.as_())
    }
}
impl<U: Unit, N: AsPrimitive<f64>> DivAssign<N> for Quantity<U> {
    fn div_assign(&mut self, rhs: N) {
        *self = *self / rhs;
    }
}

// scalar * quantity
macro_rules! scalar_mul {
    ($($type: ident),*) => {
        $(
            impl<U: Unit> Mul<Quantity<U>> for $type {
                type Output = Quantity<U>;

                fn mul(self, rhs: Quantity<U>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}
scalar_mul!(f64, f32, i64, i32, u64, u32, usize);

impl<U: Unit> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}
impl<'a, U: Unit> Sum<&'a Quantity<U>> for Quantity<U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

//==================================================
// Unit tests
//==================================================
#[cfg(test)]
mod test_quantity {
    use std::{
        collections::HashSet,
        hash::{DefaultHasher, Hash, Hasher},
    };

    use crate::mass::{Mass, MassUnit};

    use super::*;

    #[test]
    fn test_of_and_in_unit() {
        let q = Quantity::of(2.5, MassUnit::Kilogram);
        assert_eq!(q.amount(), 2_500_000.0);
        assert_eq!(q.in_unit(MassUnit::Gram), 2500.0);
        assert_eq!(q.in_unit(MassUnit::Ton), 0.0025);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Mass::default(), Mass::ZERO);
        assert_eq!(Mass::default().amount(), 0.0);
    }

    #[test]
    /// Zero compares and hashes the same regardless of sign.
    fn test_signed_zero() {
        let positive = Mass::gram(0.0);
        let negative = -positive;
        assert_eq!(positive, negative);
        assert_eq!(hash(&positive), hash(&negative));
    }

    #[test]
    /// NaN quantities are equal to each other and sort after infinity.
    fn test_nan_total_order() {
        let nan = Mass::NAN;
        assert_eq!(nan, Mass::gram(f64::NAN));
        assert_eq!(hash(&nan), hash(&(Mass::ZERO / 0)));
        assert!(nan > Mass::INFINITY);
        assert!(Mass::NEG_INFINITY < Mass::MIN);
        assert!(Mass::MAX < Mass::INFINITY);
    }

    #[test]
    fn test_hash_set_dedup() {
        let set: HashSet<Mass> = [Mass::gram(1000), Mass::kilogram(1), Mass::milligram(1e6)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_sort() {
        let mut masses = vec![Mass::kilogram(1), Mass::gram(-3), Mass::milligram(7)];
        masses.sort();
        assert_eq!(
            masses,
            vec![Mass::gram(-3), Mass::milligram(7), Mass::kilogram(1)]
        );
    }

    #[test]
    fn test_approx_eq() {
        let parsed = Mass::parse("0.3 g").expect("valid mass");
        assert!(parsed.approx_eq(&(Mass::gram(0.1) + Mass::gram(0.2))));
        assert!(!Mass::gram(1).approx_eq(&Mass::gram(1.1)));
    }

    #[test]
    fn test_abs() {
        assert_eq!(Mass::gram(-4).abs(), Mass::gram(4));
    }

    #[test]
    fn test_human_unit() {
        assert_eq!(Mass::gram(999).human_unit(), MassUnit::Gram);
        assert_eq!(Mass::gram(1000).human_unit(), MassUnit::Kilogram);
        assert_eq!(Mass::NAN.human_unit(), MassUnit::Milligram);
    }

    #[test]
    fn test_nan_to_human() {
        assert_eq!(Mass::NAN.to_human(), "NaN mg");
    }

    fn hash<T: Hash>(val: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        val.hash(&mut hasher);
        hasher.finish()
    }
}
