use num_traits::AsPrimitive;

use crate::{quantity::Quantity, unit::Unit};

pub const MILLIGRAM_FACTOR: f64 = 1.0;
pub const GRAM_FACTOR: f64 = 1_000.0;
pub const KILOGRAM_FACTOR: f64 = 1_000_000.0;
pub const TON_FACTOR: f64 = 1_000_000_000.0;

/// Units of mass, measured against the milligram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Milligram,
    Gram,
    Kilogram,
    Ton,
}

impl Unit for MassUnit {
    const FAMILY: &'static str = "mass";
    const BASE: Self = MassUnit::Milligram;
    const DESCENDING: &'static [Self] = &[
        MassUnit::Ton,
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Milligram,
    ];

    fn factor(self) -> f64 {
        match self {
            MassUnit::Milligram => MILLIGRAM_FACTOR,
            MassUnit::Gram => GRAM_FACTOR,
            MassUnit::Kilogram => KILOGRAM_FACTOR,
            MassUnit::Ton => TON_FACTOR,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            MassUnit::Milligram => "mg",
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Ton => "ton",
        }
    }
}

/// A quantity of mass, stored in milligrams.
pub type Mass = Quantity<MassUnit>;

impl Quantity<MassUnit> {
    pub fn milligram<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, MassUnit::Milligram)
    }

    pub fn gram<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, MassUnit::Gram)
    }

    pub fn kilogram<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, MassUnit::Kilogram)
    }

    pub fn ton<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, MassUnit::Ton)
    }

    pub fn in_milligram(&self) -> f64 {
        self.in_unit(MassUnit::Milligram)
    }

    pub fn in_gram(&self) -> f64 {
        self.in_unit(MassUnit::Gram)
    }

    pub fn in_kilogram(&self) -> f64 {
        self.in_unit(MassUnit::Kilogram)
    }

    pub fn in_ton(&self) -> f64 {
        self.in_unit(MassUnit::Ton)
    }
}
