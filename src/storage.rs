use num_traits::AsPrimitive;

use crate::{quantity::Quantity, unit::Unit};

pub const BYTE_FACTOR: f64 = 1.0;
pub const KILO_FACTOR: f64 = (1u64 << 10) as f64;
pub const MEGA_FACTOR: f64 = (1u64 << 20) as f64;
pub const GIGA_FACTOR: f64 = (1u64 << 30) as f64;
pub const TERA_FACTOR: f64 = (1u64 << 40) as f64;
pub const PETA_FACTOR: f64 = (1u64 << 50) as f64;
pub const EXA_FACTOR: f64 = (1u64 << 60) as f64;

/// Units of digital storage, scaled by powers of 1024.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageUnit {
    Byte,
    KiloByte,
    MegaByte,
    GigaByte,
    TeraByte,
    PetaByte,
    ExaByte,
}

impl Unit for StorageUnit {
    const FAMILY: &'static str = "storage";
    const BASE: Self = StorageUnit::Byte;
    const DESCENDING: &'static [Self] = &[
        StorageUnit::ExaByte,
        StorageUnit::PetaByte,
        StorageUnit::TeraByte,
        StorageUnit::GigaByte,
        StorageUnit::MegaByte,
        StorageUnit::KiloByte,
        StorageUnit::Byte,
    ];

    fn factor(self) -> f64 {
        match self {
            StorageUnit::Byte => BYTE_FACTOR,
            StorageUnit::KiloByte => KILO_FACTOR,
            StorageUnit::MegaByte => MEGA_FACTOR,
            StorageUnit::GigaByte => GIGA_FACTOR,
            StorageUnit::TeraByte => TERA_FACTOR,
            StorageUnit::PetaByte => PETA_FACTOR,
            StorageUnit::ExaByte => EXA_FACTOR,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            StorageUnit::Byte => "B",
            StorageUnit::KiloByte => "KB",
            StorageUnit::MegaByte => "MB",
            StorageUnit::GigaByte => "GB",
            StorageUnit::TeraByte => "TB",
            StorageUnit::PetaByte => "PB",
            StorageUnit::ExaByte => "EB",
        }
    }

    /// Storage is counted in whole bytes and whole units, truncated toward zero.
    #[inline]
    fn quantize(value: f64) -> f64 {
        value.trunc()
    }
}

/// A quantity of digital storage, stored in whole bytes.
pub type Storage = Quantity<StorageUnit>;

impl Quantity<StorageUnit> {
    pub fn bytes<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, StorageUnit::Byte)
    }

    pub fn kilobytes<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, StorageUnit::KiloByte)
    }

    pub fn megabytes<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, StorageUnit::MegaByte)
    }

    pub fn gigabytes<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, StorageUnit::GigaByte)
    }

    pub fn terabytes<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, StorageUnit::TeraByte)
    }

    pub fn petabytes<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, StorageUnit::PetaByte)
    }

    pub fn exabytes<N: AsPrimitive<f64>>(value: N) -> Self {
        Self::of(value, StorageUnit::ExaByte)
    }

    pub fn in_bytes(&self) -> f64 {
        self.in_unit(StorageUnit::Byte)
    }

    pub fn in_kilobytes(&self) -> f64 {
        self.in_unit(StorageUnit::KiloByte)
    }

    pub fn in_megabytes(&self) -> f64 {
        self.in_unit(StorageUnit::MegaByte)
    }

    pub fn in_gigabytes(&self) -> f64 {
        self.in_unit(StorageUnit::GigaByte)
    }

    pub fn in_terabytes(&self) -> f64 {
        self.in_unit(StorageUnit::TeraByte)
    }

    pub fn in_petabytes(&self) -> f64 {
        self.in_unit(StorageUnit::PetaByte)
    }

    pub fn in_exabytes(&self) -> f64 {
        self.in_unit(StorageUnit::ExaByte)
    }
}
