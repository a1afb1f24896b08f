use crate::error::CareerError;
use serde::{Deserialize, Serialize};

/// MotoGP bike manufacturers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manufacturer {
    Ducati,
    Yamaha,
    Honda,
    Suzuki,
    Kawasaki,
}

impl Manufacturer {
    pub fn brand(&self) -> &'static str {
        match self {
            Manufacturer::Ducati => "Ducati",
            Manufacturer::Yamaha => "Yamaha",
            Manufacturer::Honda => "Honda",
            Manufacturer::Suzuki => "Suzuki",
            Manufacturer::Kawasaki => "Kawasaki",
        }
    }
}

/// Performance attributes of a bike, each in 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BikeStats {
    pub top_speed: u8,
    pub acceleration: u8,
    pub handling: u8,
}

impl BikeStats {
    pub fn new(top_speed: u8, acceleration: u8, handling: u8) -> Result<Self, CareerError> {
        for (attribute, value) in [
            ("top_speed", top_speed),
            ("acceleration", acceleration),
            ("handling", handling),
        ] {
            if !(1..=100).contains(&value) {
                return Err(CareerError::AttributeOutOfRange {
                    attribute,
                    value: i64::from(value),
                });
            }
        }
        Ok(BikeStats {
            top_speed,
            acceleration,
            handling,
        })
    }

    pub fn total(&self) -> u32 {
        u32::from(self.top_speed) + u32::from(self.acceleration) + u32::from(self.handling)
    }

    pub fn average(&self) -> f64 {
        f64::from(self.total()) / 3.0
    }
}

/// A team's bike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub manufacturer: Manufacturer,
    pub model: String,
    pub stats: BikeStats,
}

impl Bike {
    pub fn new(
        manufacturer: Manufacturer,
        model: impl Into<String>,
        stats: BikeStats,
    ) -> Result<Self, CareerError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(CareerError::EmptyName);
        }
        Ok(Bike {
            manufacturer,
            model,
            stats,
        })
    }

    pub fn description(&self) -> String {
        format!(
            "{} {} - Spd: {} | Acc: {} | Hnd: {}",
            self.manufacturer.brand(),
            self.model,
            self.stats.top_speed,
            self.stats.acceleration,
            self.stats.handling
        )
    }
}
