use super::Nationality;
use crate::error::CareerError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A race circuit. Lengths are in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub name: String,
    pub country: Nationality,
    pub length: f64,
    pub corners: u32,
    pub main_straight: f64,
    pub difficulty: u8,
}

impl Circuit {
    pub fn new(
        name: impl Into<String>,
        country: Nationality,
        length: f64,
        corners: u32,
        main_straight: f64,
        difficulty: u8,
    ) -> Result<Self, CareerError> {
        let circuit = Circuit {
            name: name.into(),
            country,
            length,
            corners,
            main_straight,
            difficulty,
        };
        circuit.validate()?;
        Ok(circuit)
    }

    pub fn validate(&self) -> Result<(), CareerError> {
        if self.name.trim().is_empty() {
            return Err(CareerError::EmptyName);
        }
        if self.length <= 0.0 {
            return Err(CareerError::AttributeOutOfRange {
                attribute: "length",
                value: self.length as i64,
            });
        }
        if self.corners == 0 {
            return Err(CareerError::AttributeOutOfRange {
                attribute: "corners",
                value: 0,
            });
        }
        if self.main_straight <= 0.0 {
            return Err(CareerError::AttributeOutOfRange {
                attribute: "main_straight",
                value: self.main_straight as i64,
            });
        }
        if !(1..=100).contains(&self.difficulty) {
            return Err(CareerError::AttributeOutOfRange {
                attribute: "difficulty",
                value: i64::from(self.difficulty),
            });
        }
        Ok(())
    }

    pub fn description(&self) -> String {
        format!(
            "{} ({}) - {:.0}m, {} corners, straight: {:.0}m",
            self.name,
            self.country.name(),
            self.length,
            self.corners,
            self.main_straight
        )
    }
}

/// The fixed pool season calendars are drawn from (with replacement).
static CIRCUIT_POOL: Lazy<Vec<Circuit>> = Lazy::new(|| {
    vec![
        Circuit {
            name: "Circuito de Jerez".to_string(),
            country: Nationality::Spain,
            length: 4423.0,
            corners: 13,
            main_straight: 600.0,
            difficulty: 70,
        },
        Circuit {
            name: "Mugello Circuit".to_string(),
            country: Nationality::Italy,
            length: 5245.0,
            corners: 15,
            main_straight: 1141.0,
            difficulty: 90,
        },
        Circuit {
            name: "TT Circuit Assen".to_string(),
            country: Nationality::Netherlands,
            length: 4542.0,
            corners: 18,
            main_straight: 560.0,
            difficulty: 88,
        },
        Circuit {
            name: "Silverstone Circuit".to_string(),
            country: Nationality::UnitedKingdom,
            length: 5900.0,
            corners: 18,
            main_straight: 770.0,
            difficulty: 87,
        },
    ]
});

pub fn circuit_pool() -> &'static [Circuit] {
    &CIRCUIT_POOL
}

/// Looks a pool circuit up by name. Snapshot loading falls back to the first
/// pool entry for names it does not recognize.
pub fn pool_circuit_by_name(name: &str) -> Option<&'static Circuit> {
    CIRCUIT_POOL.iter().find(|c| c.name == name)
}
