//! Unit conversion contract
//!
//! Conversions between canonical storage units and display units for weight,
//! body measurements, and energy, plus recognition of hydration units for
//! water tracking. Unit *selection* is a caller concern; this module only
//! converts.

use serde::{Deserialize, Serialize};

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453_592_37;
/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;
/// Kilojoules per kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Weight units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

/// Length units for body measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    Cm,
    Inches,
}

/// Energy units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    Kcal,
    Kj,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }
}

impl MeasurementUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementUnit::Cm => "cm",
            MeasurementUnit::Inches => "inches",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Some(MeasurementUnit::Cm),
            "in" | "inch" | "inches" => Some(MeasurementUnit::Inches),
            _ => None,
        }
    }
}

impl EnergyUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kj",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kcal" | "calorie" | "calories" => Some(EnergyUnit::Kcal),
            "kj" | "kilojoule" | "kilojoules" => Some(EnergyUnit::Kj),
            _ => None,
        }
    }
}

/// Convert a weight between kg and lbs.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kg, WeightUnit::Lbs) => value / KG_PER_LB,
        (WeightUnit::Lbs, WeightUnit::Kg) => value * KG_PER_LB,
        _ => value,
    }
}

/// Convert a body measurement between cm and inches.
pub fn convert_measurement(value: f64, from: MeasurementUnit, to: MeasurementUnit) -> f64 {
    match (from, to) {
        (MeasurementUnit::Cm, MeasurementUnit::Inches) => value / CM_PER_INCH,
        (MeasurementUnit::Inches, MeasurementUnit::Cm) => value * CM_PER_INCH,
        _ => value,
    }
}

/// Convert an energy value between kcal and kJ.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    match (from, to) {
        (EnergyUnit::Kcal, EnergyUnit::Kj) => value * KJ_PER_KCAL,
        (EnergyUnit::Kj, EnergyUnit::Kcal) => value / KJ_PER_KCAL,
        _ => value,
    }
}

/// Whether a logged entry unit counts toward hydration volume.
pub fn is_hydration_unit(unit: &str) -> bool {
    matches!(
        unit.trim().to_lowercase().as_str(),
        "ml" | "milliliter"
            | "milliliters"
            | "l"
            | "liter"
            | "liters"
            | "litre"
            | "litres"
            | "oz"
            | "fl oz"
            | "floz"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_weight() {
        assert!((convert_weight(1.0, WeightUnit::Lbs, WeightUnit::Kg) - KG_PER_LB).abs() < 1e-9);
        let round_trip = convert_weight(
            convert_weight(80.0, WeightUnit::Kg, WeightUnit::Lbs),
            WeightUnit::Lbs,
            WeightUnit::Kg,
        );
        assert!((round_trip - 80.0).abs() < 1e-9);
        assert_eq!(convert_weight(70.0, WeightUnit::Kg, WeightUnit::Kg), 70.0);
    }

    #[test]
    fn test_convert_measurement() {
        assert!(
            (convert_measurement(10.0, MeasurementUnit::Inches, MeasurementUnit::Cm) - 25.4).abs()
                < 1e-9
        );
        assert_eq!(
            convert_measurement(90.0, MeasurementUnit::Cm, MeasurementUnit::Cm),
            90.0
        );
    }

    #[test]
    fn test_convert_energy() {
        assert!((convert_energy(500.0, EnergyUnit::Kcal, EnergyUnit::Kj) - 2092.0).abs() < 1e-9);
        assert!((convert_energy(2092.0, EnergyUnit::Kj, EnergyUnit::Kcal) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(WeightUnit::from_str("LBS"), Some(WeightUnit::Lbs));
        assert_eq!(MeasurementUnit::from_str("inch"), Some(MeasurementUnit::Inches));
        assert_eq!(EnergyUnit::from_str("kJ"), Some(EnergyUnit::Kj));
        assert_eq!(WeightUnit::from_str("stone"), None);
    }

    #[test]
    fn test_hydration_units() {
        assert!(is_hydration_unit("ml"));
        assert!(is_hydration_unit("Liter"));
        assert!(is_hydration_unit("oz"));
        assert!(!is_hydration_unit("g"));
        assert!(!is_hydration_unit("serving"));
    }
}
