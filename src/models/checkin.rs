//! Check-in measurement models
//!
//! Body measurements are stored in canonical metric units (kilograms,
//! centimeters) regardless of the user's display-unit preference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The measurement fields a body-composition estimate can draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    Weight,
    Height,
    Waist,
    Neck,
    Hips,
}

impl MeasurementField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementField::Weight => "weight",
            MeasurementField::Height => "height",
            MeasurementField::Waist => "waist",
            MeasurementField::Neck => "neck",
            MeasurementField::Hips => "hips",
        }
    }
}

/// A per-date check-in record in canonical units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckInMeasurement {
    pub date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub neck_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub body_fat_pct: Option<f64>,
}

impl CheckInMeasurement {
    /// Read a field by name.
    pub fn get(&self, field: MeasurementField) -> Option<f64> {
        match field {
            MeasurementField::Weight => self.weight_kg,
            MeasurementField::Height => self.height_cm,
            MeasurementField::Waist => self.waist_cm,
            MeasurementField::Neck => self.neck_cm,
            MeasurementField::Hips => self.hips_cm,
        }
    }
}
