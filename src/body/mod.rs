//! Body composition estimation
//!
//! Two selectable, mutually exclusive body-fat formulas: a BMI-based
//! estimate and the US Navy circumference method. Unlike the aggregation
//! path, this is the one place the core enforces a required-field contract;
//! a failure carries a single human-readable message and no numeric result.

mod history;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use history::{
    estimate_from_check_in, resolve_inputs, MeasurementHistory, ResolvedInputs,
};

/// Subject gender, as the two formulas branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// The selected estimation formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimationMethod {
    Bmi,
    Navy,
}

/// Validation failure for a body-fat estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyCompositionError {
    /// The BMI method is missing part of its required input set.
    #[error("BMI body fat calculation requires weight, height, age, and gender")]
    BmiInputs,

    /// The circumference method is missing specific fields.
    #[error("circumference body fat calculation is missing: {}", .0.join(", "))]
    NavyInputs(Vec<&'static str>),

    /// Measurements are present but outside the formula's domain.
    #[error("circumference measurements out of range: {0}")]
    NavyOutOfRange(&'static str),
}

/// Body-fat percentage from BMI (Deurenberg estimate).
///
/// Requires weight, height, a non-zero age, and gender; an age of 0 means
/// the birth date is unknown and fails validation rather than producing a
/// silently wrong number. The result is rounded to two decimals.
pub fn calculate_body_fat_bmi(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: Option<f64>,
    gender: Option<Gender>,
) -> Result<f64, BodyCompositionError> {
    let (weight, height, age, gender) = match (weight_kg, height_cm, age_years, gender) {
        (Some(w), Some(h), Some(a), Some(g))
            if w.is_finite() && w > 0.0 && h.is_finite() && h > 0.0 && a.is_finite() && a > 0.0 =>
        {
            (w, h, a, g)
        }
        _ => return Err(BodyCompositionError::BmiInputs),
    };

    let height_m = height / 100.0;
    let bmi = weight / (height_m * height_m);
    let sex = match gender {
        Gender::Male => 1.0,
        Gender::Female => 0.0,
    };

    Ok(round2(1.20 * bmi + 0.23 * age - 10.8 * sex - 5.4))
}

/// Body-fat percentage from the US Navy circumference method.
///
/// Hips is required only for female subjects; its absence never blocks a
/// male computation. The result is rounded to two decimals.
pub fn calculate_body_fat_navy(
    gender: Option<Gender>,
    height_cm: Option<f64>,
    waist_cm: Option<f64>,
    neck_cm: Option<f64>,
    hips_cm: Option<f64>,
) -> Result<f64, BodyCompositionError> {
    let gender = gender.ok_or(BodyCompositionError::NavyInputs(vec!["gender"]))?;

    let mut missing = Vec::new();
    let height = required(height_cm, "height", &mut missing);
    let waist = required(waist_cm, "waist", &mut missing);
    let neck = required(neck_cm, "neck", &mut missing);
    let hips = match gender {
        Gender::Female => required(hips_cm, "hips", &mut missing),
        Gender::Male => 0.0,
    };
    if !missing.is_empty() {
        return Err(BodyCompositionError::NavyInputs(missing));
    }

    let pct = match gender {
        Gender::Male => {
            let girth = waist - neck;
            if girth <= 0.0 {
                return Err(BodyCompositionError::NavyOutOfRange(
                    "waist must exceed neck",
                ));
            }
            495.0 / (1.0324 - 0.19077 * girth.log10() + 0.15456 * height.log10()) - 450.0
        }
        Gender::Female => {
            let girth = waist + hips - neck;
            if girth <= 0.0 {
                return Err(BodyCompositionError::NavyOutOfRange(
                    "waist plus hips must exceed neck",
                ));
            }
            495.0 / (1.29579 - 0.35004 * girth.log10() + 0.22100 * height.log10()) - 450.0
        }
    };

    if !pct.is_finite() {
        return Err(BodyCompositionError::NavyOutOfRange(
            "measurements produce no valid estimate",
        ));
    }

    Ok(round2(pct))
}

fn required(value: Option<f64>, name: &'static str, missing: &mut Vec<&'static str>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => {
            missing.push(name);
            0.0
        }
    }
}

/// Round to two decimal places for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        assert_eq!(Gender::from_str("male"), Some(Gender::Male));
        assert_eq!(Gender::from_str("F"), Some(Gender::Female));
        assert_eq!(Gender::from_str("other"), None);
        assert_eq!(Gender::Male.as_str(), "male");
        assert_eq!(Gender::Female.as_str(), "female");
    }

    #[test]
    fn test_bmi_method_known_value() {
        // 80 kg, 180 cm -> BMI 24.69; male, 30 years
        // 1.20 * 24.69 + 0.23 * 30 - 10.8 - 5.4 = 20.33
        let pct =
            calculate_body_fat_bmi(Some(80.0), Some(180.0), Some(30.0), Some(Gender::Male))
                .unwrap();
        assert!((pct - 20.33).abs() < 0.01, "pct = {pct}");
    }

    #[test]
    fn test_bmi_female_differs_from_male() {
        let male =
            calculate_body_fat_bmi(Some(70.0), Some(170.0), Some(40.0), Some(Gender::Male))
                .unwrap();
        let female =
            calculate_body_fat_bmi(Some(70.0), Some(170.0), Some(40.0), Some(Gender::Female))
                .unwrap();
        assert!((female - male - 10.8).abs() < 0.01);
    }

    #[test]
    fn test_bmi_age_zero_fails_validation() {
        let result =
            calculate_body_fat_bmi(Some(80.0), Some(180.0), Some(0.0), Some(Gender::Male));
        assert_eq!(result, Err(BodyCompositionError::BmiInputs));
    }

    #[test]
    fn test_bmi_missing_input_names_full_set() {
        let err = calculate_body_fat_bmi(None, Some(180.0), Some(30.0), Some(Gender::Male))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("weight, height, age, and gender"), "{message}");
    }

    #[test]
    fn test_navy_male_typical_range() {
        let pct = calculate_body_fat_navy(
            Some(Gender::Male),
            Some(180.0),
            Some(85.0),
            Some(40.0),
            None,
        )
        .unwrap();
        assert!(pct > 10.0 && pct < 30.0, "pct = {pct}");
    }

    #[test]
    fn test_navy_male_without_hips_computes() {
        // Hips must never block a male computation.
        assert!(calculate_body_fat_navy(
            Some(Gender::Male),
            Some(175.0),
            Some(90.0),
            Some(38.0),
            None,
        )
        .is_ok());
    }

    #[test]
    fn test_navy_female_without_hips_fails() {
        let err = calculate_body_fat_navy(
            Some(Gender::Female),
            Some(165.0),
            Some(75.0),
            Some(33.0),
            None,
        )
        .unwrap_err();
        assert_eq!(err, BodyCompositionError::NavyInputs(vec!["hips"]));
        assert!(err.to_string().contains("hips"));
    }

    #[test]
    fn test_navy_female_with_hips_computes() {
        let pct = calculate_body_fat_navy(
            Some(Gender::Female),
            Some(165.0),
            Some(75.0),
            Some(33.0),
            Some(95.0),
        )
        .unwrap();
        assert!(pct > 15.0 && pct < 40.0, "pct = {pct}");
    }

    #[test]
    fn test_navy_enumerates_all_missing_fields() {
        let err = calculate_body_fat_navy(Some(Gender::Female), None, Some(75.0), None, None)
            .unwrap_err();
        assert_eq!(
            err,
            BodyCompositionError::NavyInputs(vec!["height", "neck", "hips"])
        );
    }

    #[test]
    fn test_navy_waist_not_exceeding_neck_is_out_of_range() {
        let result = calculate_body_fat_navy(
            Some(Gender::Male),
            Some(180.0),
            Some(38.0),
            Some(40.0),
            None,
        );
        assert!(matches!(
            result,
            Err(BodyCompositionError::NavyOutOfRange(_))
        ));
    }

    #[test]
    fn test_results_rounded_to_two_decimals() {
        let pct = calculate_body_fat_navy(
            Some(Gender::Male),
            Some(180.0),
            Some(85.0),
            Some(40.0),
            None,
        )
        .unwrap();
        assert_eq!(pct, round2(pct));
    }
}
