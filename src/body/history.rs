//! Measurement history resolution
//!
//! The only asynchronous piece of the core. Each of the five possible
//! inputs is resolved independently: the most recent historical measurement
//! for that field wins, else the value currently on the check-in form. The
//! five fetches are mutually independent and run concurrently; a missing or
//! failed fetch means "no history for that field", never a fatal error.

use async_trait::async_trait;
use tracing::debug;

use crate::models::{CheckInMeasurement, MeasurementField};

use super::{
    calculate_body_fat_bmi, calculate_body_fat_navy, BodyCompositionError, EstimationMethod,
    Gender,
};

/// Check-in repository contract: the most recent measurement of one type.
///
/// Implementations translate their own failures into `None`; absence of
/// history for a field is not an error.
#[async_trait]
pub trait MeasurementHistory {
    async fn latest(&self, field: MeasurementField) -> Option<f64>;
}

/// The five inputs after per-field resolution, canonical units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedInputs {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub neck_cm: Option<f64>,
    pub hips_cm: Option<f64>,
}

impl ResolvedInputs {
    /// Form values only, for when history mode is off.
    pub fn from_form(form: &CheckInMeasurement) -> Self {
        Self {
            weight_kg: form.get(MeasurementField::Weight),
            height_cm: form.get(MeasurementField::Height),
            waist_cm: form.get(MeasurementField::Waist),
            neck_cm: form.get(MeasurementField::Neck),
            hips_cm: form.get(MeasurementField::Hips),
        }
    }
}

/// Resolve the five inputs, preferring history per field.
///
/// Resolution is per field, not all-or-nothing: a user may have recent
/// history for weight but not waist, and both paths combine.
pub async fn resolve_inputs<H>(form: &CheckInMeasurement, history: &H) -> ResolvedInputs
where
    H: MeasurementHistory + ?Sized,
{
    let (weight, height, waist, neck, hips) = tokio::join!(
        history.latest(MeasurementField::Weight),
        history.latest(MeasurementField::Height),
        history.latest(MeasurementField::Waist),
        history.latest(MeasurementField::Neck),
        history.latest(MeasurementField::Hips),
    );

    for (field, fetched) in [
        (MeasurementField::Weight, weight),
        (MeasurementField::Height, height),
        (MeasurementField::Waist, waist),
        (MeasurementField::Neck, neck),
        (MeasurementField::Hips, hips),
    ] {
        if fetched.is_none() {
            debug!(field = field.as_str(), "no history, using form value");
        }
    }

    ResolvedInputs {
        weight_kg: weight.or(form.weight_kg),
        height_cm: height.or(form.height_cm),
        waist_cm: waist.or(form.waist_cm),
        neck_cm: neck.or(form.neck_cm),
        hips_cm: hips.or(form.hips_cm),
    }
}

/// Resolve inputs and dispatch to the selected formula.
///
/// `history` of `None` uses the form values as entered. Age is a form-level
/// input (derived from birth date by the caller), not a tracked measurement.
pub async fn estimate_from_check_in(
    method: EstimationMethod,
    gender: Option<Gender>,
    age_years: Option<f64>,
    form: &CheckInMeasurement,
    history: Option<&dyn MeasurementHistory>,
) -> Result<f64, BodyCompositionError> {
    let inputs = match history {
        Some(history) => resolve_inputs(form, history).await,
        None => ResolvedInputs::from_form(form),
    };

    match method {
        EstimationMethod::Bmi => {
            calculate_body_fat_bmi(inputs.weight_kg, inputs.height_cm, age_years, gender)
        }
        EstimationMethod::Navy => calculate_body_fat_navy(
            gender,
            inputs.height_cm,
            inputs.waist_cm,
            inputs.neck_cm,
            inputs.hips_cm,
        ),
    }
}
