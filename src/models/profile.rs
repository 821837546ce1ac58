//! Shared nutrient profile data structure
//!
//! Used across food variants, logged entries, composed meals, and day totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A full nutrient profile.
///
/// Fixed fields carry fixed physical units (kcal, g, mg, mcg). A field that
/// was absent in the source record deserializes to 0, never to "missing".
/// The open per-installation nutrient set lives in `custom_nutrients`,
/// keyed by nutrient name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientProfile {
    pub calories: f64,            // kcal
    pub protein: f64,             // grams
    pub carbs: f64,               // grams
    pub fat: f64,                 // grams
    pub saturated_fat: f64,       // grams
    pub polyunsaturated_fat: f64, // grams
    pub monounsaturated_fat: f64, // grams
    pub trans_fat: f64,           // grams
    pub cholesterol: f64,         // milligrams
    pub sodium: f64,              // milligrams
    pub potassium: f64,           // milligrams
    pub dietary_fiber: f64,       // grams
    pub sugars: f64,              // grams
    pub vitamin_a: f64,           // micrograms
    pub vitamin_c: f64,           // milligrams
    pub calcium: f64,             // milligrams
    pub iron: f64,                // milligrams
    /// Hydration volume in milliliters, derived per entry (not scaled).
    pub water_ml: f64,
    /// Non-numeric classification (e.g. "low"), carried through unscaled.
    pub glycemic_index: Option<String>,
    /// User-defined nutrients, merged by key.
    pub custom_nutrients: BTreeMap<String, f64>,
}

impl NutrientProfile {
    /// The canonical empty profile: all fixed fields 0, empty custom map.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every fixed nutrient and every custom nutrient by a multiplier.
    ///
    /// The glycemic index is carried through unchanged; hydration volume is
    /// derived separately by the entry calculator and is not scaled here.
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            saturated_fat: self.saturated_fat * multiplier,
            polyunsaturated_fat: self.polyunsaturated_fat * multiplier,
            monounsaturated_fat: self.monounsaturated_fat * multiplier,
            trans_fat: self.trans_fat * multiplier,
            cholesterol: self.cholesterol * multiplier,
            sodium: self.sodium * multiplier,
            potassium: self.potassium * multiplier,
            dietary_fiber: self.dietary_fiber * multiplier,
            sugars: self.sugars * multiplier,
            vitamin_a: self.vitamin_a * multiplier,
            vitamin_c: self.vitamin_c * multiplier,
            calcium: self.calcium * multiplier,
            iron: self.iron * multiplier,
            water_ml: self.water_ml,
            glycemic_index: self.glycemic_index.clone(),
            custom_nutrients: self
                .custom_nutrients
                .iter()
                .map(|(name, value)| (name.clone(), value * multiplier))
                .collect(),
        }
    }

    /// Add another profile to this one.
    ///
    /// Fixed fields add element-wise; custom maps merge by key-sum, a key
    /// missing in either operand counting as 0. The glycemic index is a
    /// classification, not a quantity, so sums drop it.
    pub fn add(&self, other: &NutrientProfile) -> Self {
        let mut custom_nutrients = self.custom_nutrients.clone();
        for (name, value) in &other.custom_nutrients {
            *custom_nutrients.entry(name.clone()).or_insert(0.0) += value;
        }

        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            saturated_fat: self.saturated_fat + other.saturated_fat,
            polyunsaturated_fat: self.polyunsaturated_fat + other.polyunsaturated_fat,
            monounsaturated_fat: self.monounsaturated_fat + other.monounsaturated_fat,
            trans_fat: self.trans_fat + other.trans_fat,
            cholesterol: self.cholesterol + other.cholesterol,
            sodium: self.sodium + other.sodium,
            potassium: self.potassium + other.potassium,
            dietary_fiber: self.dietary_fiber + other.dietary_fiber,
            sugars: self.sugars + other.sugars,
            vitamin_a: self.vitamin_a + other.vitamin_a,
            vitamin_c: self.vitamin_c + other.vitamin_c,
            calcium: self.calcium + other.calcium,
            iron: self.iron + other.iron,
            water_ml: self.water_ml + other.water_ml,
            glycemic_index: None,
            custom_nutrients,
        }
    }

    /// Coerce any non-finite value (a bad stored number upstream) to 0.
    pub fn sanitize(mut self) -> Self {
        for value in [
            &mut self.calories,
            &mut self.protein,
            &mut self.carbs,
            &mut self.fat,
            &mut self.saturated_fat,
            &mut self.polyunsaturated_fat,
            &mut self.monounsaturated_fat,
            &mut self.trans_fat,
            &mut self.cholesterol,
            &mut self.sodium,
            &mut self.potassium,
            &mut self.dietary_fiber,
            &mut self.sugars,
            &mut self.vitamin_a,
            &mut self.vitamin_c,
            &mut self.calcium,
            &mut self.iron,
            &mut self.water_ml,
        ] {
            if !value.is_finite() {
                *value = 0.0;
            }
        }
        self.custom_nutrients
            .values_mut()
            .for_each(|v| {
                if !v.is_finite() {
                    *v = 0.0;
                }
            });
        self
    }
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile::add(&self, &other)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, p| acc + p)
    }
}
