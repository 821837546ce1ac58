//! Food catalog models
//!
//! Variants carry nutrient values per a reference serving size. The catalog
//! is owned by a collaborator; this core only reads it.

use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// A food variant: nutrient values expressed per `serving_size` of
/// `serving_unit` (e.g. per 100 g).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodVariant {
    pub serving_size: f64,
    pub serving_unit: String,
    pub nutrition: NutrientProfile,
}

/// A catalog food with its default variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub default_variant: Option<FoodVariant>,
}
