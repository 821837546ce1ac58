//! Diary entry models
//!
//! Logged records are created by a logging collaborator and never mutated
//! here; this core only reads them and produces derived profiles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Food, FoodVariant, NutrientProfile};

/// The meal grouping an entry belongs to for a given day.
///
/// Four canonical slots plus free-form user-defined categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    #[serde(untagged)]
    Custom(String),
}

impl MealSlot {
    pub fn as_str(&self) -> &str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
            MealSlot::Custom(name) => name,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => MealSlot::Breakfast,
            "lunch" => MealSlot::Lunch,
            "dinner" => MealSlot::Dinner,
            "snacks" | "snack" => MealSlot::Snacks,
            _ => MealSlot::Custom(s.to_string()),
        }
    }

    /// Display name: canonical slots get a fixed name, user-defined slots
    /// pass through their own identifier unchanged.
    pub fn display_name(&self) -> &str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
            MealSlot::Custom(name) => name,
        }
    }
}

/// A logged food entry.
///
/// `snapshot` holds nutrient values frozen at log time; when present it
/// insulates history from later catalog edits and takes priority over the
/// live variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub quantity: f64,
    pub unit: String,
    pub meal_slot: MealSlot,
    pub entry_date: NaiveDate,
    pub snapshot: Option<NutrientProfile>,
    pub variant: Option<FoodVariant>,
    pub food: Option<Food>,
}

/// A logged composed meal.
///
/// `nutrition` was fully scaled by the logged quantity when the meal was
/// composed; it is summed as-is and never rescaled. `quantity` is kept for
/// display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntryMeal {
    pub name: String,
    pub meal_slot: MealSlot,
    pub entry_date: NaiveDate,
    pub quantity: f64,
    pub nutrition: NutrientProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_slot_round_trip() {
        assert_eq!(MealSlot::from_str("breakfast"), MealSlot::Breakfast);
        assert_eq!(MealSlot::from_str("Snack"), MealSlot::Snacks);
        assert_eq!(MealSlot::Breakfast.as_str(), "breakfast");
    }

    #[test]
    fn test_custom_slot_passes_through() {
        let slot = MealSlot::from_str("second_breakfast");
        assert_eq!(slot, MealSlot::Custom("second_breakfast".to_string()));
        assert_eq!(slot.as_str(), "second_breakfast");
        assert_eq!(slot.display_name(), "second_breakfast");
    }

    #[test]
    fn test_canonical_display_names() {
        assert_eq!(MealSlot::Lunch.display_name(), "Lunch");
        assert_eq!(MealSlot::Snacks.display_name(), "Snacks");
    }
}
