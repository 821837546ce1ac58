//! Per-meal goal distribution
//!
//! Derives a per-slot calorie target from the daily goal and that slot's
//! percentage weight. Each slot is computed in isolation against the same
//! daily total; the four weights are advisory and deliberately not
//! normalized to sum to 100.

use serde::Serialize;

use crate::models::{FoodEntry, FoodEntryMeal, Goals, MealSlot};

/// Everything the diary view needs to render one meal section.
#[derive(Debug, Clone, Serialize)]
pub struct MealData {
    pub name: String,
    pub slot: MealSlot,
    pub entries: Vec<FoodEntry>,
    pub meals: Vec<FoodEntryMeal>,
    pub target_calories: f64,
}

/// Build the diary-view data for one meal slot.
pub fn get_meal_data(
    slot: &MealSlot,
    entries: &[FoodEntry],
    meals: &[FoodEntryMeal],
    goals: &Goals,
) -> MealData {
    MealData {
        name: slot.display_name().to_string(),
        slot: slot.clone(),
        entries: entries
            .iter()
            .filter(|e| &e.meal_slot == slot)
            .cloned()
            .collect(),
        meals: meals
            .iter()
            .filter(|m| &m.meal_slot == slot)
            .cloned()
            .collect(),
        target_calories: target_calories(slot, goals),
    }
}

/// `daily calories × slot weight / 100`, independent per slot.
pub fn target_calories(slot: &MealSlot, goals: &Goals) -> f64 {
    goals.calories * goals.percentage_for(slot) / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::NutrientProfile;

    fn goals() -> Goals {
        Goals {
            calories: 2000.0,
            breakfast_percentage: 25.0,
            lunch_percentage: 40.0,
            dinner_percentage: 30.0,
            snacks_percentage: 20.0, // sums to 115, on purpose
            ..Default::default()
        }
    }

    #[test]
    fn test_targets_computed_independently_without_normalization() {
        let g = goals();
        assert_eq!(target_calories(&MealSlot::Breakfast, &g), 500.0);
        assert_eq!(target_calories(&MealSlot::Lunch, &g), 800.0);
        assert_eq!(target_calories(&MealSlot::Dinner, &g), 600.0);
        assert_eq!(target_calories(&MealSlot::Snacks, &g), 400.0);
    }

    #[test]
    fn test_custom_slot_has_no_target() {
        let g = goals();
        assert_eq!(
            target_calories(&MealSlot::Custom("tea".to_string()), &g),
            0.0
        );
    }

    #[test]
    fn test_meal_data_names_and_filtering() {
        let g = goals();
        let entries = vec![
            FoodEntry {
                quantity: 100.0,
                unit: "g".to_string(),
                meal_slot: MealSlot::Lunch,
                entry_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                snapshot: Some(NutrientProfile::zero()),
                variant: None,
                food: None,
            },
            FoodEntry {
                quantity: 50.0,
                unit: "g".to_string(),
                meal_slot: MealSlot::Dinner,
                entry_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                snapshot: Some(NutrientProfile::zero()),
                variant: None,
                food: None,
            },
        ];

        let lunch = get_meal_data(&MealSlot::Lunch, &entries, &[], &g);
        assert_eq!(lunch.name, "Lunch");
        assert_eq!(lunch.entries.len(), 1);
        assert_eq!(lunch.target_calories, 800.0);

        let custom_slot = MealSlot::Custom("late night".to_string());
        let custom = get_meal_data(&custom_slot, &entries, &[], &g);
        assert_eq!(custom.name, "late night");
        assert!(custom.entries.is_empty());
    }
}
