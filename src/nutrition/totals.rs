//! Meal and day aggregation
//!
//! Sums nutrient profiles across logged entries and composed meals, per meal
//! slot or per day. Composed meals were already scaled by their logged
//! quantity at composition time, so their profiles are summed verbatim;
//! rescaling them here would double-count.

use crate::models::{FoodEntry, FoodEntryMeal, MealSlot, NutrientProfile};

use super::entry_calc::calculate_food_entry_nutrition;

/// Total nutrition for one meal slot.
pub fn meal_totals(
    slot: &MealSlot,
    entries: &[FoodEntry],
    meals: &[FoodEntryMeal],
) -> NutrientProfile {
    let slot_entries: Vec<&FoodEntry> =
        entries.iter().filter(|e| &e.meal_slot == slot).collect();
    let slot_meals: Vec<&FoodEntryMeal> =
        meals.iter().filter(|m| &m.meal_slot == slot).collect();
    sum_profiles(&slot_entries, &slot_meals)
}

/// Total nutrition for a whole day.
pub fn day_totals(entries: &[FoodEntry], meals: &[FoodEntryMeal]) -> NutrientProfile {
    let all_entries: Vec<&FoodEntry> = entries.iter().collect();
    let all_meals: Vec<&FoodEntryMeal> = meals.iter().collect();
    sum_profiles(&all_entries, &all_meals)
}

fn sum_profiles(entries: &[&FoodEntry], meals: &[&FoodEntryMeal]) -> NutrientProfile {
    // Canonical empty profile, not a fold over nothing.
    if entries.is_empty() && meals.is_empty() {
        return NutrientProfile::zero();
    }

    let from_entries: NutrientProfile = entries
        .iter()
        .map(|e| calculate_food_entry_nutrition(e))
        .sum();

    // Composed meals are pre-scaled; summed as-is.
    meals
        .iter()
        .map(|m| m.nutrition.clone().sanitize())
        .fold(from_entries, |acc, n| acc + n)
}
