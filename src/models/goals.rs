//! Daily goals model
//!
//! A daily calorie/macro target plus four independent per-slot percentage
//! weights. The weights are advisory and deliberately not constrained to
//! sum to 100.

use serde::{Deserialize, Serialize};

use super::MealSlot;

/// Default percentage weight for each canonical meal slot.
pub const DEFAULT_MEAL_PERCENTAGE: f64 = 25.0;

/// Daily nutrition goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub calories: f64,
    pub protein: f64,      // grams
    pub carbs: f64,        // grams
    pub fat: f64,          // grams
    pub dietary_fiber: f64, // grams
    pub water_goal_ml: f64,
    pub breakfast_percentage: f64,
    pub lunch_percentage: f64,
    pub dinner_percentage: f64,
    pub snacks_percentage: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            dietary_fiber: 0.0,
            water_goal_ml: 0.0,
            breakfast_percentage: DEFAULT_MEAL_PERCENTAGE,
            lunch_percentage: DEFAULT_MEAL_PERCENTAGE,
            dinner_percentage: DEFAULT_MEAL_PERCENTAGE,
            snacks_percentage: DEFAULT_MEAL_PERCENTAGE,
        }
    }
}

impl Goals {
    /// Percentage weight for a slot. User-defined slots carry no weight.
    pub fn percentage_for(&self, slot: &MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast_percentage,
            MealSlot::Lunch => self.lunch_percentage,
            MealSlot::Dinner => self.dinner_percentage,
            MealSlot::Snacks => self.snacks_percentage,
            MealSlot::Custom(_) => 0.0,
        }
    }
}
