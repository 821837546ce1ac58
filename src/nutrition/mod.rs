//! Nutrition calculation module
//!
//! Entry resolution and scaling, meal/day aggregation, and per-meal goal
//! distribution. Everything here is synchronous, pure, and idempotent over
//! already-fetched collections.

pub mod entry_calc;
pub mod goals;
pub mod totals;

pub use entry_calc::{
    calculate_food_entry_nutrition, calculate_nutrition, resolve_source, NutritionSource,
    DEFAULT_REFERENCE_SERVING,
};
pub use goals::{get_meal_data, target_calories, MealData};
pub use totals::{day_totals, meal_totals};
