//! Data models
//!
//! Plain-data types supplied by collaborators; read-only to this core.

mod checkin;
mod entry;
mod food;
mod goals;
mod profile;

pub use checkin::{CheckInMeasurement, MeasurementField};
pub use entry::{FoodEntry, FoodEntryMeal, MealSlot};
pub use food::{Food, FoodVariant};
pub use goals::{Goals, DEFAULT_MEAL_PERCENTAGE};
pub use profile::NutrientProfile;
