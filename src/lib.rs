//! Nutrition aggregation and goal-distribution core
//!
//! Pure computation library for a food and fitness diary. Turns
//! already-fetched diary records (food entries, composed meals, goals,
//! check-in measurements) into nutrient totals, per-meal calorie targets,
//! and body-composition estimates. Persistence, transport, and display
//! formatting belong to the callers.

pub mod body;
pub mod models;
pub mod nutrition;
pub mod units;
