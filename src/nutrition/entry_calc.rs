//! Entry nutrition resolution and scaling
//!
//! Resolves one logged food entry to a full nutrient profile. An entry has
//! two possible sources of truth: nutrient values frozen onto the entry at
//! log time (a snapshot), or the live catalog variant. The choice is made
//! once, up front, as an explicit tagged source.

use tracing::debug;

use crate::models::{FoodEntry, FoodVariant, NutrientProfile};
use crate::units::is_hydration_unit;

/// Reference serving size assumed when a variant's serving size is missing
/// or zero: nutrient values are read as per-100-units.
pub const DEFAULT_REFERENCE_SERVING: f64 = 100.0;

/// The source of truth chosen for an entry's nutrient values.
#[derive(Debug, Clone, PartialEq)]
pub enum NutritionSource<'a> {
    /// Values frozen at log time; entry-level direct values, never rescaled.
    Snapshot(&'a NutrientProfile),
    /// A live catalog variant; per-reference-size rates, scaled by quantity.
    LiveVariant(&'a FoodVariant),
    /// Nothing to resolve against; degrades to an all-zero profile.
    Missing,
}

/// Pick the source of truth for an entry.
///
/// A snapshot always wins so that later catalog edits do not retroactively
/// rewrite history. Otherwise the entry's own variant is used, then the
/// referenced food's default variant.
pub fn resolve_source(entry: &FoodEntry) -> NutritionSource<'_> {
    if let Some(snapshot) = &entry.snapshot {
        return NutritionSource::Snapshot(snapshot);
    }
    if let Some(variant) = &entry.variant {
        return NutritionSource::LiveVariant(variant);
    }
    if let Some(variant) = entry.food.as_ref().and_then(|f| f.default_variant.as_ref()) {
        return NutritionSource::LiveVariant(variant);
    }
    NutritionSource::Missing
}

/// Scale a variant's per-reference-size nutrient values to a logged quantity.
///
/// Every fixed and custom nutrient is multiplied by
/// `quantity / effective_serving_size`. Returns `None` for a quantity that
/// is zero, negative, or not a finite number.
pub fn calculate_nutrition(variant: &FoodVariant, quantity: f64) -> Option<NutrientProfile> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return None;
    }

    let ratio = quantity / effective_serving_size(variant);
    Some(variant.nutrition.clone().sanitize().scale(ratio))
}

/// Resolve a logged entry to its full nutrient profile.
///
/// Snapshots are used as direct values without rescaling; live variants are
/// scaled by the logged quantity. An entry with neither resolves to the
/// all-zero profile rather than an error, so a diary with partial data
/// stays usable. Hydration volume is derived from the entry's unit, outside
/// the generic scaling path.
pub fn calculate_food_entry_nutrition(entry: &FoodEntry) -> NutrientProfile {
    let mut profile = match resolve_source(entry) {
        NutritionSource::Snapshot(snapshot) => snapshot.clone().sanitize(),
        NutritionSource::LiveVariant(variant) => calculate_nutrition(variant, entry.quantity)
            .unwrap_or_else(|| {
                debug!(quantity = entry.quantity, "unusable entry quantity, degrading to zeros");
                NutrientProfile::zero()
            }),
        NutritionSource::Missing => {
            debug!("entry has no snapshot and no resolvable variant, degrading to zeros");
            NutrientProfile::zero()
        }
    };

    profile.water_ml = if is_hydration_unit(&entry.unit) {
        entry.quantity
    } else {
        0.0
    };

    profile
}

/// The denominator a variant's nutrient values are expressed against.
///
/// A missing or zero serving size falls back to [`DEFAULT_REFERENCE_SERVING`].
fn effective_serving_size(variant: &FoodVariant) -> f64 {
    if variant.serving_size.is_finite() && variant.serving_size > 0.0 {
        variant.serving_size
    } else {
        debug!(
            serving_size = variant.serving_size,
            "variant has no usable serving size, assuming per-{}", DEFAULT_REFERENCE_SERVING
        );
        DEFAULT_REFERENCE_SERVING
    }
}
