//! A flat builder with no shared base
//!
//! Nothing is inherited here, so every setter is written out by hand. This
//! is the alternative to [`ProductBuilder`](crate::ProductBuilder) when a
//! product has no family to share chaining with.

use crate::builder::required;
use crate::error::TypeKitError;
use tracing::debug;

/// Calories per gram of fat
const FAT_CALORIES_PER_GRAM: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutritionFacts {
    serving_size: u32,
    servings: u32,
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFacts {
    /// Starts a builder with every field unset
    pub fn builder() -> NutritionFactsBuilder {
        NutritionFactsBuilder::default()
    }

    /// Serving size in millilitres
    pub fn serving_size(&self) -> u32 {
        self.serving_size
    }

    /// Servings per container
    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Calories per serving
    pub fn calories(&self) -> u32 {
        self.calories
    }

    /// Fat in grams per serving
    pub fn fat(&self) -> u32 {
        self.fat
    }

    /// Sodium in milligrams per serving
    pub fn sodium(&self) -> u32 {
        self.sodium
    }

    /// Carbohydrate in grams per serving
    pub fn carbohydrate(&self) -> u32 {
        self.carbohydrate
    }
}

/// Builder for [`NutritionFacts`]
///
/// `serving_size` and `servings` are required; everything else defaults to 0.
#[derive(Debug, Clone, Default)]
pub struct NutritionFactsBuilder {
    serving_size: Option<u32>,
    servings: Option<u32>,
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFactsBuilder {
    /// Sets the required serving size, in millilitres
    pub fn serving_size(mut self, ml: u32) -> Self {
        self.serving_size = Some(ml);
        self
    }

    /// Sets the required number of servings per container
    pub fn servings(mut self, count: u32) -> Self {
        self.servings = Some(count);
        self
    }

    /// Sets the calories per serving
    pub fn calories(mut self, kcal: u32) -> Self {
        self.calories = kcal;
        self
    }

    /// Sets the fat in grams per serving
    pub fn fat(mut self, grams: u32) -> Self {
        self.fat = grams;
        self
    }

    /// Sets the sodium in milligrams per serving
    pub fn sodium(mut self, mg: u32) -> Self {
        self.sodium = mg;
        self
    }

    /// Sets the carbohydrate in grams per serving
    pub fn carbohydrate(mut self, grams: u32) -> Self {
        self.carbohydrate = grams;
        self
    }

    /// Validates the collected values and produces the facts
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if `serving_size` or `servings` was never set
    /// - `InvariantViolation` if either of them is zero, or if the calories
    ///   implied by the fat exceed the stated calories
    pub fn build(self) -> Result<NutritionFacts, TypeKitError> {
        let serving_size = required(self.serving_size, "serving_size")?;
        let servings = required(self.servings, "servings")?;

        if serving_size == 0 {
            return Err(TypeKitError::invariant(
                "serving_size must be positive",
                "got 0",
            ));
        }
        if servings == 0 {
            return Err(TypeKitError::invariant("servings must be positive", "got 0"));
        }

        if self.calories > 0 && self.fat > 0 {
            let from_fat = self.fat.saturating_mul(FAT_CALORIES_PER_GRAM);
            if from_fat > self.calories {
                return Err(TypeKitError::invariant(
                    "calories from fat cannot exceed total calories",
                    format!("{} from fat > {} total", from_fat, self.calories),
                ));
            }
        }

        let facts = NutritionFacts {
            serving_size,
            servings,
            calories: self.calories,
            fat: self.fat,
            sodium: self.sodium,
            carbohydrate: self.carbohydrate,
        };
        debug!(?facts, "built nutrition facts");
        Ok(facts)
    }
}
