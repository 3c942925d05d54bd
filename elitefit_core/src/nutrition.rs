//! Daily diet tracking.
//!
//! The diet page groups meals into breakfast, lunch, and dinner and compares
//! the day's nutrient totals against the configured targets. The default day
//! mirrors the sample plan shown to new members.

use crate::config::TargetsConfig;
use crate::{DietDay, Meal, MealSlot};

/// Summed nutrients over a set of meals
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NutrientTotals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl NutrientTotals {
    fn add(&mut self, meal: &Meal) {
        self.calories += meal.calories;
        self.protein_g += meal.protein_g;
        self.carbs_g += meal.carbs_g;
        self.fat_g += meal.fat_g;
    }
}

/// Progress toward the day's nutrient targets, each clamped to [0, 100]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NutrientProgress {
    pub calories_percent: f64,
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
}

impl DietDay {
    /// Meals in a given slot
    pub fn meals(&self, slot: MealSlot) -> &[Meal] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Add a meal to a slot
    pub fn add_meal(&mut self, slot: MealSlot, meal: Meal) {
        match slot {
            MealSlot::Breakfast => self.breakfast.push(meal),
            MealSlot::Lunch => self.lunch.push(meal),
            MealSlot::Dinner => self.dinner.push(meal),
        }
    }

    /// Totals for one slot
    pub fn slot_totals(&self, slot: MealSlot) -> NutrientTotals {
        let mut totals = NutrientTotals::default();
        for meal in self.meals(slot) {
            totals.add(meal);
        }
        totals
    }

    /// Totals across the whole day
    pub fn day_totals(&self) -> NutrientTotals {
        let mut totals = NutrientTotals::default();
        for slot in MealSlot::ALL {
            for meal in self.meals(slot) {
                totals.add(meal);
            }
        }
        totals
    }
}

/// Compare a day's totals to the configured targets
pub fn progress_toward(totals: &NutrientTotals, targets: &TargetsConfig) -> NutrientProgress {
    NutrientProgress {
        calories_percent: clamped_percent(totals.calories, targets.calories_kcal),
        protein_percent: clamped_percent(totals.protein_g, targets.protein_g),
        carbs_percent: clamped_percent(totals.carbs_g, targets.carbs_g),
        fat_percent: clamped_percent(totals.fat_g, targets.fat_g),
    }
}

fn clamped_percent(value: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    ((value as f64 / target as f64) * 100.0).min(100.0)
}

/// The sample diet day shown to members without a custom plan
pub fn default_diet_day() -> DietDay {
    DietDay {
        breakfast: vec![
            meal("Oatmeal with Berries", 350, 12, 48, 8),
            meal("Green Smoothie", 280, 15, 35, 5),
        ],
        lunch: vec![
            meal("Chicken Breast with Rice", 550, 45, 55, 12),
            meal("Broccoli Salad", 150, 8, 18, 3),
        ],
        dinner: vec![
            meal("Grilled Salmon", 420, 38, 0, 28),
            meal("Sweet Potato", 180, 4, 41, 1),
        ],
    }
}

fn meal(name: &str, calories: u32, protein_g: u32, carbs_g: u32, fat_g: u32) -> Meal {
    Meal {
        name: name.into(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}
