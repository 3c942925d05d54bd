//! Core domain types for the EliteFit member system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Body measurements and BMI results
//! - Activity log entries
//! - Health snapshots and daily diet
//! - Membership plans
//! - User profile and application settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Measurement and BMI Types
// ============================================================================

/// Unit convention for body measurements
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Centimeters and kilograms
    Metric,
    /// Inches and pounds
    Imperial,
}

/// A height/weight pair entered by the member at calculation time.
///
/// Constructed through [`Measurement::new`] or [`Measurement::from_raw`],
/// which reject missing, non-numeric, or non-positive values. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub height: f64,
    pub weight: f64,
    pub units: UnitSystem,
}

/// BMI band. Every non-negative BMI maps to exactly one category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Display label matching the result card
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// BMI band shown in the reference table
    pub fn reference_band(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Under 18.5",
            BmiCategory::NormalWeight => "18.5-24.9",
            BmiCategory::Overweight => "25-29.9",
            BmiCategory::Obese => "30+",
        }
    }

    /// Coaching text shown alongside the result
    pub fn recommendation(&self) -> &'static str {
        match self {
            BmiCategory::NormalWeight => {
                "Excellent! Keep up your fitness routine with 150 mins of cardio \
                 weekly and strength training 3x per week."
            }
            BmiCategory::Underweight => {
                "Focus on building lean muscle mass with progressive strength \
                 training and calorie-dense, nutritious foods."
            }
            BmiCategory::Overweight => {
                "Combine 30 mins of cardio 5x weekly with strength training 3x \
                 per week and a balanced diet."
            }
            BmiCategory::Obese => {
                "Consult with our professional trainers for a personalized \
                 fitness and nutrition plan tailored to your needs."
            }
        }
    }

    /// Fixed health score lookup. A function of the category only.
    pub fn health_score(&self) -> u8 {
        match self {
            BmiCategory::NormalWeight => 100,
            BmiCategory::Underweight => 60,
            BmiCategory::Overweight => 40,
            BmiCategory::Obese => 20,
        }
    }
}

/// Immutable result of one BMI computation.
///
/// A new computation produces a new result; prior results are never mutated.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to one fractional digit
    pub bmi: f64,
    pub category: BmiCategory,
    /// Position of `bmi` on the 0-50 display scale, clamped to [0, 100]
    pub progress_percent: f64,
    /// One of {20, 40, 60, 100}
    pub health_score: u8,
}

// ============================================================================
// Activity Log Types
// ============================================================================

/// A single logged gym activity (e.g. "Squats, 3x15 @ 80kg")
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Zero for bodyweight movements
    pub weight_kg: f64,
    pub duration_min: u32,
    pub calories: u32,
    pub completed: bool,
    pub performed_at: DateTime<Utc>,
}

// ============================================================================
// Health Snapshot Types
// ============================================================================

/// Point-in-time health readings shown on the monitor page.
///
/// The member app has no real sensors; these are manually entered or default
/// values, kept here so the gauge math lives in one place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthSnapshot {
    pub heart_rate_bpm: u32,
    /// Resting heart rate reference range (low, high)
    pub resting_range: (u32, u32),
    pub steps: u32,
    pub water_l: f64,
    pub sleep_hours: f64,
    /// (systolic, diastolic)
    pub blood_pressure: (u32, u32),
    pub body_temp_f: f64,
}

impl Default for HealthSnapshot {
    fn default() -> Self {
        Self {
            heart_rate_bpm: 72,
            resting_range: (60, 100),
            steps: 8432,
            water_l: 2.5,
            sleep_hours: 7.5,
            blood_pressure: (120, 80),
            body_temp_f: 98.6,
        }
    }
}

// ============================================================================
// Diet Types
// ============================================================================

/// Meal slot within a diet day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// A single meal with its nutrient content
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// One day of planned meals, grouped by slot
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DietDay {
    pub breakfast: Vec<Meal>,
    pub lunch: Vec<Meal>,
    pub dinner: Vec<Meal>,
}

// ============================================================================
// Membership Plan Types
// ============================================================================

/// A gym membership tier
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: String,
    pub name: String,
    /// USD per month
    pub price_per_month: u32,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
}

/// The complete catalog of membership plans, in display order
#[derive(Clone, Debug)]
pub struct PlanCatalog {
    pub plans: Vec<MembershipPlan>,
}

impl PlanCatalog {
    /// Look up a plan by id
    pub fn get(&self, id: &str) -> Option<&MembershipPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// The plan flagged as the popular choice, if any
    pub fn popular(&self) -> Option<&MembershipPlan> {
        self.plans.iter().find(|p| p.popular)
    }
}

// ============================================================================
// Profile and Settings Types
// ============================================================================

/// Member profile, persisted as `user.json` in the data directory
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub member_since: Option<DateTime<Utc>>,
    /// Id of the selected membership plan, if one was chosen
    pub selected_plan: Option<String>,
}

/// Application settings, persisted as `settings.json` in the data directory
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    pub notifications_enabled: bool,
    /// Remember the dashboard layout between runs
    pub persist_dashboard: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            persist_dashboard: true,
        }
    }
}
