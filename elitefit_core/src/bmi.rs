//! BMI computation engine.
//!
//! A stateless, synchronous computation: one [`Measurement`] in, one
//! [`BmiResult`] out. Validation happens at construction time so the
//! computation itself is total and can never see a NaN.
//!
//! Categorization thresholds (half-open, lower bound inclusive):
//! - `< 18.5`        Underweight
//! - `[18.5, 25)`    Normal Weight
//! - `[25, 30)`      Overweight
//! - `>= 30`         Obese

use crate::{BmiCategory, BmiResult, Error, Measurement, Result, UnitSystem};

/// Imperial BMI conversion factor (lb/in^2 -> kg/m^2)
const IMPERIAL_FACTOR: f64 = 703.0;

/// Display scale ceiling: a BMI of 50 fills the progress bar
const PROGRESS_SCALE_MAX: f64 = 50.0;

impl Measurement {
    /// Build a measurement from already-parsed numbers.
    ///
    /// Rejects non-finite and non-positive values.
    pub fn new(height: f64, weight: f64, units: UnitSystem) -> Result<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidInput(
                "height must be a positive number".into(),
            ));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidInput(
                "weight must be a positive number".into(),
            ));
        }
        Ok(Self {
            height,
            weight,
            units,
        })
    }

    /// Build a measurement from raw user-entered text.
    ///
    /// This is the entry point the form layer uses: absent or non-numeric
    /// fields fail here with `InvalidInput` rather than flowing into the
    /// arithmetic as NaN.
    pub fn from_raw(
        height: Option<&str>,
        weight: Option<&str>,
        units: UnitSystem,
    ) -> Result<Self> {
        let height = parse_field(height, "height")?;
        let weight = parse_field(weight, "weight")?;
        Self::new(height, weight, units)
    }
}

/// Parse one raw field, naming it in the error message
fn parse_field(raw: Option<&str>, field: &str) -> Result<f64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidInput(format!("{} is required", field)))?;

    raw.parse::<f64>()
        .map_err(|_| Error::InvalidInput(format!("{} is not a number: '{}'", field, raw)))
}

/// Compute BMI, category, and derived display metrics for a measurement.
///
/// The published `bmi` is rounded to one decimal (half away from zero) and
/// the category is taken from that rounded value, so `category` is always a
/// function of the `bmi` field a caller can see.
pub fn compute_bmi(measurement: &Measurement) -> BmiResult {
    let raw = match measurement.units {
        UnitSystem::Metric => {
            let height_m = measurement.height / 100.0;
            measurement.weight / (height_m * height_m)
        }
        UnitSystem::Imperial => {
            IMPERIAL_FACTOR * measurement.weight / (measurement.height * measurement.height)
        }
    };

    let bmi = round_one_decimal(raw);
    let category = categorize(bmi);

    BmiResult {
        bmi,
        category,
        progress_percent: progress_percent(bmi),
        health_score: category.health_score(),
    }
}

/// Map a BMI value to its category. Total over all non-negative inputs.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Position of a BMI value on the 0-50 display scale, clamped to [0, 100]
fn progress_percent(bmi: f64) -> f64 {
    ((bmi / PROGRESS_SCALE_MAX) * 100.0).min(100.0)
}

/// Round half away from zero at one fractional digit.
///
/// Pinned explicitly (`f64::round` semantics) so .x5 boundaries behave the
/// same on every platform.
fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
