//! Dashboard metric computations.
//!
//! Pure functions turning a health snapshot, the daily targets, and the
//! activity history into the values the dashboard displays:
//! - Gauge rows (heart rate, steps, water, sleep) with clamped progress
//! - Per-day activity totals
//! - Weekly goal completion and the current streak

use crate::config::TargetsConfig;
use crate::{ActivityEntry, HealthSnapshot};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// One gauge row on the health monitor
#[derive(Clone, Debug, PartialEq)]
pub struct MetricProgress {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
    pub target: String,
    /// Progress toward the target, clamped to [0, 100]
    pub percent: f64,
}

/// Aggregated activity numbers for a single day
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityTotals {
    pub calories: u32,
    pub minutes: u32,
    pub completed: usize,
    pub total: usize,
}

impl ActivityTotals {
    /// Share of the day's activities marked completed, in [0, 100]
    pub fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64) * 100.0
    }
}

/// One day in the weekly goal row
#[derive(Clone, Debug, PartialEq)]
pub struct DayGoal {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub completed: bool,
}

/// Ratio as a percentage, clamped to 100
fn percent_of(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    ((value / target) * 100.0).min(100.0)
}

/// Build the four gauge rows from a snapshot and the configured targets
pub fn snapshot_gauges(snapshot: &HealthSnapshot, targets: &TargetsConfig) -> Vec<MetricProgress> {
    let (range_lo, range_hi) = snapshot.resting_range;

    vec![
        MetricProgress {
            label: "Heart Rate",
            value: snapshot.heart_rate_bpm.to_string(),
            unit: "bpm",
            target: format!("{}-{}", range_lo, range_hi),
            percent: percent_of(snapshot.heart_rate_bpm as f64, range_hi as f64),
        },
        MetricProgress {
            label: "Steps",
            value: format!("{:.1}k", snapshot.steps as f64 / 1000.0),
            unit: "steps",
            target: format!("of {}k", targets.steps / 1000),
            percent: percent_of(snapshot.steps as f64, targets.steps as f64),
        },
        MetricProgress {
            label: "Water Intake",
            value: format!("{:.1}", snapshot.water_l),
            unit: "L",
            target: format!("of {}L", targets.water_l),
            percent: percent_of(snapshot.water_l, targets.water_l),
        },
        MetricProgress {
            label: "Sleep",
            value: format!("{:.1}", snapshot.sleep_hours),
            unit: "hrs",
            target: format!("of {}h", targets.sleep_hours),
            percent: percent_of(snapshot.sleep_hours, targets.sleep_hours),
        },
    ]
}

/// Sum up the activities performed on a given day
pub fn day_totals(entries: &[ActivityEntry], day: NaiveDate) -> ActivityTotals {
    let mut totals = ActivityTotals::default();

    for entry in entries {
        if entry.performed_at.date_naive() != day {
            continue;
        }
        totals.total += 1;
        totals.calories += entry.calories;
        totals.minutes += entry.duration_min;
        if entry.completed {
            totals.completed += 1;
        }
    }

    totals
}

/// Goal row for the Monday-through-Sunday week containing `today`
///
/// A day counts as completed when at least one completed activity was
/// performed on it.
pub fn weekly_goals(entries: &[ActivityEntry], today: NaiveDate) -> Vec<DayGoal> {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);

    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            DayGoal {
                date,
                weekday: date.weekday(),
                completed: has_completed_activity(entries, date),
            }
        })
        .collect()
}

/// Length of the run of consecutive completed days ending at `today`.
///
/// A day without entries only breaks the streak once it is over: an empty
/// `today` anchors the count on yesterday instead of returning zero.
pub fn current_streak(entries: &[ActivityEntry], today: NaiveDate) -> u32 {
    let mut day = if has_completed_activity(entries, today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while has_completed_activity(entries, day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}

fn has_completed_activity(entries: &[ActivityEntry], day: NaiveDate) -> bool {
    entries
        .iter()
        .any(|e| e.completed && e.performed_at.date_naive() == day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn entry_on(date: NaiveDate, completed: bool, calories: u32, minutes: u32) -> ActivityEntry {
        ActivityEntry {
            id: Uuid::new_v4(),
            name: "Gym Session".into(),
            sets: 3,
            reps: 10,
            weight_kg: 40.0,
            duration_min: minutes,
            calories,
            completed,
            performed_at: Utc
                .with_ymd_and_hms(date.year(), date.month(), date.day(), 8, 30, 0)
                .unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_snapshot_gauges_defaults() {
        let gauges = snapshot_gauges(&HealthSnapshot::default(), &TargetsConfig::default());

        assert_eq!(gauges.len(), 4);

        let steps = &gauges[1];
        assert_eq!(steps.label, "Steps");
        assert_eq!(steps.value, "8.4k");
        assert!((steps.percent - 84.32).abs() < 1e-9);

        let heart = &gauges[0];
        assert_eq!(heart.target, "60-100");
        assert!((heart.percent - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_percent_clamps_at_100() {
        let snapshot = HealthSnapshot {
            steps: 25_000,
            water_l: 5.0,
            ..Default::default()
        };
        let gauges = snapshot_gauges(&snapshot, &TargetsConfig::default());

        assert_eq!(gauges[1].percent, 100.0);
        assert_eq!(gauges[2].percent, 100.0);
    }

    #[test]
    fn test_day_totals() {
        let day = date(2024, 3, 11);
        let entries = vec![
            entry_on(day, true, 85, 8),
            entry_on(day, true, 120, 10),
            entry_on(day, false, 150, 12),
            entry_on(date(2024, 3, 10), true, 300, 30), // Different day
        ];

        let totals = day_totals(&entries, day);
        assert_eq!(totals.total, 3);
        assert_eq!(totals.completed, 2);
        assert_eq!(totals.calories, 355);
        assert_eq!(totals.minutes, 30);
        assert!((totals.completion_percent() - 66.666).abs() < 0.001);
    }

    #[test]
    fn test_day_totals_empty() {
        let totals = day_totals(&[], date(2024, 3, 11));
        assert_eq!(totals, ActivityTotals::default());
        assert_eq!(totals.completion_percent(), 0.0);
    }

    #[test]
    fn test_weekly_goals_marks_days() {
        // 2024-03-13 is a Wednesday
        let today = date(2024, 3, 13);
        let entries = vec![
            entry_on(date(2024, 3, 11), true, 100, 10), // Monday
            entry_on(date(2024, 3, 12), false, 100, 10), // Tuesday, not completed
            entry_on(date(2024, 3, 13), true, 100, 10), // Wednesday
        ];

        let goals = weekly_goals(&entries, today);
        assert_eq!(goals.len(), 7);
        assert_eq!(goals[0].weekday, Weekday::Mon);
        assert_eq!(goals[6].weekday, Weekday::Sun);

        assert!(goals[0].completed); // Mon
        assert!(!goals[1].completed); // Tue: only an incomplete entry
        assert!(goals[2].completed); // Wed
        assert!(!goals[3].completed); // Thu
    }

    #[test]
    fn test_current_streak() {
        let today = date(2024, 3, 13);
        let entries = vec![
            entry_on(date(2024, 3, 11), true, 100, 10),
            entry_on(date(2024, 3, 12), true, 100, 10),
            entry_on(date(2024, 3, 13), true, 100, 10),
            // Gap on the 10th; the 9th should not count
            entry_on(date(2024, 3, 9), true, 100, 10),
        ];

        assert_eq!(current_streak(&entries, today), 3);
    }

    #[test]
    fn test_streak_survives_empty_today() {
        let today = date(2024, 3, 13);
        let entries = vec![
            entry_on(date(2024, 3, 11), true, 100, 10),
            entry_on(date(2024, 3, 12), true, 100, 10),
        ];

        assert_eq!(current_streak(&entries, today), 2);
    }

    #[test]
    fn test_streak_zero_without_recent_days() {
        let today = date(2024, 3, 13);
        let entries = vec![entry_on(date(2024, 3, 1), true, 100, 10)];

        assert_eq!(current_streak(&entries, today), 0);
    }
}
