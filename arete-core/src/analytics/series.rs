//! Time-windowed consistency series, heatmap tiers, and dashboard stats.

use crate::analytics::date::last_n_days;
use crate::types::{active_habits, Habit, HabitLogs};
use chrono::NaiveDate;
use serde::Serialize;

/// Window length for the consistency trend chart.
pub const TREND_WINDOW_DAYS: u32 = 30;

/// Window length for the heatmap mosaic.
pub const HEATMAP_WINDOW_DAYS: u32 = 90;

/// Per-day completion record for chart and heatmap consumption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStats {
    /// The calendar day
    pub date: NaiveDate,
    /// Active habits completed on this day
    pub count: usize,
    /// Active habits counted toward the denominator
    pub total_active: usize,
    /// `count / total_active * 100`, or 0 with no active habits
    pub percentage: f64,
}

/// Per-day completion stats over the `window_days` ending at `today`,
/// oldest first.
///
/// The denominator is the count of habits active *now* (non-archived),
/// held constant across the window regardless of each habit's creation
/// date. Backfilled history for a habit created today therefore shows
/// full credit, and past days are held to the standard of the current
/// discipline list.
pub fn consistency_series(
    habits: &[Habit],
    logs: &HabitLogs,
    window_days: u32,
    today: NaiveDate,
) -> Vec<DayStats> {
    let active = active_habits(habits);
    let total_active = active.len();

    last_n_days(today, window_days)
        .into_iter()
        .map(|date| {
            let count = active
                .iter()
                .filter(|h| logs.is_completed(&h.id, date))
                .count();
            let percentage = if total_active > 0 {
                count as f64 / total_active as f64 * 100.0
            } else {
                0.0
            };
            DayStats {
                date,
                count,
                total_active,
                percentage,
            }
        })
        .collect()
}

/// Mean of the series percentages, 0 for an empty series.
pub fn average_percentage(series: &[DayStats]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().map(|d| d.percentage).sum::<f64>() / series.len() as f64
}

// ============================================
// Heatmap tiers
// ============================================

/// Intensity bucket for one heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatTier {
    /// No completions
    None,
    /// Up to 40% of active habits
    Low,
    /// Up to 70%
    Mid,
    /// Above 70% but not all
    High,
    /// Every active habit completed
    Max,
}

impl HeatTier {
    /// Bucket a completion fraction in `[0, 1]`.
    ///
    /// Thresholds are applied in ascending order with the last match
    /// winning, so exactly 1.0 lands in `Max` rather than the `>0.7`
    /// tier it also satisfies.
    pub fn for_fraction(fraction: f64) -> Self {
        let mut tier = HeatTier::None;
        if fraction > 0.0 {
            tier = HeatTier::Low;
        }
        if fraction > 0.4 {
            tier = HeatTier::Mid;
        }
        if fraction > 0.7 {
            tier = HeatTier::High;
        }
        if fraction == 1.0 {
            tier = HeatTier::Max;
        }
        tier
    }

    /// Bucket a day's stats.
    pub fn for_day(day: &DayStats) -> Self {
        Self::for_fraction(day.percentage / 100.0)
    }
}

// ============================================
// Dashboard stats
// ============================================

/// Quick aggregate cards for the dashboard header.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    /// Total completions ever recorded, across all habits
    pub total_completions: usize,
    /// Currently active (non-archived) habits
    pub active_habits: usize,
    /// Active habits completed today
    pub completed_today: usize,
    /// Mean 30-day consistency percentage
    pub avg_consistency_pct: f64,
}

/// Compute the dashboard header cards.
pub fn dashboard_stats(habits: &[Habit], logs: &HabitLogs, today: NaiveDate) -> DashboardStats {
    let active = active_habits(habits);
    let completed_today = active
        .iter()
        .filter(|h| logs.is_completed(&h.id, today))
        .count();
    let series = consistency_series(habits, logs, TREND_WINDOW_DAYS, today);

    DashboardStats {
        total_completions: logs.total_completions(),
        active_habits: active.len(),
        completed_today,
        avg_consistency_pct: average_percentage(&series),
    }
}
