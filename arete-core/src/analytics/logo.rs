//! Single-frame radial completion snapshot (the app glyph).
//!
//! One equal donut slice per active habit, colored by whether that habit
//! was completed on the target date. Angles are in degrees here (the
//! glyph is tiny and gap handling is specified in whole degrees); arc
//! path construction is left to the renderer.

use crate::palette::{Palette, INACTIVE_HEX};
use crate::types::{active_habits, Habit, HabitLogs};
use chrono::NaiveDate;
use serde::Serialize;

/// Gap between adjacent slices, in degrees, when there is more than one.
pub const SLICE_GAP_DEGREES: f64 = 2.0;

/// Opacity for slices whose habit was not completed on the target date.
pub const INACTIVE_OPACITY: f64 = 0.5;

/// One habit's slice of the glyph.
#[derive(Debug, Clone, Serialize)]
pub struct LogoSlice {
    pub habit_id: String,
    pub title: String,
    /// Degrees, clockwise from 12 o'clock by renderer convention
    pub start_angle: f64,
    pub end_angle: f64,
    /// Category color when completed, neutral tone otherwise
    pub color: String,
    pub opacity: f64,
    pub completed: bool,
}

/// Slices for the completion glyph on `target_date`.
///
/// The circle is divided into k equal spans, one per active habit in
/// list order, with a [`SLICE_GAP_DEGREES`] gap trimmed half from each
/// edge when k > 1. Returns an empty vec for k = 0; the caller renders
/// a decorative empty ring instead.
pub fn logo_slices(
    habits: &[Habit],
    logs: &HabitLogs,
    target_date: NaiveDate,
    palette: &Palette,
) -> Vec<LogoSlice> {
    let active = active_habits(habits);
    let total = active.len();
    if total == 0 {
        return Vec::new();
    }

    let angle_per_slice = 360.0 / total as f64;
    let gap = if total > 1 { SLICE_GAP_DEGREES } else { 0.0 };

    active
        .iter()
        .enumerate()
        .map(|(index, habit)| {
            let completed = logs.is_completed(&habit.id, target_date);
            LogoSlice {
                habit_id: habit.id.clone(),
                title: habit.title.clone(),
                start_angle: index as f64 * angle_per_slice + gap / 2.0,
                end_angle: (index + 1) as f64 * angle_per_slice - gap / 2.0,
                color: if completed {
                    palette.color(&habit.category).to_string()
                } else {
                    INACTIVE_HEX.to_string()
                },
                opacity: if completed { 1.0 } else { INACTIVE_OPACITY },
                completed,
            }
        })
        .collect()
}
