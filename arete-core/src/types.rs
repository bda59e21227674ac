//! Core domain types for arete
//!
//! These types are the canonical state the host application owns and
//! persists. Analytics components only ever borrow slices of this state
//! and return plain derived structures; they never mutate it.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Habit** | A user-defined recurring discipline tracked by completion date |
//! | **Log** | The set of calendar dates on which a habit was marked complete |
//! | **Category** | A plain string name grouping habits; referenced by `Habit::category` |
//! | **Active habit** | A non-archived habit, counted in denominators regardless of creation date |
//!
//! ## The date-string contract
//!
//! Every date crossing a component boundary is a plain calendar date in
//! `YYYY-MM-DD` form, local calendar time. Internally we use
//! [`chrono::NaiveDate`], which carries exactly the local year/month/day
//! fields and no timezone, so a date can never shift across midnight when
//! serialized. Serde renders a `NaiveDate` as `YYYY-MM-DD` and refuses
//! anything else, which keeps completion lookups exact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ============================================
// Habit
// ============================================

/// A recurring discipline the user tracks daily.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, immutable for the lifetime of the dataset
    pub id: String,
    /// Short display title
    pub title: String,
    /// Free-form description or personal motto
    #[serde(default)]
    pub description: String,
    /// Category name; may reference a category not in the known list
    pub category: String,
    /// When the habit was created
    pub created_at: NaiveDate,
    /// Archived habits are kept for history but excluded from all
    /// denominators and charts
    #[serde(default)]
    pub archived: bool,
}

impl Habit {
    /// Create a new habit with a fresh id, created today.
    pub fn new(title: &str, description: &str, category: &str, today: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            created_at: today,
            archived: false,
        }
    }
}

/// Returns the active (non-archived) habits in list order.
pub fn active_habits(habits: &[Habit]) -> Vec<&Habit> {
    habits.iter().filter(|h| !h.archived).collect()
}

// ============================================
// Habit logs
// ============================================

/// Per-habit completion dates, keyed by habit id.
///
/// Semantically each habit owns a *set* of dates; `BTreeSet` keeps them
/// deduplicated and sorted for stable serialization. The map may contain
/// an id with no corresponding live habit (e.g. an interrupted deletion
/// cascade); lookups treat that the same as any other entry and callers
/// simply never ask for ids they don't know.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitLogs {
    entries: HashMap<String, BTreeSet<NaiveDate>>,
}

/// Shared empty set returned for unknown habit ids.
static EMPTY_LOG: BTreeSet<NaiveDate> = BTreeSet::new();

impl HabitLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion dates for a habit. Unknown ids yield an empty set,
    /// never an error.
    pub fn completions(&self, habit_id: &str) -> &BTreeSet<NaiveDate> {
        self.entries.get(habit_id).unwrap_or(&EMPTY_LOG)
    }

    /// Whether the habit was completed on the given date.
    pub fn is_completed(&self, habit_id: &str, date: NaiveDate) -> bool {
        self.completions(habit_id).contains(&date)
    }

    /// Number of completions recorded for a habit.
    pub fn completion_count(&self, habit_id: &str) -> usize {
        self.completions(habit_id).len()
    }

    /// Total completions across all habits (including orphaned ids).
    pub fn total_completions(&self) -> usize {
        self.entries.values().map(|dates| dates.len()).sum()
    }

    /// Mark a habit complete on a date. Idempotent.
    pub fn mark(&mut self, habit_id: &str, date: NaiveDate) {
        self.entries
            .entry(habit_id.to_string())
            .or_default()
            .insert(date);
    }

    /// Remove a completion mark. Idempotent.
    pub fn unmark(&mut self, habit_id: &str, date: NaiveDate) {
        if let Some(dates) = self.entries.get_mut(habit_id) {
            dates.remove(&date);
        }
    }

    /// Flip the completion state for a date; returns the new state.
    pub fn toggle(&mut self, habit_id: &str, date: NaiveDate) -> bool {
        let dates = self.entries.entry(habit_id.to_string()).or_default();
        if dates.remove(&date) {
            false
        } else {
            dates.insert(date);
            true
        }
    }

    /// Drop all log entries for a habit (deletion cascade).
    pub fn remove_habit(&mut self, habit_id: &str) {
        self.entries.remove(habit_id);
    }

    /// Iterate over (habit id, completion set) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<NaiveDate>)> {
        self.entries.iter()
    }
}
