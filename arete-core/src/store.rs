//! JSON document store for habits, logs, and categories.
//!
//! The whole dataset is one small JSON document at
//! `$XDG_DATA_HOME/arete/store.json`, loaded at startup and written back
//! after each mutation. The analytics modules never touch this layer;
//! they only borrow the state slices it owns.
//!
//! A missing file means a fresh start and yields the default seeded
//! state. An unparseable file is surfaced as an error rather than being
//! silently reset, so a corrupt store never destroys history.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::palette::SEED_CATEGORIES;
use crate::types::{Habit, HabitLogs};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The persisted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct State {
    habits: Vec<Habit>,
    logs: HabitLogs,
    categories: Vec<String>,
    /// First day of the user's challenge, recorded on first run
    start_date: NaiveDate,
}

impl State {
    fn fresh(today: NaiveDate) -> Self {
        Self {
            habits: Vec::new(),
            logs: HabitLogs::new(),
            categories: SEED_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            start_date: today,
        }
    }
}

/// Owns the canonical habit/log/category state and its persistence.
pub struct Store {
    path: PathBuf,
    state: State,
}

impl Store {
    /// Open the store at the default XDG path.
    pub fn open(today: NaiveDate) -> Result<Self> {
        Self::open_at(&Config::store_path(), today)
    }

    /// Open the store at a specific path, seeding a fresh state if the
    /// file does not exist yet.
    pub fn open_at(path: &Path, today: NaiveDate) -> Result<Self> {
        let state = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            tracing::info!(path = %path.display(), "no store file, starting fresh");
            State::fresh(today)
        };

        Ok(Self {
            path: path.to_path_buf(),
            state,
        })
    }

    /// Write the current state back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "store saved");
        Ok(())
    }

    // ============================================
    // Accessors
    // ============================================

    pub fn habits(&self) -> &[Habit] {
        &self.state.habits
    }

    pub fn logs(&self) -> &HabitLogs {
        &self.state.logs
    }

    pub fn categories(&self) -> &[String] {
        &self.state.categories
    }

    pub fn start_date(&self) -> NaiveDate {
        self.state.start_date
    }

    /// Day number of the challenge, 1-based (the start date is day 1).
    pub fn day_number(&self, today: NaiveDate) -> i64 {
        (today - self.state.start_date).num_days() + 1
    }

    /// Find a habit by exact id, exact title (case-insensitive), or
    /// unique title prefix.
    pub fn resolve_habit(&self, query: &str) -> Result<&Habit> {
        if let Some(habit) = self.state.habits.iter().find(|h| h.id == query) {
            return Ok(habit);
        }
        let lowered = query.to_lowercase();
        if let Some(habit) = self
            .state
            .habits
            .iter()
            .find(|h| h.title.to_lowercase() == lowered)
        {
            return Ok(habit);
        }
        let mut matches = self
            .state
            .habits
            .iter()
            .filter(|h| h.title.to_lowercase().starts_with(&lowered));
        match (matches.next(), matches.next()) {
            (Some(habit), None) => Ok(habit),
            _ => Err(Error::HabitNotFound(query.to_string())),
        }
    }

    // ============================================
    // Habit operations
    // ============================================

    /// Create a habit; returns its id. Unknown categories are added to
    /// the known list.
    pub fn add_habit(
        &mut self,
        title: &str,
        description: &str,
        category: &str,
        today: NaiveDate,
    ) -> String {
        if !self.state.categories.iter().any(|c| c == category) {
            self.state.categories.push(category.to_string());
        }
        let habit = Habit::new(title, description, category, today);
        let id = habit.id.clone();
        tracing::info!(habit = %title, category = %category, "habit added");
        self.state.habits.push(habit);
        id
    }

    /// Update a habit's editable fields. `None` leaves a field unchanged.
    pub fn edit_habit(
        &mut self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
    ) -> Result<()> {
        if let Some(category) = category {
            if !self.state.categories.iter().any(|c| c == category) {
                self.state.categories.push(category.to_string());
            }
        }
        let habit = self
            .state
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| Error::HabitNotFound(id.to_string()))?;
        if let Some(title) = title {
            habit.title = title.to_string();
        }
        if let Some(description) = description {
            habit.description = description.to_string();
        }
        if let Some(category) = category {
            habit.category = category.to_string();
        }
        Ok(())
    }

    /// Flip a habit's archived flag; returns the new state.
    pub fn toggle_archived(&mut self, id: &str) -> Result<bool> {
        let habit = self
            .state
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| Error::HabitNotFound(id.to_string()))?;
        habit.archived = !habit.archived;
        Ok(habit.archived)
    }

    /// Delete a habit and cascade to its log entries.
    pub fn delete_habit(&mut self, id: &str) -> Result<()> {
        let before = self.state.habits.len();
        self.state.habits.retain(|h| h.id != id);
        if self.state.habits.len() == before {
            return Err(Error::HabitNotFound(id.to_string()));
        }
        self.state.logs.remove_habit(id);
        tracing::info!(habit_id = %id, "habit deleted");
        Ok(())
    }

    /// Flip a habit's completion state for a date; returns the new state.
    pub fn toggle_completion(&mut self, id: &str, date: NaiveDate) -> Result<bool> {
        // Validate the id so a typo can't create an orphaned log entry
        if !self.state.habits.iter().any(|h| h.id == id) {
            return Err(Error::HabitNotFound(id.to_string()));
        }
        Ok(self.state.logs.toggle(id, date))
    }

    // ============================================
    // Category operations
    // ============================================

    pub fn add_category(&mut self, name: &str) -> Result<()> {
        if self.state.categories.iter().any(|c| c == name) {
            return Err(Error::Config(format!("category already exists: {name}")));
        }
        self.state.categories.push(name.to_string());
        Ok(())
    }

    /// Rename a category, rewriting every habit that references it.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<()> {
        let slot = self
            .state
            .categories
            .iter_mut()
            .find(|c| *c == old)
            .ok_or_else(|| Error::CategoryNotFound(old.to_string()))?;
        *slot = new.to_string();
        for habit in self.state.habits.iter_mut().filter(|h| h.category == old) {
            habit.category = new.to_string();
        }
        Ok(())
    }

    /// Remove a category. Refused while habits still reference it.
    pub fn delete_category(&mut self, name: &str) -> Result<()> {
        if !self.state.categories.iter().any(|c| c == name) {
            return Err(Error::CategoryNotFound(name.to_string()));
        }
        if self.state.habits.iter().any(|h| h.category == name) {
            return Err(Error::Config(format!(
                "category {name} still has habits; reassign or delete them first"
            )));
        }
        self.state.categories.retain(|c| c != name);
        Ok(())
    }
}
