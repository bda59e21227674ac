//! # arete-core
//!
//! Core library for arete - a daily discipline (habit) tracker.
//!
//! This library provides:
//! - Domain types for habits, completion logs, and categories
//! - A JSON document store for local persistence
//! - The derived-analytics engine: streaks, consistency series,
//!   heatmap tiers, sunburst partition layout, and the logo snapshot
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! State flows one way: the [`store::Store`] owns the canonical habits,
//! logs, and categories; the [`analytics`] functions are pure and
//! borrow that state to produce display-ready structures. "Today" is
//! always an explicit parameter so a computation can never straddle a
//! day boundary and tests can pin any reference date.
//!
//! ## Example
//!
//! ```rust,no_run
//! use arete_core::analytics::{self, consistency_series, TREND_WINDOW_DAYS};
//! use arete_core::Store;
//!
//! let today = analytics::today();
//! let store = Store::open(today).expect("failed to open store");
//! let series = consistency_series(store.habits(), store.logs(), TREND_WINDOW_DAYS, today);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use palette::Palette;
pub use store::Store;
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod store;
pub mod types;
