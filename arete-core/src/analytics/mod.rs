//! Analytics module for arete
//!
//! The derived-analytics engine: pure, deterministic transformations
//! from the flat habit/log state into display-ready structures.
//!
//! - [`date`] - canonical `YYYY-MM-DD` handling and day windows
//! - [`streak`] - consecutive-day streak detection
//! - [`series`] - windowed consistency series, heatmap tiers, dashboard cards
//! - [`sunburst`] - hierarchical radial partition layout
//! - [`logo`] - single-date radial completion snapshot
//!
//! Nothing here performs I/O or mutates input state; every function is a
//! total function of its arguments (including an explicit reference date
//! where "today" matters), so recomputing with unchanged inputs yields
//! identical output.

pub mod date;
pub mod logo;
pub mod series;
pub mod streak;
pub mod sunburst;

pub use date::{format_date, last_n_days, parse_date_str, today};
pub use logo::{logo_slices, LogoSlice, INACTIVE_OPACITY, SLICE_GAP_DEGREES};
pub use series::{
    average_percentage, consistency_series, dashboard_stats, DashboardStats, DayStats, HeatTier,
    HEATMAP_WINDOW_DAYS, TREND_WINDOW_DAYS,
};
pub use streak::{current_streak, longest_streak};
pub use sunburst::{
    habit_tree, layout, Slice, SunburstNode, FULL_CIRCLE_EPSILON, RING_DIVISOR,
};
