//! Consecutive-day streak detection.

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Current consecutive-day streak for one habit, ending at `today`.
///
/// An unfinished today is exempt: if `today` is not in the completion
/// set the count starts at yesterday instead, so an in-progress streak
/// is not broken before the day is over, but today also does not count.
/// Returns 0 when the first eligible day is already missing.
pub fn current_streak(completions: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut cursor = today;
    if !completions.contains(&today) {
        cursor = match cursor.checked_sub_days(Days::new(1)) {
            Some(d) => d,
            None => return 0,
        };
    }

    let mut streak = 0;
    while completions.contains(&cursor) {
        streak += 1;
        cursor = match cursor.checked_sub_days(Days::new(1)) {
            Some(d) => d,
            None => break,
        };
    }
    streak
}

/// Longest consecutive-day run anywhere in the completion history.
pub fn longest_streak(completions: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    // BTreeSet iterates in ascending date order
    for &date in completions {
        run = match prev {
            Some(p) if p.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn set(days_back: &[u64], today: NaiveDate) -> BTreeSet<NaiveDate> {
        days_back
            .iter()
            .map(|&i| today.checked_sub_days(Days::new(i)).unwrap())
            .collect()
    }

    #[test]
    fn test_streak_today_incomplete_is_exempt() {
        let today = date("2025-06-10");
        // Completed yesterday, the day before, and the day before that
        let completions = set(&[1, 2, 3], today);
        assert_eq!(current_streak(&completions, today), 3);
    }

    #[test]
    fn test_streak_today_completed_counts() {
        let today = date("2025-06-10");
        let completions = set(&[0, 1, 2, 3], today);
        assert_eq!(current_streak(&completions, today), 4);
    }

    #[test]
    fn test_streak_empty_set() {
        let today = date("2025-06-10");
        assert_eq!(current_streak(&BTreeSet::new(), today), 0);
    }

    #[test]
    fn test_streak_gap_at_yesterday_breaks() {
        let today = date("2025-06-10");
        // Only two days ago: yesterday is missing, so no current streak
        let completions = set(&[2], today);
        assert_eq!(current_streak(&completions, today), 0);
    }

    #[test]
    fn test_streak_only_today() {
        let today = date("2025-06-10");
        let completions = set(&[0], today);
        assert_eq!(current_streak(&completions, today), 1);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        let today = date("2025-06-10");
        // Gap at 3 days ago; older history must not count
        let completions = set(&[0, 1, 2, 4, 5, 6, 7], today);
        assert_eq!(current_streak(&completions, today), 3);
    }

    #[test]
    fn test_longest_streak() {
        let today = date("2025-06-10");
        assert_eq!(longest_streak(&BTreeSet::new()), 0);
        assert_eq!(longest_streak(&set(&[0], today)), 1);
        // Runs of 3 (days 0-2) and 4 (days 4-7)
        assert_eq!(longest_streak(&set(&[0, 1, 2, 4, 5, 6, 7], today)), 4);
    }
}
