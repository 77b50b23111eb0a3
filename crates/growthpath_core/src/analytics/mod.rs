//! Derived analytics over habit and journal snapshots.
//!
//! # Responsibility
//! - Compute rolling-window aggregates for the insights charts.
//!
//! # Invariants
//! - All functions are pure and read-only; nothing here is cached or
//!   persisted.
//! - The trailing window is `[today - (window - 1), today]`, both ends
//!   inclusive, on the caller's local calendar. Callers pass
//!   `Local::now().date_naive()` as `today`.

use crate::model::habit::{Habit, HabitCategory};
use crate::model::journal::JournalEntry;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Default trailing window, in calendar days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Number of top habits reported by [`habit_frequency_ranking`].
pub const FREQUENCY_RANKING_LIMIT: usize = 8;

/// One radar-chart axis: a category and its 0..=100 adherence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: HabitCategory,
    pub score: u32,
}

/// One bar of the frequency ranking: habit name and all-time completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitFrequency {
    pub name: String,
    pub completions: usize,
}

/// One day of the habit/mood correlation series.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodPoint {
    pub date: NaiveDate,
    /// Mood magnitude (crying = 1 .. happy = 5, no entry = 0) multiplied
    /// by `habit_count / 5`. The multiplier is a chart-scaling display
    /// transform so both series share one axis; it carries no analytical
    /// meaning. [`average_mood`] divides it back out.
    pub mood: f64,
    /// Habits completed on that day.
    pub habits_completed: u32,
}

/// Overall habit adherence as a 0..=100 score.
///
/// All-time completions are measured against a fixed `habit_count * 30`
/// denominator, so young habits score low until they accrue history.
/// Returns 0 when no habits are tracked.
pub fn consistency_score(habits: &[Habit]) -> u32 {
    if habits.is_empty() {
        return 0;
    }

    let total_completions: usize = habits.iter().map(|h| h.completions.len()).sum();
    let days_tracked = habits.len() * DEFAULT_WINDOW_DAYS as usize;
    let score = (total_completions as f64 / days_tracked as f64 * 100.0).round() as u32;
    score.min(100)
}

/// Per-category adherence over the trailing 30 days.
///
/// Always returns one row per [`HabitCategory`], in `HabitCategory::ALL`
/// order; categories with no habits score 0.
pub fn category_radar(habits: &[Habit], today: NaiveDate) -> Vec<CategoryScore> {
    let start = window_start(today, DEFAULT_WINDOW_DAYS);

    HabitCategory::ALL
        .iter()
        .map(|&category| {
            let category_habits: Vec<&Habit> =
                habits.iter().filter(|h| h.category == category).collect();
            if category_habits.is_empty() {
                return CategoryScore { category, score: 0 };
            }

            let possible = category_habits.len() * DEFAULT_WINDOW_DAYS as usize;
            let completed: usize = category_habits
                .iter()
                .map(|h| {
                    h.completions
                        .iter()
                        .filter(|&&d| d >= start && d <= today)
                        .count()
                })
                .sum();

            let score = (completed as f64 / possible as f64 * 100.0).round() as u32;
            CategoryScore { category, score }
        })
        .collect()
}

/// Habits ranked by all-time completion count, descending.
///
/// The sort is stable, so ties keep collection (creation) order. Truncated
/// to the top [`FREQUENCY_RANKING_LIMIT`].
pub fn habit_frequency_ranking(habits: &[Habit]) -> Vec<HabitFrequency> {
    let mut ranking: Vec<HabitFrequency> = habits
        .iter()
        .map(|h| HabitFrequency {
            name: h.name.clone(),
            completions: h.completions.len(),
        })
        .collect();

    ranking.sort_by(|a, b| b.completions.cmp(&a.completions));
    ranking.truncate(FREQUENCY_RANKING_LIMIT);
    ranking
}

/// Daily habit-count and mood series over the trailing window.
///
/// Produces exactly `window_days` points, one per calendar day ending at
/// `today`, whether or not journal entries exist (missing days carry mood
/// 0). See [`MoodPoint::mood`] for the display scaling applied to mood.
pub fn mood_correlation_series(
    journal: &BTreeMap<NaiveDate, JournalEntry>,
    habits: &[Habit],
    today: NaiveDate,
    window_days: u32,
) -> Vec<MoodPoint> {
    let scale = habits.len() as f64 / 5.0;

    window(today, window_days)
        .map(|date| {
            let magnitude = journal
                .get(&date)
                .and_then(|entry| entry.mood)
                .map_or(0, |mood| mood.magnitude());
            let habits_completed =
                habits.iter().filter(|h| h.completions.contains(&date)).count() as u32;

            MoodPoint {
                date,
                mood: f64::from(magnitude) * scale,
                habits_completed,
            }
        })
        .collect()
}

/// Mean mood over the days of `series` that have an entry, on the
/// original 1..=5 scale (display scaling divided back out).
///
/// Returns 0.0 when no day has a recorded mood or no habits exist (the
/// scaled series is all zeros in that case).
pub fn average_mood(series: &[MoodPoint], habit_count: usize) -> f64 {
    if habit_count == 0 {
        return 0.0;
    }

    let scale = habit_count as f64 / 5.0;
    let recorded: Vec<f64> = series.iter().map(|p| p.mood).filter(|&m| m > 0.0).collect();
    if recorded.is_empty() {
        return 0.0;
    }

    recorded.iter().sum::<f64>() / recorded.len() as f64 / scale
}

/// Iterates the trailing window in chronological order, ending at `today`.
fn window(today: NaiveDate, window_days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..window_days).map(move |offset| {
        let back = u64::from(window_days - 1 - offset);
        today.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
    })
}

fn window_start(today: NaiveDate, window_days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(window_days - 1)))
        .unwrap_or(NaiveDate::MIN)
}
