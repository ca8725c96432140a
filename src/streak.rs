use crate::models::{AppData, MonthlyPoint};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Turns the raw streak map into a date-sorted sequence. Keys that do not
/// parse as `YYYY-MM-DD` are dropped rather than treated as errors.
pub fn parse_streaks(streaks: &BTreeMap<String, bool>) -> Vec<(NaiveDate, bool)> {
    let mut entries: Vec<(NaiveDate, bool)> = streaks
        .iter()
        .filter_map(|(key, done)| {
            NaiveDate::parse_from_str(key, "%Y-%m-%d")
                .ok()
                .map(|date| (date, *done))
        })
        .collect();
    entries.sort_by_key(|(date, _)| *date);
    entries
}

/// Consecutive completed days ending at the most recent recorded day.
pub fn current_streak(entries: &[(NaiveDate, bool)]) -> u32 {
    let mut streak = 0;
    for (_, done) in entries.iter().rev() {
        if !done {
            break;
        }
        streak += 1;
    }
    streak
}

/// Completed-day counts grouped by calendar month, ascending. Months with
/// recorded days but no completions appear with a zero count; months with no
/// entries at all do not appear.
pub fn monthly_completed_counts(entries: &[(NaiveDate, bool)]) -> Vec<MonthlyPoint> {
    let mut buckets: BTreeMap<(i32, u32), u32> = BTreeMap::new();
    for (date, done) in entries {
        let count = buckets.entry((date.year(), date.month())).or_insert(0);
        if *done {
            *count += 1;
        }
    }
    buckets
        .into_iter()
        .map(|((year, month), completed)| MonthlyPoint {
            month: format!("{year:04}-{month:02}"),
            completed,
        })
        .collect()
}

/// Re-derives the day's streak flag from its task list. A day with no tasks
/// counts as not completed. Runs after every task mutation on `day`.
pub fn recompute_day_completion(data: &mut AppData, day: &str) {
    let completed = data
        .tasks
        .get(day)
        .map(|tasks| !tasks.is_empty() && tasks.iter().all(|task| task.done))
        .unwrap_or(false);
    data.streaks.insert(day.to_string(), completed);
}

pub fn reset_today(data: &mut AppData, today: NaiveDate) {
    data.streaks.insert(today.to_string(), false);
}

/// Flips the most recent completed day to false, ending the active streak.
/// Returns the date that was flipped, or `None` when no day was completed.
pub fn break_active_streak(data: &mut AppData) -> Option<NaiveDate> {
    let entries = parse_streaks(&data.streaks);
    let latest = entries
        .iter()
        .rev()
        .find(|(_, done)| *done)
        .map(|(date, _)| *date)?;
    data.streaks.insert(latest.to_string(), false);
    Some(latest)
}
