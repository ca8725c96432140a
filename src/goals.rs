use crate::errors::AppError;
use crate::models::{AppData, Goal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentProgress {
    pub done: usize,
    pub total: usize,
    pub pct: u8,
}

/// Canonical segment key: lower-case, spaces as underscores, so the UI label
/// "3 Months" and the stored key "3_months" stay interchangeable.
pub fn segment_key(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

pub fn add_goal(data: &mut AppData, segment: &str, text: &str) {
    let key = segment_key(segment);
    data.goals.entry(key).or_default().push(Goal {
        goal: text.to_string(),
        done: false,
    });
}

pub fn set_goal_done(
    data: &mut AppData,
    segment: &str,
    index: usize,
    done: bool,
) -> Result<(), AppError> {
    let key = segment_key(segment);
    let goal = data
        .goals
        .get_mut(&key)
        .and_then(|goals| goals.get_mut(index))
        .ok_or_else(|| stale_index(&key, index))?;
    goal.done = done;
    Ok(())
}

pub fn delete_goal(data: &mut AppData, segment: &str, index: usize) -> Result<(), AppError> {
    let key = segment_key(segment);
    let goals = data
        .goals
        .get_mut(&key)
        .filter(|goals| index < goals.len())
        .ok_or_else(|| stale_index(&key, index))?;
    goals.remove(index);
    Ok(())
}

pub fn segment_progress(goals: &[Goal]) -> SegmentProgress {
    let total = goals.len();
    let done = goals.iter().filter(|goal| goal.done).count();
    let pct = if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * 100.0).round() as u8
    };
    SegmentProgress { done, total, pct }
}

pub fn set_main_goal(data: &mut AppData, text: &str, progress: i64) {
    data.main_goal.goal = text.to_string();
    data.main_goal.progress = progress.clamp(0, 100) as u8;
}

fn stale_index(segment: &str, index: usize) -> AppError {
    AppError::bad_request(format!(
        "no goal at index {index} in segment '{segment}'; refresh the list and retry"
    ))
}
