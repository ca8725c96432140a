use crate::errors::AppError;
use crate::models::{AppData, Priority, Task};
use crate::streak::recompute_day_completion;

/// Appends a task to the day's list. Empty names are accepted; existing data
/// files may already contain them.
pub fn add_task(data: &mut AppData, day: &str, name: &str, priority: Priority) {
    data.tasks.entry(day.to_string()).or_default().push(Task {
        task: name.to_string(),
        priority,
        done: false,
    });
    recompute_day_completion(data, day);
}

pub fn set_task_done(
    data: &mut AppData,
    day: &str,
    index: usize,
    done: bool,
) -> Result<(), AppError> {
    let task = data
        .tasks
        .get_mut(day)
        .and_then(|tasks| tasks.get_mut(index))
        .ok_or_else(|| stale_index(day, index))?;
    task.done = done;
    recompute_day_completion(data, day);
    Ok(())
}

pub fn delete_task(data: &mut AppData, day: &str, index: usize) -> Result<(), AppError> {
    let tasks = data
        .tasks
        .get_mut(day)
        .filter(|tasks| index < tasks.len())
        .ok_or_else(|| stale_index(day, index))?;
    tasks.remove(index);
    recompute_day_completion(data, day);
    Ok(())
}

fn stale_index(day: &str, index: usize) -> AppError {
    AppError::bad_request(format!(
        "no task at index {index} for {day}; refresh the list and retry"
    ))
}
