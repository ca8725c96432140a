use crate::errors::AppError;
use crate::models::AppData;
use chrono::NaiveDate;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Loads the document, or starts fresh. A missing, unreadable or malformed
/// file all fall back to an empty document dated `today`; the next save will
/// overwrite whatever was on disk.
pub async fn load_data(path: &Path, today: NaiveDate) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::fresh(today)
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::fresh(today),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::fresh(today)
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Task};

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habit_storage_{tag}_{}_{}.json", std::process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn load_missing_file_starts_fresh() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let data = load_data(&temp_path("missing"), today).await;
        assert_eq!(data.start_date, "2024-03-10");
        assert!(data.tasks.is_empty());
        assert_eq!(data.goals.len(), 4);
    }

    #[tokio::test]
    async fn load_malformed_file_starts_fresh() {
        let path = temp_path("malformed");
        fs::write(&path, b"{ not json").await.unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let data = load_data(&path, today).await;
        assert_eq!(data.start_date, "2024-03-10");
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut data = AppData::fresh(today);
        data.tasks.insert(
            "2024-03-10".to_string(),
            vec![Task {
                task: "stretch".to_string(),
                priority: Priority::High,
                done: true,
            }],
        );
        data.streaks.insert("2024-03-10".to_string(), true);
        data.main_goal.goal = "run a marathon".to_string();
        data.main_goal.progress = 40;

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path, today).await;

        assert_eq!(loaded.start_date, data.start_date);
        assert_eq!(loaded.tasks["2024-03-10"].len(), 1);
        assert_eq!(loaded.tasks["2024-03-10"][0].task, "stretch");
        assert!(loaded.streaks["2024-03-10"]);
        assert_eq!(loaded.main_goal.progress, 40);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn load_file_without_main_goal_defaults_it() {
        let path = temp_path("compat");
        let payload = br#"{
            "start_date": "2024-01-01",
            "tasks": {},
            "streaks": {"2024-01-01": true},
            "goals": {"weekly": []}
        }"#;
        fs::write(&path, payload.as_slice()).await.unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let data = load_data(&path, today).await;
        assert_eq!(data.start_date, "2024-01-01");
        assert_eq!(data.main_goal.progress, 0);
        assert!(data.main_goal.goal.is_empty());
        let _ = fs::remove_file(&path).await;
    }
}
