use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SEGMENTS: [&str; 4] = ["weekly", "monthly", "3_months", "6_months"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task: String,
    pub priority: Priority,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub goal: String,
    pub done: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainGoal {
    pub goal: String,
    pub progress: u8,
}

/// The whole persisted document. Field names match the on-disk JSON of
/// earlier versions of the tracker, so existing files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppData {
    pub start_date: String,
    #[serde(default)]
    pub tasks: BTreeMap<String, Vec<Task>>,
    #[serde(default)]
    pub streaks: BTreeMap<String, bool>,
    #[serde(default)]
    pub goals: BTreeMap<String, Vec<Goal>>,
    #[serde(default)]
    pub main_goal: MainGoal,
}

impl AppData {
    /// Fresh document for a first run: empty collections plus the four
    /// standard goal segments, started today.
    pub fn fresh(start_date: chrono::NaiveDate) -> Self {
        let mut goals = BTreeMap::new();
        for segment in DEFAULT_SEGMENTS {
            goals.insert(segment.to_string(), Vec::new());
        }
        Self {
            start_date: start_date.to_string(),
            tasks: BTreeMap::new(),
            streaks: BTreeMap::new(),
            goals,
            main_goal: MainGoal::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub name: String,
    pub priority: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskDoneRequest {
    pub index: usize,
    pub done: bool,
}

#[derive(Debug, Deserialize)]
pub struct TaskDeleteRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct AddGoalRequest {
    pub segment: String,
    pub goal: String,
}

#[derive(Debug, Deserialize)]
pub struct GoalDoneRequest {
    pub segment: String,
    pub index: usize,
    pub done: bool,
}

#[derive(Debug, Deserialize)]
pub struct GoalDeleteRequest {
    pub segment: String,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct MainGoalRequest {
    pub goal: String,
    pub progress: i64,
}

#[derive(Debug, Deserialize)]
pub struct StartDateRequest {
    pub start_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub today: String,
    pub start_date: String,
    pub days_passed: i64,
    pub current_streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayTasksResponse {
    pub date: String,
    pub tasks: Vec<Task>,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct SegmentView {
    pub segment: String,
    pub goals: Vec<Goal>,
    pub done: usize,
    pub total: usize,
    pub pct: u8,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub segments: Vec<SegmentView>,
    pub main_goal: MainGoal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub completed: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    pub months: Vec<MonthlyPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BreakStreakResponse {
    pub broken: bool,
    pub date: Option<String>,
}
