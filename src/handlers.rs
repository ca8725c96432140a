use crate::errors::AppError;
use crate::models::{
    AddGoalRequest, AddTaskRequest, AppData, BreakStreakResponse, ChartResponse, GoalDeleteRequest,
    GoalDoneRequest, GoalsResponse, MainGoalRequest, OverviewResponse, Priority, SegmentView,
    StartDateRequest, TaskDeleteRequest, TaskDoneRequest, TodayTasksResponse, DEFAULT_SEGMENTS,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use crate::{goals, streak, tasks};
use axum::{extract::State, response::Html, Json};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&overview(&data, today())))
}

pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let data = state.data.lock().await;
    Json(overview(&data, today()))
}

pub async fn set_start_date(
    State(state): State<AppState>,
    Json(payload): Json<StartDateRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&payload.start_date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("start_date must be YYYY-MM-DD"))?;

    let mut data = state.data.lock().await;
    data.start_date = date.to_string();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(overview(&data, today())))
}

pub async fn get_today_tasks(State(state): State<AppState>) -> Json<TodayTasksResponse> {
    let data = state.data.lock().await;
    Json(today_tasks(&data, &today().to_string()))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<TodayTasksResponse>, AppError> {
    let priority = Priority::parse(&payload.priority)
        .ok_or_else(|| AppError::bad_request("priority must be High, Medium or Low"))?;
    let day = today().to_string();

    let mut data = state.data.lock().await;
    tasks::add_task(&mut data, &day, &payload.name, priority);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(today_tasks(&data, &day)))
}

pub async fn set_task_done(
    State(state): State<AppState>,
    Json(payload): Json<TaskDoneRequest>,
) -> Result<Json<TodayTasksResponse>, AppError> {
    let day = today().to_string();

    let mut data = state.data.lock().await;
    tasks::set_task_done(&mut data, &day, payload.index, payload.done)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(today_tasks(&data, &day)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskDeleteRequest>,
) -> Result<Json<TodayTasksResponse>, AppError> {
    let day = today().to_string();

    let mut data = state.data.lock().await;
    tasks::delete_task(&mut data, &day, payload.index)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(today_tasks(&data, &day)))
}

pub async fn get_goals(State(state): State<AppState>) -> Json<GoalsResponse> {
    let data = state.data.lock().await;
    Json(goals_view(&data))
}

pub async fn add_goal(
    State(state): State<AppState>,
    Json(payload): Json<AddGoalRequest>,
) -> Result<Json<GoalsResponse>, AppError> {
    let mut data = state.data.lock().await;
    goals::add_goal(&mut data, &payload.segment, &payload.goal);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(goals_view(&data)))
}

pub async fn set_goal_done(
    State(state): State<AppState>,
    Json(payload): Json<GoalDoneRequest>,
) -> Result<Json<GoalsResponse>, AppError> {
    let mut data = state.data.lock().await;
    goals::set_goal_done(&mut data, &payload.segment, payload.index, payload.done)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(goals_view(&data)))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalDeleteRequest>,
) -> Result<Json<GoalsResponse>, AppError> {
    let mut data = state.data.lock().await;
    goals::delete_goal(&mut data, &payload.segment, payload.index)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(goals_view(&data)))
}

pub async fn set_main_goal(
    State(state): State<AppState>,
    Json(payload): Json<MainGoalRequest>,
) -> Result<Json<GoalsResponse>, AppError> {
    let mut data = state.data.lock().await;
    goals::set_main_goal(&mut data, &payload.goal, payload.progress);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(goals_view(&data)))
}

pub async fn reset_streak(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, AppError> {
    let now = today();

    let mut data = state.data.lock().await;
    streak::reset_today(&mut data, now);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(overview(&data, now)))
}

pub async fn break_streak(
    State(state): State<AppState>,
) -> Result<Json<BreakStreakResponse>, AppError> {
    let mut data = state.data.lock().await;
    let broken = streak::break_active_streak(&mut data);
    if broken.is_some() {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(BreakStreakResponse {
        broken: broken.is_some(),
        date: broken.map(|date| date.to_string()),
    }))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartResponse> {
    let data = state.data.lock().await;
    let entries = streak::parse_streaks(&data.streaks);
    Json(ChartResponse {
        months: streak::monthly_completed_counts(&entries),
    })
}

fn overview(data: &AppData, today: NaiveDate) -> OverviewResponse {
    let start = NaiveDate::parse_from_str(&data.start_date, "%Y-%m-%d").unwrap_or(today);
    let entries = streak::parse_streaks(&data.streaks);
    OverviewResponse {
        today: today.to_string(),
        start_date: start.to_string(),
        days_passed: (today - start).num_days() + 1,
        current_streak: streak::current_streak(&entries),
    }
}

fn today_tasks(data: &AppData, day: &str) -> TodayTasksResponse {
    TodayTasksResponse {
        date: day.to_string(),
        tasks: data.tasks.get(day).cloned().unwrap_or_default(),
        completed: data.streaks.get(day).copied().unwrap_or(false),
    }
}

fn goals_view(data: &AppData) -> GoalsResponse {
    // Standard segments first, in their natural order, then any extras.
    let mut segments = Vec::with_capacity(data.goals.len());
    for segment in DEFAULT_SEGMENTS {
        if let Some(goals) = data.goals.get(segment) {
            segments.push(segment_view(segment, goals));
        }
    }
    for (segment, goals) in &data.goals {
        if !DEFAULT_SEGMENTS.contains(&segment.as_str()) {
            segments.push(segment_view(segment, goals));
        }
    }

    GoalsResponse {
        segments,
        main_goal: data.main_goal.clone(),
    }
}

fn segment_view(segment: &str, goals: &[crate::models::Goal]) -> SegmentView {
    let progress = goals::segment_progress(goals);
    SegmentView {
        segment: segment.to_string(),
        goals: goals.to_vec(),
        done: progress.done,
        total: progress.total,
        pct: progress.pct,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
