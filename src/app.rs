use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/start-date", post(handlers::set_start_date))
        .route("/api/tasks/today", get(handlers::get_today_tasks))
        .route("/api/tasks", post(handlers::add_task))
        .route("/api/tasks/done", post(handlers::set_task_done))
        .route("/api/tasks/delete", post(handlers::delete_task))
        .route("/api/goals", get(handlers::get_goals).post(handlers::add_goal))
        .route("/api/goals/done", post(handlers::set_goal_done))
        .route("/api/goals/delete", post(handlers::delete_goal))
        .route("/api/main-goal", post(handlers::set_main_goal))
        .route("/api/streak/reset", post(handlers::reset_streak))
        .route("/api/streak/break", post(handlers::break_streak))
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
