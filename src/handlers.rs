use crate::errors::AppError;
use crate::models::{
    Habit, HabitResponse, LogRequest, NewHabitRequest, NewReminderRequest, Reminder,
    StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats, performance};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(&build_stats(&store)))
}

pub async fn get_habits(State(state): State<AppState>) -> Json<Vec<HabitResponse>> {
    let store = state.store.lock().await;
    Json(store.habits().iter().map(to_response).collect())
}

pub async fn get_reminders(State(state): State<AppState>) -> Json<Vec<Reminder>> {
    let store = state.store.lock().await;
    Json(store.reminders().to_vec())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    Json(build_stats(&store))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<(StatusCode, Json<HabitResponse>), AppError> {
    let mut store = state.store.lock().await;
    let habit = store
        .add_habit(
            &payload.name,
            payload.target.unwrap_or(1.0),
            payload.unit.as_deref().unwrap_or(""),
        )
        .ok_or_else(|| AppError::bad_request("habit name must not be empty"))?;

    info!("added habit {} ({})", habit.id, habit.name);
    Ok((StatusCode::CREATED, Json(to_response(habit))))
}

pub async fn log_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let mut store = state.store.lock().await;
    let habit = store
        .log_habit(id, payload.value)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;

    Ok(Json(to_response(habit)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if !store.delete_habit(id) {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }

    info!("deleted habit {id} and its reminders");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_reminder(
    State(state): State<AppState>,
    Json(payload): Json<NewReminderRequest>,
) -> Result<(StatusCode, Json<Reminder>), AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::bad_request("reminder message must not be empty"));
    }

    let mut store = state.store.lock().await;
    let reminder = store
        .add_reminder(
            payload.habit_id,
            &payload.message,
            payload.time.as_deref().unwrap_or("08:00 AM"),
        )
        .ok_or_else(|| AppError::not_found(format!("no habit with id {}", payload.habit_id)))?;

    Ok((StatusCode::CREATED, Json(reminder.clone())))
}

pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if !store.delete_reminder(id) {
        return Err(AppError::not_found(format!("no reminder with id {id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn to_response(habit: &Habit) -> HabitResponse {
    HabitResponse {
        performance: performance(habit),
        id: habit.id,
        name: habit.name.clone(),
        icon: habit.icon.clone(),
        target: habit.target,
        unit: habit.unit.clone(),
        color: habit.color.clone(),
        data: habit.data.clone(),
        streak: habit.streak,
    }
}
