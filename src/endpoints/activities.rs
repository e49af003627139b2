use axum::{Json, extract::State};

use super::AppState;
use crate::{
    error::ApiError,
    extract::{Path, Query},
    model::{activity::ActivityListing, request::EmailQuery, simple_response::Message},
};

/// Every activity, keyed by name, with its current participants
pub async fn get_activities(State(db): State<AppState>) -> Json<ActivityListing> {
    let registry = db.activities.lock().await;
    Json(registry.list_all())
}

/// Sign up a student for an activity
pub async fn signup_for_activity(
    State(db): State<AppState>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<Message>, ApiError> {
    let mut registry = db.activities.lock().await;
    let message = registry.sign_up(&activity_name, &email)?;
    Ok(Json(Message::new(message)))
}

/// Unregister a student from an activity
pub async fn unregister_from_activity(
    State(db): State<AppState>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> Result<Json<Message>, ApiError> {
    let mut registry = db.activities.lock().await;
    let message = registry.unregister(&activity_name, &email)?;
    Ok(Json(Message::new(message)))
}
