use axum::{Json, extract::State};

use super::AppState;
use crate::{
    error::ApiError,
    extract::{self, Path, Query},
    model::{
        request::TodoFilter,
        simple_response::Message,
        todo::{NewTodo, Todo, TodoPatch},
    },
};

/// Get all todos, optionally only those of one student
pub async fn get_todos(
    State(db): State<AppState>,
    Query(filter): Query<TodoFilter>,
) -> Json<Vec<Todo>> {
    let store = db.todos.lock().await;
    Json(store.list(filter.email()))
}

pub async fn create_todo(
    State(db): State<AppState>,
    extract::Json(new_todo): extract::Json<NewTodo>,
) -> Json<Todo> {
    let mut store = db.todos.lock().await;
    Json(store.create(new_todo))
}

/// Only the fields present in the body are changed
pub async fn update_todo(
    State(db): State<AppState>,
    Path(todo_id): Path<u64>,
    extract::Json(patch): extract::Json<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let mut store = db.todos.lock().await;
    Ok(Json(store.update(todo_id, patch)?))
}

pub async fn delete_todo(
    State(db): State<AppState>,
    Path(todo_id): Path<u64>,
) -> Result<Json<Message>, ApiError> {
    let mut store = db.todos.lock().await;
    let message = store.delete(todo_id)?;
    Ok(Json(Message::new(message)))
}
