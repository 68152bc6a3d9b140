use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        task::{AssignTaskDto, CreateTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::task::{CreateTaskParam, UpdateTaskParam},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Create a task at the end of a bucket.
///
/// # Returns
/// - `201 Created` - Task created
/// - `400 Bad Request` - Invalid input or the schedule ends before it starts
/// - `403 Forbidden` - Not a member of the project
/// - `404 Not Found` - Bucket does not exist
#[utoipa::path(
    post,
    path = "/api/buckets/{bucket_id}/tasks",
    tag = TASK_TAG,
    params(("bucket_id" = i32, Path, description = "Bucket ID")),
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Bucket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Path(bucket_id): Path<i32>,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateTaskParam::from_dto(bucket_id, payload)?;
    let task = TaskService::new(&state.db, &state.events)
        .add_task(user.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Tasks of a bucket in display order.
#[utoipa::path(
    get,
    path = "/api/buckets/{bucket_id}/tasks",
    tag = TASK_TAG,
    params(("bucket_id" = i32, Path, description = "Bucket ID")),
    responses(
        (status = 200, description = "Tasks of the bucket", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Bucket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
    Path(bucket_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tasks = TaskService::new(&state.db, &state.events)
        .get_tasks(user.id, bucket_id)
        .await?;
    let tasks_dto: Vec<TaskDto> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tasks_dto)))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task", body = TaskDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let task = TaskService::new(&state.db, &state.events)
        .get_task(user.id, task_id)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Update a task and optionally move it.
///
/// With `before_id` the task takes that task's position and bucket. With only
/// `bucket_id` it moves to the end of that bucket.
///
/// # Returns
/// - `200 OK` - Task updated
/// - `400 Bad Request` - Conflicting placement, move to another project, or invalid schedule
/// - `403 Forbidden` - Not a member of the project
/// - `404 Not Found` - Task, bucket or `before_id` task does not exist
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "Invalid input or placement", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Task or bucket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateTaskParam::from_dto(task_id, payload)?;
    let task = TaskService::new(&state.db, &state.events)
        .update_task(user.id, param)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TaskService::new(&state.db, &state.events)
        .delete_task(user.id, task_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a project member to the task.
///
/// # Returns
/// - `200 OK` - Assignee IDs after the change
/// - `400 Bad Request` - User is not a project member or already assigned
#[utoipa::path(
    post,
    path = "/api/tasks/{task_id}/assignees",
    tag = TASK_TAG,
    params(("task_id" = i32, Path, description = "Task ID")),
    request_body = AssignTaskDto,
    responses(
        (status = 200, description = "Assignee IDs", body = Vec<i32>),
        (status = 400, description = "User cannot be assigned", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(payload): Json<AssignTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assignees = TaskService::new(&state.db, &state.events)
        .assign(user.id, task_id, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(assignees)))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}/assignees/{user_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID"),
        ("user_id" = i32, Path, description = "Assignee to remove")
    ),
    responses(
        (status = 200, description = "Assignee IDs", body = Vec<i32>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Task not found or user not assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_task(
    State(state): State<AppState>,
    session: Session,
    Path((task_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assignees = TaskService::new(&state.db, &state.events)
        .unassign(user.id, task_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(assignees)))
}
