use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::NotificationDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the logged-in user's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .get_for_user(user.id)
        .await?;
    let notifications_dto: Vec<NotificationDto> =
        notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

/// Mark one notification as read.
#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(("notification_id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Marked as read", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_notification(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .read(user.id, notification_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Notification marked as read"))))
}

/// Mark all of the logged-in user's notifications as read.
#[utoipa::path(
    post,
    path = "/api/notifications/read",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All marked as read", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_all_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let count = NotificationService::new(&state.db)
        .read_all(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} notifications marked as read", count))),
    ))
}

/// Delete one notification.
#[utoipa::path(
    delete,
    path = "/api/notifications/{notification_id}",
    tag = NOTIFICATION_TAG,
    params(("notification_id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .delete(user.id, notification_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
