use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        friend::{FriendDto, FriendStatus, FriendStatusDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::friend::FriendService,
        state::AppState,
    },
};

/// Tag for grouping friend endpoints in OpenAPI documentation
pub static FRIEND_TAG: &str = "friend";

#[derive(Deserialize)]
pub struct FriendFilter {
    pub status: Option<FriendStatus>,
}

/// List the logged-in user's friends and requests.
///
/// # Returns
/// - `200 OK` - Friends and requests, newest first
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/friends",
    tag = FRIEND_TAG,
    params(("status" = Option<FriendStatus>, Query, description = "Only return edges with this status")),
    responses(
        (status = 200, description = "Friends and requests", body = Vec<FriendDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<FriendFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let friends = FriendService::new(&state.db, &state.events)
        .get_friends(user.id, filter.status)
        .await?;
    let friends_dto: Vec<FriendDto> = friends.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(friends_dto)))
}

/// Friend status between the logged-in user and another user.
#[utoipa::path(
    get,
    path = "/api/friends/{user_id}",
    tag = FRIEND_TAG,
    params(("user_id" = i32, Path, description = "Other user ID")),
    responses(
        (status = 200, description = "Friend status", body = FriendStatusDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friend_status(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = FriendService::new(&state.db, &state.events)
        .get_friend_status(user.id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(FriendStatusDto { status })))
}

/// Send a friend request.
///
/// # Returns
/// - `201 Created` - Request sent
/// - `400 Bad Request` - Already connected, self request, or the user does not accept requests
/// - `404 Not Found` - No such user
#[utoipa::path(
    post,
    path = "/api/friends/{user_id}",
    tag = FRIEND_TAG,
    params(("user_id" = i32, Path, description = "User to befriend")),
    responses(
        (status = 201, description = "Request sent", body = FriendStatusDto),
        (status = 400, description = "Request not allowed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_friend(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = FriendService::new(&state.db, &state.events)
        .add_friend(user.id, user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(FriendStatusDto { status })))
}

/// Accept a pending friend request from another user.
#[utoipa::path(
    post,
    path = "/api/friends/{user_id}/accept",
    tag = FRIEND_TAG,
    params(("user_id" = i32, Path, description = "User who sent the request")),
    responses(
        (status = 200, description = "Request accepted", body = FriendStatusDto),
        (status = 400, description = "No pending request from this user", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_friend(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = FriendService::new(&state.db, &state.events)
        .accept_friend(user.id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(FriendStatusDto { status })))
}

/// Unfriend, cancel a sent request, or reject a received one.
#[utoipa::path(
    delete,
    path = "/api/friends/{user_id}",
    tag = FRIEND_TAG,
    params(("user_id" = i32, Path, description = "Other user ID")),
    responses(
        (status = 200, description = "Friendship or request removed", body = MessageDto),
        (status = 400, description = "No friendship or request exists", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_friend(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FriendService::new(&state.db, &state.events)
        .delete_friend(user.id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Friendship removed"))))
}
