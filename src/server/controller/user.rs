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
        api::ErrorDto,
        preference::{PreferenceDto, UpdatePreferenceDto},
        user::{UpdateUserDto, UserDto, UserProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{preference::UpdatePreferenceParam, user::UpdateUserParam},
        service::{preference::PreferenceService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Get a user's profile.
///
/// Includes the friend status between the logged-in user and the profile owner.
///
/// # Returns
/// - `200 OK` - Profile with friend status
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = UserProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (user, status) = UserService::new(&state.db)
        .get_profile(viewer.id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_profile_dto(status))))
}

/// Search users by name.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(("q" = Option<String>, Query, description = "Part of the user name")),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let users = UserService::new(&state.db).search(&params.q).await?;
    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Update the logged-in user's profile.
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateUserParam::from_dto(user.id, payload)?;
    let updated = UserService::new(&state.db).update_profile(param).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Get the logged-in user's preferences, with defaults filled in.
#[utoipa::path(
    get,
    path = "/api/users/me/preferences",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Resolved preferences", body = PreferenceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let preference = PreferenceService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(preference.into_dto())))
}

/// Update some of the logged-in user's preferences.
///
/// Keys missing from the body keep their current value.
#[utoipa::path(
    put,
    path = "/api/users/me/preferences",
    tag = USER_TAG,
    request_body = UpdatePreferenceDto,
    responses(
        (status = 200, description = "Resolved preferences after the update", body = PreferenceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePreferenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let preference = PreferenceService::new(&state.db)
        .save(user.id, UpdatePreferenceParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(preference.into_dto())))
}
