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
        suspension::{CreateSuspensionDto, SuspensionDto, UpdateSuspensionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::suspension::{CreateSuspensionParam, UpdateSuspensionParam},
        service::suspension::SuspensionService,
        state::AppState,
    },
};

/// Tag for grouping suspension endpoints in OpenAPI documentation
pub static SUSPENSION_TAG: &str = "suspension";

/// Suspend a user until the given time.
///
/// # Returns
/// - `201 Created` - Suspension stored
/// - `400 Bad Request` - Expiry is not in the future
/// - `403 Forbidden` - Not a site admin
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    post,
    path = "/api/admin/suspensions",
    tag = SUSPENSION_TAG,
    request_body = CreateSuspensionDto,
    responses(
        (status = 201, description = "Suspension stored", body = SuspensionDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a site admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_suspension(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSuspensionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateSuspensionParam::from_dto(payload)?;
    let suspension = SuspensionService::new(&state.db).add(user.id, param).await?;

    Ok((StatusCode::CREATED, Json(suspension.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/suspensions",
    tag = SUSPENSION_TAG,
    responses(
        (status = 200, description = "All suspensions", body = Vec<SuspensionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a site admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suspensions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let suspensions = SuspensionService::new(&state.db).get_all(user.id).await?;
    let suspensions_dto: Vec<SuspensionDto> =
        suspensions.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(suspensions_dto)))
}

/// Suspension currently in force for a user.
///
/// # Returns
/// - `200 OK` - Active suspension
/// - `404 Not Found` - The user is not suspended
#[utoipa::path(
    get,
    path = "/api/admin/suspensions/user/{user_id}",
    tag = SUSPENSION_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Active suspension", body = SuspensionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a site admin", body = ErrorDto),
        (status = 404, description = "No active suspension", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_suspension(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(suspension) = SuspensionService::new(&state.db)
        .get_active_for_user(user.id, user_id)
        .await?
    else {
        return Err(AppError::NotFound(
            "User has no active suspension".to_string(),
        ));
    };

    Ok((StatusCode::OK, Json(suspension.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/suspensions/{suspension_id}",
    tag = SUSPENSION_TAG,
    params(("suspension_id" = i32, Path, description = "Suspension ID")),
    request_body = UpdateSuspensionDto,
    responses(
        (status = 200, description = "Suspension updated", body = SuspensionDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a site admin", body = ErrorDto),
        (status = 404, description = "Suspension not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_suspension(
    State(state): State<AppState>,
    session: Session,
    Path(suspension_id): Path<i32>,
    Json(payload): Json<UpdateSuspensionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateSuspensionParam::from_dto(suspension_id, payload)?;
    let suspension = SuspensionService::new(&state.db)
        .update(user.id, param)
        .await?;

    Ok((StatusCode::OK, Json(suspension.into_dto())))
}

/// Lift a suspension.
#[utoipa::path(
    delete,
    path = "/api/admin/suspensions/{suspension_id}",
    tag = SUSPENSION_TAG,
    params(("suspension_id" = i32, Path, description = "Suspension ID")),
    responses(
        (status = 204, description = "Suspension deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a site admin", body = ErrorDto),
        (status = 404, description = "Suspension not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_suspension(
    State(state): State<AppState>,
    session: Session,
    Path(suspension_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SuspensionService::new(&state.db)
        .delete(user.id, suspension_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
