use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an account and logs it in. The first account registered on a fresh
/// installation becomes a site admin.
///
/// # Returns
/// - `201 Created` - Account created and logged in
/// - `400 Bad Request` - Invalid input or e-mail already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid input or e-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;
    let user = AuthService::new(&state.db).register(param).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;
    tracing::info!("User {} registered", user.id);

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with e-mail and password.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - E-mail or password is wrong
/// - `403 Forbidden` - Account is suspended
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid e-mail or password", body = ErrorDto),
        (status = 403, description = "Account is suspended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and discard the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Get the logged-in user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
