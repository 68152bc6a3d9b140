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
        chatroom::{ChatroomDto, MessageItemDto, SendMessageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::chatroom::SendMessageParam,
        service::chatroom::ChatroomService, state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHATROOM_TAG: &str = "chatroom";

/// Rooms the logged-in user is a member of.
#[utoipa::path(
    get,
    path = "/api/chatrooms",
    tag = CHATROOM_TAG,
    responses(
        (status = 200, description = "Chatrooms of the user", body = Vec<ChatroomDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_chatrooms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let chatrooms = ChatroomService::new(&state.db, &state.events)
        .list_mine(user.id)
        .await?;
    let chatrooms_dto: Vec<ChatroomDto> = chatrooms.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(chatrooms_dto)))
}

/// Open the private room with a friend, creating it on first use.
///
/// # Returns
/// - `200 OK` - Private chatroom
/// - `400 Bad Request` - The other user is yourself or not a friend
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    post,
    path = "/api/chatrooms/private/{user_id}",
    tag = CHATROOM_TAG,
    params(("user_id" = i32, Path, description = "Friend to chat with")),
    responses(
        (status = 200, description = "Private chatroom", body = ChatroomDto),
        (status = 400, description = "Not friends", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn open_private_chatroom(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let chatroom = ChatroomService::new(&state.db, &state.events)
        .open_private(user.id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(chatroom.into_dto())))
}

/// Messages of a room, oldest first.
#[utoipa::path(
    get,
    path = "/api/chatrooms/{chatroom_id}/messages",
    tag = CHATROOM_TAG,
    params(("chatroom_id" = i32, Path, description = "Chatroom ID")),
    responses(
        (status = 200, description = "Messages", body = Vec<MessageItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the chatroom", body = ErrorDto),
        (status = 404, description = "Chatroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Path(chatroom_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = ChatroomService::new(&state.db, &state.events)
        .get_messages(user.id, chatroom_id)
        .await?;
    let messages_dto: Vec<MessageItemDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages_dto)))
}

/// Post a message to a room.
#[utoipa::path(
    post,
    path = "/api/chatrooms/{chatroom_id}/messages",
    tag = CHATROOM_TAG,
    params(("chatroom_id" = i32, Path, description = "Chatroom ID")),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message posted", body = MessageItemDto),
        (status = 400, description = "Message is empty", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the chatroom", body = ErrorDto),
        (status = 404, description = "Chatroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Path(chatroom_id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = SendMessageParam::new(chatroom_id, user.id, payload.message)?;
    let message = ChatroomService::new(&state.db, &state.events)
        .send_message(param)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}
