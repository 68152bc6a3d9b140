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
        chatroom::ChatroomDto,
        organization::InviteMemberDto,
        project::{
            BucketDto, BucketNameDto, CreateProjectDto, ProjectDto, ProjectMemberDto,
            UpdateProjectDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::project::{CreateProjectParam, UpdateProjectParam},
        service::{bucket::BucketService, chatroom::ChatroomService, project::ProjectService},
        state::AppState,
    },
};

/// Tag for grouping project and bucket endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// Create a project inside an organization.
///
/// The creator becomes project admin. A discussion room is created with the project.
///
/// # Returns
/// - `201 Created` - Project created
/// - `400 Bad Request` - Invalid input
/// - `403 Forbidden` - Not a member of the organization
/// - `404 Not Found` - Organization does not exist
#[utoipa::path(
    post,
    path = "/api/organizations/{org_id}/projects",
    tag = PROJECT_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateProjectParam::from_dto(org_id, payload)?;
    let project = ProjectService::new(&state.db, &state.events)
        .create(user.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project", body = ProjectDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let project = ProjectService::new(&state.db, &state.events)
        .get(user.id, project_id)
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Update a project. Project admins only.
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a project admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateProjectParam::from_dto(project_id, payload)?;
    let project = ProjectService::new(&state.db, &state.events)
        .update(user.id, param)
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Delete a project with its buckets, tasks and discussion room. Project admins only.
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a project admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ProjectService::new(&state.db, &state.events)
        .delete(user.id, project_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/members",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Members and invitees", body = Vec<ProjectMemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let members = ProjectService::new(&state.db, &state.events)
        .members(user.id, project_id)
        .await?;
    let members_dto: Vec<ProjectMemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members_dto)))
}

/// Invite an organization member into the project. Project admins only.
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/members",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    request_body = InviteMemberDto,
    responses(
        (status = 201, description = "Invitation sent", body = MessageDto),
        (status = 400, description = "User is not in the organization or already in the project", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a project admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite_member(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<InviteMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ProjectService::new(&state.db, &state.events)
        .invite(user.id, project_id, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("Invitation sent"))))
}

/// Accept a pending project invitation and join the discussion room.
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/accept",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Invitation accepted", body = MessageDto),
        (status = 400, description = "No pending invitation", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invite(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ProjectService::new(&state.db, &state.events)
        .accept_invite(user.id, project_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Invitation accepted"))))
}

/// Remove a member, leave, or decline an invitation.
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}/members/{user_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("user_id" = i32, Path, description = "Member to remove")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "The last admin cannot leave", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "Project or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((project_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ProjectService::new(&state.db, &state.events)
        .remove_member(user.id, project_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Discussion room of the project.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/chatroom",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project chatroom", body = ChatroomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Project or chatroom not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chatroom(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let chatroom = ChatroomService::new(&state.db, &state.events)
        .get_project_room(user.id, project_id)
        .await?;

    Ok((StatusCode::OK, Json(chatroom.into_dto())))
}

/// Create a bucket in the project.
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/buckets",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    request_body = BucketNameDto,
    responses(
        (status = 201, description = "Bucket created", body = BucketDto),
        (status = 400, description = "Name is empty", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bucket(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<BucketNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bucket = BucketService::new(&state.db)
        .create(user.id, project_id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(bucket.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/buckets",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Buckets of the project", body = Vec<BucketDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_buckets(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let buckets = BucketService::new(&state.db)
        .list(user.id, project_id)
        .await?;
    let buckets_dto: Vec<BucketDto> = buckets.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(buckets_dto)))
}

/// Rename a bucket. Project admins only.
#[utoipa::path(
    put,
    path = "/api/buckets/{bucket_id}",
    tag = PROJECT_TAG,
    params(("bucket_id" = i32, Path, description = "Bucket ID")),
    request_body = BucketNameDto,
    responses(
        (status = 200, description = "Bucket renamed", body = BucketDto),
        (status = 400, description = "Name is empty", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a project admin", body = ErrorDto),
        (status = 404, description = "Bucket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_bucket(
    State(state): State<AppState>,
    session: Session,
    Path(bucket_id): Path<i32>,
    Json(payload): Json<BucketNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bucket = BucketService::new(&state.db)
        .rename(user.id, bucket_id, payload.name)
        .await?;

    Ok((StatusCode::OK, Json(bucket.into_dto())))
}

/// Delete a bucket and its tasks. Project admins only.
#[utoipa::path(
    delete,
    path = "/api/buckets/{bucket_id}",
    tag = PROJECT_TAG,
    params(("bucket_id" = i32, Path, description = "Bucket ID")),
    responses(
        (status = 204, description = "Bucket deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a project admin", body = ErrorDto),
        (status = 404, description = "Bucket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bucket(
    State(state): State<AppState>,
    session: Session,
    Path(bucket_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    BucketService::new(&state.db)
        .delete(user.id, bucket_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
