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
        organization::{
            CreateOrganizationDto, InviteMemberDto, MyOrganizationDto, OrganizationDto,
            OrganizationMemberDto,
        },
        project::ProjectDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::organization::OrganizationParam,
        service::{organization::OrganizationService, project::ProjectService},
        state::AppState,
    },
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "organization";

/// Create an organization.
///
/// The logged-in user becomes its first admin.
///
/// # Returns
/// - `201 Created` - Organization created
/// - `400 Bad Request` - Invalid input
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    request_body = CreateOrganizationDto,
    responses(
        (status = 201, description = "Organization created", body = OrganizationDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrganizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = OrganizationParam::from_dto(payload)?;
    let organization = OrganizationService::new(&state.db, &state.events)
        .create(user.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(organization.into_dto())))
}

/// Organizations the logged-in user belongs to or is invited to, with their role.
#[utoipa::path(
    get,
    path = "/api/organizations",
    tag = ORGANIZATION_TAG,
    responses(
        (status = 200, description = "Organizations of the user", body = Vec<MyOrganizationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_organizations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let organizations = OrganizationService::new(&state.db, &state.events)
        .list_mine(user.id)
        .await?;
    let organizations_dto: Vec<MyOrganizationDto> =
        organizations.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(organizations_dto)))
}

#[utoipa::path(
    get,
    path = "/api/organizations/{org_id}",
    tag = ORGANIZATION_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization", body = OrganizationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organization(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let organization = OrganizationService::new(&state.db, &state.events)
        .get(user.id, org_id)
        .await?;

    Ok((StatusCode::OK, Json(organization.into_dto())))
}

/// Update an organization. Organization admins only.
#[utoipa::path(
    put,
    path = "/api/organizations/{org_id}",
    tag = ORGANIZATION_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    request_body = CreateOrganizationDto,
    responses(
        (status = 200, description = "Organization updated", body = OrganizationDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an organization admin", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_organization(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
    Json(payload): Json<CreateOrganizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = OrganizationParam::from_dto(payload)?;
    let organization = OrganizationService::new(&state.db, &state.events)
        .update(user.id, org_id, param)
        .await?;

    Ok((StatusCode::OK, Json(organization.into_dto())))
}

/// Delete an organization and everything in it. Organization admins only.
#[utoipa::path(
    delete,
    path = "/api/organizations/{org_id}",
    tag = ORGANIZATION_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    responses(
        (status = 204, description = "Organization deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an organization admin", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    OrganizationService::new(&state.db, &state.events)
        .delete(user.id, org_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/organizations/{org_id}/members",
    tag = ORGANIZATION_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Members and invitees", body = Vec<OrganizationMemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let members = OrganizationService::new(&state.db, &state.events)
        .members(user.id, org_id)
        .await?;
    let members_dto: Vec<OrganizationMemberDto> =
        members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members_dto)))
}

/// Invite a user into the organization. Organization admins only.
///
/// # Returns
/// - `201 Created` - Invitation sent
/// - `400 Bad Request` - User is already a member or invited
/// - `404 Not Found` - Organization or user does not exist
#[utoipa::path(
    post,
    path = "/api/organizations/{org_id}/members",
    tag = ORGANIZATION_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    request_body = InviteMemberDto,
    responses(
        (status = 201, description = "Invitation sent", body = MessageDto),
        (status = 400, description = "User is already a member or invited", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an organization admin", body = ErrorDto),
        (status = 404, description = "Organization or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite_member(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
    Json(payload): Json<InviteMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    OrganizationService::new(&state.db, &state.events)
        .invite(user.id, org_id, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("Invitation sent"))))
}

/// Accept a pending invitation to the organization.
#[utoipa::path(
    post,
    path = "/api/organizations/{org_id}/accept",
    tag = ORGANIZATION_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Invitation accepted", body = MessageDto),
        (status = 400, description = "No pending invitation", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invite(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    OrganizationService::new(&state.db, &state.events)
        .accept_invite(user.id, org_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Invitation accepted"))))
}

/// Remove a member, leave, or decline an invitation.
///
/// Admins may remove anyone; other users may only remove themselves.
#[utoipa::path(
    delete,
    path = "/api/organizations/{org_id}/members/{user_id}",
    tag = ORGANIZATION_TAG,
    params(
        ("org_id" = i32, Path, description = "Organization ID"),
        ("user_id" = i32, Path, description = "Member to remove")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "The last admin cannot leave", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "Organization or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((org_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    OrganizationService::new(&state.db, &state.events)
        .remove_member(user.id, org_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Projects of the organization, newest first.
#[utoipa::path(
    get,
    path = "/api/organizations/{org_id}/projects",
    tag = ORGANIZATION_TAG,
    params(("org_id" = i32, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Projects of the organization", body = Vec<ProjectDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the organization", body = ErrorDto),
        (status = 404, description = "Organization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    session: Session,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let projects = ProjectService::new(&state.db, &state.events)
        .list_by_org(user.id, org_id)
        .await?;
    let projects_dto: Vec<ProjectDto> = projects.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(projects_dto)))
}
