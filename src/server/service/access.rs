//! Membership checks shared by the organization, project and task services.
//!
//! Missing entities resolve to `NotFound` before membership is checked, so callers
//! can tell a bad id apart from a denied request.

use sea_orm::ConnectionTrait;

use crate::{
    model::{organization::OrgRole, project::ProjectRole},
    server::{
        data::{
            bucket::BucketRepository, organization::OrganizationRepository,
            project::ProjectRepository, user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            organization::Organization,
            project::{Bucket, Project},
            user::User,
        },
    },
};

/// Loads the acting user or fails with `UserNotInDatabase`.
pub async fn load_actor<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
}

/// Fresh admin check of the acting user.
pub async fn require_admin<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<User, AppError> {
    let user = load_actor(db, user_id).await?;
    if !user.is_admin {
        return Err(AuthError::AccessDenied(user_id, "admin privileges required".to_string()).into());
    }
    Ok(user)
}

pub async fn find_organization<C: ConnectionTrait>(
    db: &C,
    org_id: i32,
) -> Result<Organization, AppError> {
    OrganizationRepository::new(db)
        .find_by_id(org_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
}

/// Requires the user to hold one of `allowed` in the organization.
pub async fn require_org_role<C: ConnectionTrait>(
    db: &C,
    org_id: i32,
    user_id: i32,
    allowed: &[OrgRole],
) -> Result<OrgRole, AppError> {
    find_organization(db, org_id).await?;

    match OrganizationRepository::new(db).get_role(org_id, user_id).await? {
        Some(role) if allowed.contains(&role) => Ok(role),
        _ => Err(AuthError::AccessDenied(
            user_id,
            format!("requires role {:?} in organization {}", allowed, org_id),
        )
        .into()),
    }
}

pub async fn find_project<C: ConnectionTrait>(db: &C, project_id: i32) -> Result<Project, AppError> {
    ProjectRepository::new(db)
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
}

/// Requires the user to hold one of `allowed` in the project.
pub async fn require_project_role<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
    user_id: i32,
    allowed: &[ProjectRole],
) -> Result<ProjectRole, AppError> {
    find_project(db, project_id).await?;

    match ProjectRepository::new(db).get_role(project_id, user_id).await? {
        Some(role) if allowed.contains(&role) => Ok(role),
        _ => Err(AuthError::AccessDenied(
            user_id,
            format!("requires role {:?} in project {}", allowed, project_id),
        )
        .into()),
    }
}

/// Requires an accepted project membership (admin or dev).
pub async fn require_project_member<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
    user_id: i32,
) -> Result<ProjectRole, AppError> {
    require_project_role(db, project_id, user_id, &[ProjectRole::Admin, ProjectRole::Dev]).await
}

pub async fn find_bucket<C: ConnectionTrait>(db: &C, bucket_id: i32) -> Result<Bucket, AppError> {
    BucketRepository::new(db)
        .find_by_id(bucket_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bucket not found".to_string()))
}
