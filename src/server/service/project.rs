//! Projects, their memberships and their discussion room.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{organization::OrgRole, project::ProjectRole},
    server::{
        data::{
            chatroom::ChatroomRepository, organization::OrganizationRepository,
            project::ProjectRepository,
        },
        error::AppError,
        model::{
            event::DomainEvent,
            project::{
                CreateProjectParam, Project, ProjectMember, UpdateProjectParam,
                DEFAULT_CHATROOM_NAME,
            },
        },
        service::{
            access::{find_project, load_actor, require_org_role, require_project_role},
            event::EventBus,
        },
    },
};

const ANY_ROLE: &[ProjectRole] = &[ProjectRole::Admin, ProjectRole::Dev, ProjectRole::Invited];

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Creates a project inside an organization.
    ///
    /// The creator becomes project admin and the first member of the project's
    /// discussion room. All three writes share one transaction.
    ///
    /// # Returns
    /// - `Ok(Project)` - Created project
    /// - `Err(AppError::NotFound)` - Organization does not exist
    /// - `Err(AppError::AuthErr)` - Actor is not an admin or member of the organization
    pub async fn create(
        &self,
        actor_id: i32,
        param: CreateProjectParam,
    ) -> Result<Project, AppError> {
        require_org_role(
            self.db,
            param.org_id,
            actor_id,
            &[OrgRole::Admin, OrgRole::Member],
        )
        .await?;

        let txn = self.db.begin().await?;
        let project = ProjectRepository::new(&txn).create(param).await?;
        ProjectRepository::new(&txn)
            .add_member(project.id, actor_id, ProjectRole::Admin)
            .await?;

        let chatroom_repo = ChatroomRepository::new(&txn);
        let chatroom = chatroom_repo
            .create(DEFAULT_CHATROOM_NAME.to_string(), Some(project.id))
            .await?;
        chatroom_repo.add_member(chatroom.id, actor_id).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} created project {} in organization {}",
            actor_id,
            project.id,
            project.org_id
        );

        Ok(project)
    }

    pub async fn get(&self, actor_id: i32, project_id: i32) -> Result<Project, AppError> {
        require_project_role(self.db, project_id, actor_id, ANY_ROLE).await?;
        find_project(self.db, project_id).await
    }

    /// Projects of an organization, newest first. Requires organization membership.
    pub async fn list_by_org(&self, actor_id: i32, org_id: i32) -> Result<Vec<Project>, AppError> {
        require_org_role(self.db, org_id, actor_id, &[OrgRole::Admin, OrgRole::Member]).await?;
        Ok(ProjectRepository::new(self.db).get_by_org(org_id).await?)
    }

    pub async fn update(
        &self,
        actor_id: i32,
        param: UpdateProjectParam,
    ) -> Result<Project, AppError> {
        require_project_role(self.db, param.id, actor_id, &[ProjectRole::Admin]).await?;

        ProjectRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn delete(&self, actor_id: i32, project_id: i32) -> Result<(), AppError> {
        require_project_role(self.db, project_id, actor_id, &[ProjectRole::Admin]).await?;
        ProjectRepository::new(self.db).delete(project_id).await?;
        Ok(())
    }

    /// Invites a member of the owning organization into the project.
    ///
    /// # Returns
    /// - `Ok(())` - Invitation stored and the user notified
    /// - `Err(AppError::BadRequest)` - User is not an organization member, or is
    ///   already in the project
    /// - `Err(AppError::AuthErr)` - Actor is not a project admin
    pub async fn invite(
        &self,
        actor_id: i32,
        project_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        require_project_role(self.db, project_id, actor_id, &[ProjectRole::Admin]).await?;
        let project = find_project(self.db, project_id).await?;

        let org_role = OrganizationRepository::new(self.db)
            .get_role(project.org_id, user_id)
            .await?;
        if !org_role.is_some_and(|role| role.is_member()) {
            return Err(AppError::BadRequest(
                "Only organization members can be invited to a project".to_string(),
            ));
        }

        let repo = ProjectRepository::new(self.db);
        if repo.get_role(project_id, user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "User is already a member or invited".to_string(),
            ));
        }
        repo.add_member(project_id, user_id, ProjectRole::Invited)
            .await?;

        let inviter = load_actor(self.db, actor_id).await?;
        self.events
            .emit(DomainEvent::ProjectInvited {
                project_id,
                project_name: project.name,
                inviter_name: inviter.name,
                user_id,
            })
            .await;

        Ok(())
    }

    /// Accepts a project invitation; the actor becomes a dev and joins the discussion room.
    pub async fn accept_invite(&self, actor_id: i32, project_id: i32) -> Result<(), AppError> {
        find_project(self.db, project_id).await?;

        match ProjectRepository::new(self.db)
            .get_role(project_id, actor_id)
            .await?
        {
            Some(ProjectRole::Invited) => {}
            Some(_) => {
                return Err(AppError::BadRequest(
                    "You are already a member of this project".to_string(),
                ))
            }
            None => {
                return Err(AppError::BadRequest(
                    "You have no invitation to this project".to_string(),
                ))
            }
        }

        let txn = self.db.begin().await?;
        ProjectRepository::new(&txn)
            .set_role(project_id, actor_id, ProjectRole::Dev)
            .await?;
        let chatroom_repo = ChatroomRepository::new(&txn);
        if let Some(chatroom) = chatroom_repo.find_by_project(project_id).await? {
            chatroom_repo.add_member(chatroom.id, actor_id).await?;
        }
        txn.commit().await?;

        Ok(())
    }

    pub async fn members(
        &self,
        actor_id: i32,
        project_id: i32,
    ) -> Result<Vec<ProjectMember>, AppError> {
        require_project_role(self.db, project_id, actor_id, ANY_ROLE).await?;
        ProjectRepository::new(self.db).get_members(project_id).await
    }

    /// Removes a member or invitation and takes the user out of the discussion room.
    ///
    /// Admins may remove anyone; others may only remove themselves. The last
    /// admin cannot leave.
    pub async fn remove_member(
        &self,
        actor_id: i32,
        project_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        if actor_id == user_id {
            require_project_role(self.db, project_id, actor_id, ANY_ROLE).await?;
        } else {
            require_project_role(self.db, project_id, actor_id, &[ProjectRole::Admin]).await?;
        }

        let members = ProjectRepository::new(self.db)
            .get_members(project_id)
            .await?;
        let Some(target) = members.iter().find(|member| member.user.id == user_id) else {
            return Err(AppError::NotFound("Member not found".to_string()));
        };

        let admins = members
            .iter()
            .filter(|member| member.role == ProjectRole::Admin)
            .count();
        if target.role == ProjectRole::Admin && admins == 1 {
            return Err(AppError::BadRequest(
                "The last admin cannot leave the project".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        ProjectRepository::new(&txn)
            .remove_member(project_id, user_id)
            .await?;
        let chatroom_repo = ChatroomRepository::new(&txn);
        if let Some(chatroom) = chatroom_repo.find_by_project(project_id).await? {
            chatroom_repo.remove_member(chatroom.id, user_id).await?;
        }
        txn.commit().await?;

        Ok(())
    }
}
