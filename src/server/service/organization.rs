use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::organization::OrgRole,
    server::{
        data::{organization::OrganizationRepository, user::UserRepository},
        error::AppError,
        model::{
            event::DomainEvent,
            organization::{MyOrganization, Organization, OrganizationMember, OrganizationParam},
        },
        service::{
            access::{find_organization, load_actor, require_org_role},
            event::EventBus,
        },
    },
};

const ANY_ROLE: &[OrgRole] = &[OrgRole::Admin, OrgRole::Member, OrgRole::Invited];

pub struct OrganizationService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> OrganizationService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Creates an organization with the actor as its first admin.
    pub async fn create(
        &self,
        actor_id: i32,
        param: OrganizationParam,
    ) -> Result<Organization, AppError> {
        let txn = self.db.begin().await?;
        let repo = OrganizationRepository::new(&txn);
        let organization = repo.create(param).await?;
        repo.add_member(organization.id, actor_id, OrgRole::Admin)
            .await?;
        txn.commit().await?;

        tracing::info!("User {} created organization {}", actor_id, organization.id);

        Ok(organization)
    }

    /// Organization details, visible to admins, members and invitees.
    pub async fn get(&self, actor_id: i32, org_id: i32) -> Result<Organization, AppError> {
        require_org_role(self.db, org_id, actor_id, ANY_ROLE).await?;
        find_organization(self.db, org_id).await
    }

    pub async fn list_mine(&self, actor_id: i32) -> Result<Vec<MyOrganization>, AppError> {
        OrganizationRepository::new(self.db)
            .get_for_user(actor_id)
            .await
    }

    pub async fn update(
        &self,
        actor_id: i32,
        org_id: i32,
        param: OrganizationParam,
    ) -> Result<Organization, AppError> {
        require_org_role(self.db, org_id, actor_id, &[OrgRole::Admin]).await?;

        OrganizationRepository::new(self.db)
            .update(org_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
    }

    /// Deletes the organization along with its projects, buckets and tasks.
    pub async fn delete(&self, actor_id: i32, org_id: i32) -> Result<(), AppError> {
        require_org_role(self.db, org_id, actor_id, &[OrgRole::Admin]).await?;
        OrganizationRepository::new(self.db).delete(org_id).await?;
        Ok(())
    }

    /// Invites a user into the organization.
    ///
    /// # Returns
    /// - `Ok(())` - Invitation stored and the user notified
    /// - `Err(AppError::NotFound)` - Organization or user does not exist
    /// - `Err(AppError::BadRequest)` - User is already a member or invited
    /// - `Err(AppError::AuthErr)` - Actor is not an organization admin
    pub async fn invite(&self, actor_id: i32, org_id: i32, user_id: i32) -> Result<(), AppError> {
        require_org_role(self.db, org_id, actor_id, &[OrgRole::Admin]).await?;

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = OrganizationRepository::new(self.db);
        if repo.get_role(org_id, user_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "User is already a member or invited".to_string(),
            ));
        }
        repo.add_member(org_id, user_id, OrgRole::Invited).await?;

        let organization = self.get(actor_id, org_id).await?;
        let inviter = load_actor(self.db, actor_id).await?;
        self.events
            .emit(DomainEvent::OrganizationInvited {
                org_id,
                org_name: organization.name,
                inviter_name: inviter.name,
                user_id,
            })
            .await;

        Ok(())
    }

    /// Turns the actor's pending invitation into a membership.
    pub async fn accept_invite(&self, actor_id: i32, org_id: i32) -> Result<(), AppError> {
        find_organization(self.db, org_id).await?;

        let repo = OrganizationRepository::new(self.db);
        match repo.get_role(org_id, actor_id).await? {
            Some(OrgRole::Invited) => {}
            Some(_) => {
                return Err(AppError::BadRequest(
                    "You are already a member of this organization".to_string(),
                ))
            }
            None => {
                return Err(AppError::BadRequest(
                    "You have no invitation to this organization".to_string(),
                ))
            }
        }

        repo.set_role(org_id, actor_id, OrgRole::Member).await?;

        Ok(())
    }

    pub async fn members(
        &self,
        actor_id: i32,
        org_id: i32,
    ) -> Result<Vec<OrganizationMember>, AppError> {
        require_org_role(self.db, org_id, actor_id, ANY_ROLE).await?;
        OrganizationRepository::new(self.db).get_members(org_id).await
    }

    /// Removes a membership or invitation.
    ///
    /// Admins may remove anyone; everyone else may only remove themselves, which
    /// covers leaving and declining an invitation. The last admin cannot leave.
    pub async fn remove_member(
        &self,
        actor_id: i32,
        org_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        if actor_id == user_id {
            require_org_role(self.db, org_id, actor_id, ANY_ROLE).await?;
        } else {
            require_org_role(self.db, org_id, actor_id, &[OrgRole::Admin]).await?;
        }

        let repo = OrganizationRepository::new(self.db);
        let members = repo.get_members(org_id).await?;
        let Some(target) = members.iter().find(|member| member.user.id == user_id) else {
            return Err(AppError::NotFound("Member not found".to_string()));
        };

        let admins = members
            .iter()
            .filter(|member| member.role == OrgRole::Admin)
            .count();
        if target.role == OrgRole::Admin && admins == 1 {
            return Err(AppError::BadRequest(
                "The last admin cannot leave the organization".to_string(),
            ));
        }

        repo.remove_member(org_id, user_id).await?;

        Ok(())
    }
}
