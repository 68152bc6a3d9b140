use test_utils::{builder::TestBuilder, factory};

use super::notification_bus;
use crate::{
    model::{notification::NotificationCategory, organization::OrgRole},
    server::{
        data::{notification::NotificationRepository, organization::OrganizationRepository},
        error::AppError,
        model::organization::OrganizationParam,
        service::organization::OrganizationService,
    },
};

fn org_param(name: &str) -> OrganizationParam {
    OrganizationParam {
        name: name.to_string(),
        description: "Komunitas".to_string(),
        address: "Jl. Merdeka 1".to_string(),
        phone: "0811111111".to_string(),
        category: "Community".to_string(),
    }
}

/// Tests that the creator becomes admin of the new organization.
///
/// Expected: creator listed with role Admin
#[tokio::test]
async fn creator_becomes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;

    let service = OrganizationService::new(db, &events);
    let org = service.create(user.id, org_param("Kolab")).await?;

    let mine = service.list_mine(user.id).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].organization.id, org.id);
    assert_eq!(mine[0].role, OrgRole::Admin);

    Ok(())
}

/// Tests the invitation flow.
///
/// Expected: invitee notified with Organisasi, role Member after accepting
#[tokio::test]
async fn invite_and_accept() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;

    let service = OrganizationService::new(db, &events);
    let org = service.create(admin.id, org_param("Kolab")).await?;
    service.invite(admin.id, org.id, invitee.id).await?;

    assert!(matches!(
        service.invite(admin.id, org.id, invitee.id).await,
        Err(AppError::BadRequest(_))
    ));

    let notifications = NotificationRepository::new(db).get_by_user(invitee.id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].category, NotificationCategory::Organisasi);

    service.accept_invite(invitee.id, org.id).await?;
    assert_eq!(
        OrganizationRepository::new(db)
            .get_role(org.id, invitee.id)
            .await?,
        Some(OrgRole::Member)
    );

    assert!(matches!(
        service.accept_invite(invitee.id, org.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests that members cannot edit the organization.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn member_cannot_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_user(db).await?;
    let member = factory::user::create_user(db).await?;

    let service = OrganizationService::new(db, &events);
    let org = service.create(admin.id, org_param("Kolab")).await?;
    factory::organization::add_member(db, org.id, member.id, "Member").await?;

    assert!(matches!(
        service.update(member.id, org.id, org_param("Taken")).await,
        Err(AppError::AuthErr(_))
    ));

    Ok(())
}

/// Tests that the only admin cannot leave.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn last_admin_cannot_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_user(db).await?;

    let service = OrganizationService::new(db, &events);
    let org = service.create(admin.id, org_param("Kolab")).await?;

    assert!(matches!(
        service.remove_member(admin.id, org.id, admin.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
