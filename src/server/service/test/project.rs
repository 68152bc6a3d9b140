use test_utils::{builder::TestBuilder, factory};

use super::notification_bus;
use crate::{
    model::project::ProjectRole,
    server::{
        data::{chatroom::ChatroomRepository, project::ProjectRepository},
        error::AppError,
        model::project::{CreateProjectParam, DEFAULT_CHATROOM_NAME},
        service::project::ProjectService,
    },
};

fn project_param(org_id: i32) -> CreateProjectParam {
    CreateProjectParam {
        org_id,
        name: "Website".to_string(),
        description: "Situs komunitas".to_string(),
    }
}

/// Tests that creating a project also creates its discussion room.
///
/// Expected: creator is project Admin and member of the "Diskusi" room
#[tokio::test]
async fn create_sets_up_admin_and_chatroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;
    let org = factory::organization::create_organization(db).await?;
    factory::organization::add_member(db, org.id, user.id, "Member").await?;

    let project = ProjectService::new(db, &events)
        .create(user.id, project_param(org.id))
        .await?;

    assert_eq!(
        ProjectRepository::new(db)
            .get_role(project.id, user.id)
            .await?,
        Some(ProjectRole::Admin)
    );

    let chatroom_repo = ChatroomRepository::new(db);
    let chatroom = chatroom_repo
        .find_by_project(project.id)
        .await?
        .expect("project chatroom should exist");
    assert_eq!(chatroom.name, DEFAULT_CHATROOM_NAME);
    assert!(chatroom_repo.is_member(chatroom.id, user.id).await?);

    Ok(())
}

/// Tests that only organization members can create projects.
///
/// Expected: Err(AuthErr) for an invited user
#[tokio::test]
async fn invited_org_user_cannot_create() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let user = factory::user::create_user(db).await?;
    let org = factory::organization::create_organization(db).await?;
    factory::organization::add_member(db, org.id, user.id, "Invited").await?;

    let result = ProjectService::new(db, &events)
        .create(user.id, project_param(org.id))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests inviting an organization member and accepting.
///
/// Expected: Dev role and membership of the discussion room
#[tokio::test]
async fn accepted_invite_joins_chatroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_user(db).await?;
    let dev = factory::user::create_user(db).await?;
    let org = factory::organization::create_organization(db).await?;
    factory::organization::add_member(db, org.id, admin.id, "Admin").await?;
    factory::organization::add_member(db, org.id, dev.id, "Member").await?;

    let service = ProjectService::new(db, &events);
    let project = service.create(admin.id, project_param(org.id)).await?;
    service.invite(admin.id, project.id, dev.id).await?;
    service.accept_invite(dev.id, project.id).await?;

    assert_eq!(
        ProjectRepository::new(db)
            .get_role(project.id, dev.id)
            .await?,
        Some(ProjectRole::Dev)
    );

    let chatroom_repo = ChatroomRepository::new(db);
    let chatroom = chatroom_repo
        .find_by_project(project.id)
        .await?
        .expect("project chatroom should exist");
    assert!(chatroom_repo.is_member(chatroom.id, dev.id).await?);

    Ok(())
}

/// Tests inviting someone outside the organization.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn invite_requires_org_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let admin = factory::user::create_user(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let (_, project) = factory::helpers::create_project_with_dependencies(db, admin.id).await?;

    let result = ProjectService::new(db, &events)
        .invite(admin.id, project.id, outsider.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
