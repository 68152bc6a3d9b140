use super::*;

/// Tests that deleting an organization cascades to its projects.
///
/// Expected: Ok(true) and the project row is gone
#[tokio::test]
async fn cascades_to_projects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (org, project) = factory::helpers::create_project_with_dependencies(db, user.id).await?;

    let repo = OrganizationRepository::new(db);

    assert!(repo.delete(org.id).await?);
    assert!(repo.find_by_id(org.id).await?.is_none());

    let project_repo = crate::server::data::project::ProjectRepository::new(db);
    assert!(project_repo.find_by_id(project.id).await?.is_none());

    Ok(())
}
