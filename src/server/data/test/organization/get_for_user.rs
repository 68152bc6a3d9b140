use super::*;

/// Tests listing organizations with the user's role in each.
///
/// Expected: both organizations with their roles, newest first
#[tokio::test]
async fn lists_organizations_with_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = OrganizationRepository::new(db);
    let owned = repo.create(org_param("Milik Sendiri")).await?;
    repo.add_member(owned.id, user.id, OrgRole::Admin).await?;
    let invited = repo.create(org_param("Undangan")).await?;
    repo.add_member(invited.id, user.id, OrgRole::Invited).await?;
    repo.create(org_param("Lain")).await?;

    let organizations = repo.get_for_user(user.id).await?;

    let summary: Vec<(i32, OrgRole)> = organizations
        .iter()
        .map(|o| (o.organization.id, o.role))
        .collect();
    assert_eq!(
        summary,
        vec![(invited.id, OrgRole::Invited), (owned.id, OrgRole::Admin)]
    );

    Ok(())
}
