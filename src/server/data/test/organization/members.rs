use super::*;

/// Tests role lookup, promotion and removal of a member.
///
/// Expected: role reflects each change; removed user has no role
#[tokio::test]
async fn manages_member_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user(db).await?;
    let member = factory::user::create_user(db).await?;

    let repo = OrganizationRepository::new(db);
    let org = repo.create(org_param("Kolab")).await?;
    repo.add_member(org.id, admin.id, OrgRole::Admin).await?;
    repo.add_member(org.id, member.id, OrgRole::Invited).await?;

    assert_eq!(repo.get_role(org.id, member.id).await?, Some(OrgRole::Invited));

    repo.set_role(org.id, member.id, OrgRole::Member).await?;
    assert_eq!(repo.get_role(org.id, member.id).await?, Some(OrgRole::Member));

    let members = repo.get_members(org.id).await?;
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user.id, admin.id);
    assert_eq!(members[0].role, OrgRole::Admin);

    assert!(repo.remove_member(org.id, member.id).await?);
    assert_eq!(repo.get_role(org.id, member.id).await?, None);

    Ok(())
}
