use super::*;

/// Tests updating name and about text.
///
/// Expected: Ok(Some(User)) with the new values
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateUserParam {
            id: user.id,
            name: "Nama Baru".to_string(),
            about: Some("Desainer".to_string()),
        })
        .await?
        .expect("user should exist");

    assert_eq!(updated.name, "Nama Baru");
    assert_eq!(updated.about.as_deref(), Some("Desainer"));
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateUserParam {
            id: 404,
            name: "Ghost".to_string(),
            about: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
