use super::*;

/// Tests searching users by a name fragment.
///
/// Expected: Ok(Vec<User>) containing only the matching users, ordered by name
#[tokio::test]
async fn finds_users_containing_query() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Budi Santoso").build().await?;
    factory::user::UserFactory::new(db).name("Andi Budiman").build().await?;
    factory::user::UserFactory::new(db).name("Sari").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.search_by_name("Budi").await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Andi Budiman", "Budi Santoso"]);

    Ok(())
}
