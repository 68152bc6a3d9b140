use super::*;

/// Tests listing every edge a user takes part in.
///
/// Expected: the two edges touching `a`, not the edge between `b` and `c`
#[tokio::test]
async fn lists_edges_on_both_sides() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;
    let c = factory::user::create_user(db).await?;
    factory::friend::create_friend_edge(db, a.id, b.id, "Pending").await?;
    factory::friend::create_friend_edge(db, c.id, a.id, "Accepted").await?;
    factory::friend::create_friend_edge(db, b.id, c.id, "Accepted").await?;

    let repo = FriendRepository::new(db);
    let edges = repo.get_edges_for_user(a.id).await?;

    let mut others: Vec<i32> = edges.iter().map(|edge| edge.other(a.id)).collect();
    others.sort();
    assert_eq!(others, vec![b.id, c.id]);

    Ok(())
}
