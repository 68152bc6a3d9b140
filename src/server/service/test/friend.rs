use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

use super::notification_bus;
use crate::{
    model::{friend::FriendStatus, notification::NotificationCategory},
    server::{
        data::notification::NotificationRepository,
        error::AppError,
        model::preference::{PreferenceKey, UpdatePreferenceParam},
        service::{friend::FriendService, preference::PreferenceService},
    },
};

/// Tests the full request and acceptance flow between two users.
///
/// Expected: Sent/Pending before acceptance, Accepted for both afterwards, and
/// the original sender holds a Teman notification naming the acceptor
#[tokio::test]
async fn request_then_accept_notifies_sender() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let andi = UserFactory::new(db).name("Andi").build().await?;
    let budi = UserFactory::new(db).name("Budi").build().await?;

    let service = FriendService::new(db, &events);
    assert_eq!(service.add_friend(andi.id, budi.id).await?, FriendStatus::Sent);
    assert_eq!(
        service.get_friend_status(andi.id, budi.id).await?,
        FriendStatus::Sent
    );
    assert_eq!(
        service.get_friend_status(budi.id, andi.id).await?,
        FriendStatus::Pending
    );

    assert_eq!(
        service.accept_friend(budi.id, andi.id).await?,
        FriendStatus::Accepted
    );
    assert_eq!(
        service.get_friend_status(andi.id, budi.id).await?,
        FriendStatus::Accepted
    );
    assert_eq!(
        service.get_friend_status(budi.id, andi.id).await?,
        FriendStatus::Accepted
    );

    let notifications = NotificationRepository::new(db).get_by_user(andi.id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].category, NotificationCategory::Teman);
    assert!(notifications[0].description.contains("Budi"));

    let received = NotificationRepository::new(db).get_by_user(budi.id).await?;
    assert_eq!(received.len(), 1);
    assert!(received[0].description.contains("Andi"));

    Ok(())
}

/// Tests that a second request in either direction is refused.
///
/// Expected: Err(BadRequest) for the repeat and for the reverse request
#[tokio::test]
async fn refuses_request_when_edge_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;

    let service = FriendService::new(db, &events);
    service.add_friend(a.id, b.id).await?;

    assert!(matches!(
        service.add_friend(a.id, b.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add_friend(b.id, a.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests requests to yourself and to a missing user.
///
/// Expected: Err(BadRequest) for self, Err(NotFound) for an unknown id
#[tokio::test]
async fn refuses_self_and_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let a = factory::user::create_user(db).await?;

    let service = FriendService::new(db, &events);
    assert!(matches!(
        service.add_friend(a.id, a.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add_friend(a.id, a.id + 1000).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a recipient with `friend_invite` off cannot be sent requests.
///
/// Expected: Err(BadRequest) and no edge stored
#[tokio::test]
async fn honors_friend_invite_off() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;

    PreferenceService::new(db)
        .save(
            b.id,
            UpdatePreferenceParam {
                values: vec![(PreferenceKey::FriendInvite, "off")],
            },
        )
        .await?;

    let service = FriendService::new(db, &events);
    assert!(matches!(
        service.add_friend(a.id, b.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(
        service.get_friend_status(a.id, b.id).await?,
        FriendStatus::None
    );

    Ok(())
}

/// Tests that only the recipient of a pending request can accept it.
///
/// Expected: Err(BadRequest) when the sender tries to accept
#[tokio::test]
async fn sender_cannot_accept_own_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;

    let service = FriendService::new(db, &events);
    service.add_friend(a.id, b.id).await?;

    assert!(matches!(
        service.accept_friend(a.id, b.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests deleting a pending request from the recipient's side.
///
/// Expected: status None afterwards, and a second delete is Err(BadRequest)
#[tokio::test]
async fn delete_rejects_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let a = factory::user::create_user(db).await?;
    let b = factory::user::create_user(db).await?;

    let service = FriendService::new(db, &events);
    service.add_friend(a.id, b.id).await?;
    service.delete_friend(b.id, a.id).await?;

    assert_eq!(
        service.get_friend_status(a.id, b.id).await?,
        FriendStatus::None
    );
    assert!(matches!(
        service.delete_friend(a.id, b.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests listing friends filtered by status.
///
/// Expected: one accepted friend and one outgoing request
#[tokio::test]
async fn lists_friends_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = notification_bus(db);

    let me = factory::user::create_user(db).await?;
    let friend = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    factory::friend::create_friend_edge(db, friend.id, me.id, "Accepted").await?;
    factory::friend::create_friend_edge(db, me.id, stranger.id, "Pending").await?;

    let service = FriendService::new(db, &events);

    let all = service.get_friends(me.id, None).await?;
    assert_eq!(all.len(), 2);

    let accepted = service
        .get_friends(me.id, Some(FriendStatus::Accepted))
        .await?;
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].user.id, friend.id);

    let sent = service.get_friends(me.id, Some(FriendStatus::Sent)).await?;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user.id, stranger.id);

    Ok(())
}
