//! Friend request workflow.
//!
//! A request creates a pending edge from sender to recipient. Accepting rewrites
//! the edge with the acceptor as `from_user_id` and status `Accepted`. Deleting
//! removes the edge from either side, which also cancels or rejects a request.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::friend::FriendStatus,
    server::{
        data::{friend::FriendRepository, user::UserRepository},
        error::AppError,
        model::{event::DomainEvent, friend::EdgeStatus, friend::Friend},
        service::{access::load_actor, event::EventBus, preference::PreferenceService},
    },
};

pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> FriendService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Sends a friend request from `from` to `to`.
    ///
    /// # Returns
    /// - `Ok(FriendStatus::Sent)` - Request stored and recipient notified
    /// - `Err(AppError::BadRequest)` - Self request, an existing edge in either
    ///   direction, or the recipient does not accept friend requests
    /// - `Err(AppError::NotFound)` - Recipient does not exist
    pub async fn add_friend(&self, from: i32, to: i32) -> Result<FriendStatus, AppError> {
        if from == to {
            return Err(AppError::BadRequest(
                "You cannot send a friend request to yourself".to_string(),
            ));
        }

        if UserRepository::new(self.db).find_by_id(to).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = FriendRepository::new(self.db);
        match repo.get_status(from, to).await? {
            FriendStatus::None => {}
            FriendStatus::Accepted => {
                return Err(AppError::BadRequest("You are already friends".to_string()))
            }
            FriendStatus::Sent => {
                return Err(AppError::BadRequest(
                    "Friend request already sent".to_string(),
                ))
            }
            FriendStatus::Pending => {
                return Err(AppError::BadRequest(
                    "This user already sent you a friend request".to_string(),
                ))
            }
        }

        let preference = PreferenceService::new(self.db).get(to).await?;
        if !preference.accepts_friend_invites() {
            return Err(AppError::BadRequest(
                "This user does not accept friend requests".to_string(),
            ));
        }

        let sender = load_actor(self.db, from).await?;
        repo.create(from, to, EdgeStatus::Pending).await?;

        self.events
            .emit(DomainEvent::FriendRequested {
                sender_id: sender.id,
                sender_name: sender.name,
                recipient_id: to,
            })
            .await;

        Ok(FriendStatus::Sent)
    }

    /// Accepts the pending request that `to` sent to `from`.
    ///
    /// The edge is rewritten inside a transaction with the acceptor stored as
    /// `from_user_id`.
    ///
    /// # Returns
    /// - `Ok(FriendStatus::Accepted)` - Users are now friends; the sender is notified
    /// - `Err(AppError::BadRequest)` - No request from `to` is waiting for `from`
    pub async fn accept_friend(&self, from: i32, to: i32) -> Result<FriendStatus, AppError> {
        let status = FriendRepository::new(self.db).get_status(from, to).await?;
        if status != FriendStatus::Pending {
            return Err(AppError::BadRequest(
                "There is no pending friend request from this user".to_string(),
            ));
        }

        let acceptor = load_actor(self.db, from).await?;

        let txn = self.db.begin().await?;
        let repo = FriendRepository::new(&txn);
        repo.delete_between(from, to).await?;
        repo.create(from, to, EdgeStatus::Accepted).await?;
        txn.commit().await?;

        self.events
            .emit(DomainEvent::FriendAccepted {
                acceptor_id: acceptor.id,
                acceptor_name: acceptor.name,
                sender_id: to,
            })
            .await;

        Ok(FriendStatus::Accepted)
    }

    /// Removes the edge between `a` and `b` in whichever direction it is stored.
    ///
    /// # Returns
    /// - `Ok(())` - Edge removed
    /// - `Err(AppError::BadRequest)` - The users are not connected
    pub async fn delete_friend(&self, a: i32, b: i32) -> Result<(), AppError> {
        let removed = FriendRepository::new(self.db).delete_between(a, b).await?;
        if removed == 0 {
            return Err(AppError::BadRequest(
                "You have no friendship or request with this user".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn get_friend_status(&self, a: i32, b: i32) -> Result<FriendStatus, AppError> {
        FriendRepository::new(self.db).get_status(a, b).await
    }

    /// Friends and requests of a user, newest first, optionally limited to one status.
    pub async fn get_friends(
        &self,
        user_id: i32,
        status: Option<FriendStatus>,
    ) -> Result<Vec<Friend>, AppError> {
        let edges = FriendRepository::new(self.db)
            .get_edges_for_user(user_id)
            .await?;

        let wanted: Vec<(i32, FriendStatus)> = edges
            .iter()
            .map(|edge| (edge.other(user_id), edge.status_for(user_id)))
            .filter(|(_, edge_status)| status.is_none_or(|s| s == *edge_status))
            .collect();

        let mut users: HashMap<i32, _> = UserRepository::new(self.db)
            .find_many(wanted.iter().map(|(id, _)| *id).collect())
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        Ok(wanted
            .into_iter()
            .filter_map(|(id, status)| users.remove(&id).map(|user| Friend { user, status }))
            .collect())
    }
}
