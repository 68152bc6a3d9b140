use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::preference::PreferenceRepository,
    error::AppError,
    model::preference::{UpdatePreferenceParam, UserPreference},
};

/// Reads and writes user preferences.
///
/// Generic over the connection because the notification listener and the
/// friend workflow read preferences with whatever connection they hold.
pub struct PreferenceService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferenceService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolved preferences of a user; keys without a stored row take their defaults.
    pub async fn get(&self, user_id: i32) -> Result<UserPreference, AppError> {
        let stored = PreferenceRepository::new(self.db).get_stored(user_id).await?;
        Ok(UserPreference::from_sparse(stored)?)
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> PreferenceService<'a, C> {
    /// Writes the keys present in `param` and returns the resolved preferences.
    ///
    /// All keys are written in one transaction.
    pub async fn save(
        &self,
        user_id: i32,
        param: UpdatePreferenceParam,
    ) -> Result<UserPreference, AppError> {
        if !param.is_empty() {
            let txn = self.db.begin().await?;
            PreferenceRepository::new(&txn)
                .upsert_many(user_id, &param.values)
                .await?;
            txn.commit().await?;
        }

        self.get(user_id).await
    }
}
