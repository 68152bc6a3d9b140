//! Preference repository.
//!
//! Reads return only stored rows as a sparse name → value map. Defaults are
//! applied by `UserPreference::from_sparse`, never written to the database.

use std::collections::HashMap;

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
    RelationTrait,
};

use crate::server::model::preference::PreferenceKey;

pub struct PreferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferenceRepository<'a, C> {
    /// Creates a new PreferenceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads the stored preferences of a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    ///
    /// # Returns
    /// - `Ok(HashMap<String, String>)` - Preference name to stored value, only for keys
    ///   the user has set
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_stored(&self, user_id: i32) -> Result<HashMap<String, String>, DbErr> {
        let rows: Vec<(String, String)> = entity::prelude::UserPreference::find()
            .select_only()
            .column(entity::preference::Column::Name)
            .column(entity::user_preference::Column::Value)
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::user_preference::Relation::Preference.def(),
            )
            .filter(entity::user_preference::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Maps each seeded preference name to its id.
    pub async fn get_ids(&self) -> Result<HashMap<String, i32>, DbErr> {
        let entities = entity::prelude::Preference::find().all(self.db).await?;

        Ok(entities.into_iter().map(|p| (p.name, p.id)).collect())
    }

    /// Writes one preference value, replacing any stored value for the same key.
    ///
    /// Upserts on the `(user_id, preference_id)` primary key.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    /// - `preference_id` - Id of the seeded preference row
    /// - `value` - Serialized value (`on`, `off` or `email`)
    ///
    /// # Returns
    /// - `Ok(())` - Value stored
    /// - `Err(DbErr)` - Database error, including a foreign key violation for
    ///   unknown ids
    pub async fn upsert(&self, user_id: i32, preference_id: i32, value: &str) -> Result<(), DbErr> {
        entity::prelude::UserPreference::insert(entity::user_preference::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            preference_id: ActiveValue::Set(preference_id),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_preference::Column::UserId,
                entity::user_preference::Column::PreferenceId,
            ])
            .update_column(entity::user_preference::Column::Value)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Writes a set of values, resolving names to ids first.
    ///
    /// # Returns
    /// - `Ok(())` - All values stored
    /// - `Err(DbErr::RecordNotFound)` - A key has no seeded preference row
    /// - `Err(DbErr)` - Database error during write
    pub async fn upsert_many(
        &self,
        user_id: i32,
        values: &[(PreferenceKey, &'static str)],
    ) -> Result<(), DbErr> {
        let ids = self.get_ids().await?;

        for (key, value) in values {
            let Some(preference_id) = ids.get(key.as_str()) else {
                return Err(DbErr::RecordNotFound(format!(
                    "preference '{}' is not seeded",
                    key.as_str()
                )));
            };
            self.upsert(user_id, *preference_id, value).await?;
        }

        Ok(())
    }
}
