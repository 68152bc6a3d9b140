use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts every recognized preference key into the `preference` table.
///
/// Mirrors the seed step of the preference migration so repositories can resolve
/// keys to ids in tests.
///
/// # Arguments
/// - `db` - Database connection with the `preference` table created
///
/// # Returns
/// - `Ok(())` - All keys inserted
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_preferences(db: &DatabaseConnection) -> Result<(), DbErr> {
    let models = migration::PREFERENCE_KEYS
        .iter()
        .map(|key| entity::preference::ActiveModel {
            name: ActiveValue::Set(key.to_string()),
            ..Default::default()
        });

    entity::prelude::Preference::insert_many(models)
        .exec(db)
        .await?;

    Ok(())
}
