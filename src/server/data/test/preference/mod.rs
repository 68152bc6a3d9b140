use crate::server::{data::preference::PreferenceRepository, model::preference::PreferenceKey};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_stored;
mod upsert;
