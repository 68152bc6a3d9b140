use chrono::{Duration, Utc};
use crate::server::{
    data::suspension::SuspensionRepository,
    model::suspension::{CreateSuspensionParam, UpdateSuspensionParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_for_user;
mod update;
