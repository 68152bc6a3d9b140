use crate::server::{
    data::suspension::SuspensionRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::suspension::CreateSuspensionParam,
};
use test_utils::{builder::TestBuilder, factory};
