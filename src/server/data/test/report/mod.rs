use crate::server::{data::report::ReportRepository, model::report::CreateReportParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
