use crate::server::{data::article::ArticleRepository, model::article::ArticleParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;

fn article(name: &str) -> ArticleParam {
    ArticleParam {
        name: name.to_string(),
        description: "Ringkasan".to_string(),
        content: "# Isi".to_string(),
    }
}
