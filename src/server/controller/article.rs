use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleDto, ArticleInputDto, ArticleSummaryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::article::ArticleParam,
        service::article::ArticleService, state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

#[derive(Deserialize)]
pub struct ArticleFilter {
    pub author_id: Option<i32>,
}

/// List articles, newest first.
///
/// Public endpoint; no login required.
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(("author_id" = Option<i32>, Query, description = "Only return articles by this author")),
    responses(
        (status = 200, description = "Articles without their body", body = Vec<ArticleSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    Query(filter): Query<ArticleFilter>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db)
        .list(filter.author_id)
        .await?;
    let articles_dto: Vec<ArticleSummaryDto> =
        articles.into_iter().map(|a| a.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(articles_dto)))
}

/// Get one article with its rendered body.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(("article_id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).get(article_id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = ArticleInputDto,
    responses(
        (status = 201, description = "Article published", body = ArticleDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ArticleInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = ArticleParam::from_dto(payload)?;
    let article = ArticleService::new(&state.db)
        .create(user.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// Edit an article. Only its author may edit.
#[utoipa::path(
    put,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(("article_id" = i32, Path, description = "Article ID")),
    request_body = ArticleInputDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
    Json(payload): Json<ArticleInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = ArticleParam::from_dto(payload)?;
    let article = ArticleService::new(&state.db)
        .update(user.id, article_id, param)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Delete an article. Allowed for its author and site admins.
#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(("article_id" = i32, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this article", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ArticleService::new(&state.db)
        .delete(user.id, article_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
