// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleQuery, ListPublishedQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ArticleListParams {
    /// Case-insensitive fragment of the title.
    #[serde(default)]
    pub q: Option<String>,
}

/// Any `status` or `moderation_reason` sent by a writer is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub summary: String,
    pub body: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    /// An empty string removes the image.
    pub image_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_published(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_published(ListPublishedQuery { q: params.q })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article detail.", body = ArticleDto),
        (status = 401, description = "Invalid token.", body = ErrorResponse),
        (status = 404, description = "Article not found or not visible.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(actor.0.as_ref(), GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/article",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article submitted for review.", body = ArticleDto),
        (status = 400, description = "Invalid article fields.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 503, description = "Storage unavailable.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        summary: payload.summary,
        body: payload.body,
        category: payload.category,
        image_url: payload.image_url,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    post,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated. Published articles return to review.", body = ArticleDto),
        (status = 400, description = "Invalid article fields.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Not the owner or an administrator.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse),
        (status = 409, description = "Article changed concurrently.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        summary: payload.summary,
        body: payload.body,
        category: payload.category,
        image_url: payload.image_url,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/article/{id}/delete",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Not the owner or an administrator.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/me/articles",
    responses(
        (status = 200, description = "The caller's own articles, newest first.", body = [ArticleDto]),
        (status = 401, description = "Unauthorized.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn list_own_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_for_owner(&user)
        .await
        .into_http()
        .map(Json)
}
