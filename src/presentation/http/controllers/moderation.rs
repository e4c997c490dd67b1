use crate::application::{
    commands::articles::ModerateArticleCommand, dto::ArticleDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateRequest {
    /// `Disetujui` (approve) or `Ditolak` (reject).
    #[schema(example = "Disetujui")]
    pub decision: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[utoipa::path(
    post,
    path = "/moderate/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ModerateRequest,
    responses(
        (status = 200, description = "Article moderated.", body = ArticleDto),
        (status = 400, description = "Unknown decision or missing rejection reason.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Administrators only.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse),
        (status = 409, description = "Article changed concurrently.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn moderate_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ModerateRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = ModerateArticleCommand {
        id,
        decision: payload.decision,
        reason: payload.reason,
    };

    state
        .services
        .article_commands
        .moderate_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/articles",
    responses(
        (status = 200, description = "Every article regardless of status, newest first.", body = [ArticleDto]),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 403, description = "Administrators only.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Moderation"
)]
pub async fn list_all_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_for_admin(&user)
        .await
        .into_http()
        .map(Json)
}
