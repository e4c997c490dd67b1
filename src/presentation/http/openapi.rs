// src/presentation/http/openapi.rs
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::articles::list_published,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::list_own_articles,
        crate::presentation::http::controllers::moderation::moderate_article,
        crate::presentation::http::controllers::moderation::list_all_articles,
        crate::presentation::http::controllers::events::stream_events,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::moderation::ModerateRequest,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ArticleDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Articles", description = "Public listing and writer article management"),
        (name = "Moderation", description = "Administrator review of submitted articles"),
        (name = "Events", description = "Live publication events for viewers"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Berita API",
        description = "Moderated news portal backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
