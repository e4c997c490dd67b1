// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Optional caller identity. A present but invalid token is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn http_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

async fn authenticate(state: &HttpState, token: &str) -> Result<AuthenticatedUser, HttpError> {
    state
        .services
        .authenticate(token)
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = http_state(parts)?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        authenticate(&app_state, header.token()).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = http_state(parts)?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => authenticate(&app_state, header.token())
                .await
                .map(|user| Self(Some(user))),
            None => Ok(Self(None)),
        }
    }
}
