// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the caller identity from the facts carried by a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let username = ctx
        .username
        .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
    let is_admin = ctx
        .is_admin
        .ok_or_else(|| ApplicationError::unauthorized("missing admin flag"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

    Ok(AuthenticatedUser {
        id,
        username,
        is_admin,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    is_admin: Option<bool>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply(&fact.predicate);
        }
        ctx
    }

    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("admin", [Term::Bool(flag)]) => self.is_admin = Some(*flag),
            ("issued_at", [Term::Date(seconds)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("expires_at", [Term::Date(seconds)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            _ => {}
        }
    }
}
