// src/domain/article/status.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Moderation state of an article. Only `Disetujui` articles are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArticleStatus {
    #[default]
    Pending,
    Disetujui,
    Ditolak,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [
        ArticleStatus::Pending,
        ArticleStatus::Disetujui,
        ArticleStatus::Ditolak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Pending => "Pending",
            ArticleStatus::Disetujui => "Disetujui",
            ArticleStatus::Ditolak => "Ditolak",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, ArticleStatus::Disetujui)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown article status '{s}'")))
    }
}

/// Outcome an administrator may choose for a reviewed article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    pub fn target_status(self) -> ArticleStatus {
        match self {
            ModerationDecision::Approve => ArticleStatus::Disetujui,
            ModerationDecision::Reject => ArticleStatus::Ditolak,
        }
    }
}

impl FromStr for ModerationDecision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disetujui" | "approve" | "approved" | "published" => Ok(ModerationDecision::Approve),
            "ditolak" | "reject" | "rejected" => Ok(ModerationDecision::Reject),
            other => Err(DomainError::Validation(format!(
                "invalid moderation decision '{other}'"
            ))),
        }
    }
}
