use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declares a trimmed, non-empty text field of an article.
macro_rules! required_text {
    ($name:ident, $label:literal, $max:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into().trim().to_string();
                if value.is_empty() {
                    return Err(DomainError::Validation(concat!($label, " cannot be empty").into()));
                }
                if value.chars().count() > $max {
                    return Err(DomainError::Validation(format!(
                        concat!($label, " must be at most {} characters"),
                        $max
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

required_text!(ArticleTitle, "title", 200);
required_text!(ArticleSummary, "summary", 500);
required_text!(ArticleBody, "body", 100_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCategory(String);

impl ArticleCategory {
    pub const DEFAULT: &'static str = "Umum";

    /// Blank input falls back to the default category.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Ok(Self::default());
        }
        if value.chars().count() > 100 {
            return Err(DomainError::Validation(
                "category must be at most 100 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn from_optional(value: Option<String>) -> DomainResult<Self> {
        value.map_or_else(|| Ok(Self::default()), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for ArticleCategory {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Returns `None` for blank input so an empty form field means "no image".
    pub fn parse(value: impl Into<String>) -> DomainResult<Option<Self>> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Ok(None);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "image url cannot contain whitespace".into(),
            ));
        }
        if value.len() > 500 {
            return Err(DomainError::Validation(
                "image url must be at most 500 characters".into(),
            ));
        }
        Ok(Some(Self(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Free-text note left by a moderator. Empty unless the article was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModerationReason(String);

impl ModerationReason {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
