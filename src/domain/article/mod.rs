pub mod entity;
pub mod events;
pub mod repository;
pub mod specifications;
pub mod status;
pub mod value_objects;

pub use entity::{Article, ArticleChanges, NewArticle, StatusChange};
pub use events::{ArticleSnapshot, PublicationEvent};
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository};
pub use specifications::Identity;
pub use status::{ArticleStatus, ModerationDecision};
pub use value_objects::{
    ArticleBody, ArticleCategory, ArticleId, ArticleSummary, ArticleTitle, ImageUrl,
    ModerationReason,
};
