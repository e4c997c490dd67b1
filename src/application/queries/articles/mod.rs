mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleQuery;
pub use list::ListPublishedQuery;
pub use service::ArticleQueryService;
