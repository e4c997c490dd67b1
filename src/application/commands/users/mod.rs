mod bootstrap;
mod login;
mod password;
mod register;
mod service;

pub use bootstrap::EnsureAdminCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
