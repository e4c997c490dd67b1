use anyhow::Result;
use berita_core::application::{
    commands::{articles::ModerationPolicy, users::EnsureAdminCommand},
    ports::{
        notifier::PublicationNotifier,
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use berita_core::config::AppConfig;
use berita_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use berita_core::infrastructure::{
    database,
    notifier::BroadcastPublicationNotifier,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use berita_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const POOL_MAX_CONNECTIONS: u32 = 8;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), POOL_MAX_CONNECTIONS).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let user_repo: Arc<dyn UserRepository> =
        Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let notifier: Arc<dyn PublicationNotifier> =
        Arc::new(BroadcastPublicationNotifier::new(config.notifier_capacity()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let policy = ModerationPolicy {
        require_rejection_reason: !config.allow_empty_rejection_reason(),
    };

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        password_hasher,
        token_manager,
        notifier,
        clock,
        policy,
    ));

    if let Some(seed) = config.admin() {
        services
            .user_commands
            .ensure_admin(EnsureAdminCommand {
                username: seed.username.clone(),
                password: seed.password.clone(),
            })
            .await?;
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
