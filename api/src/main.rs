//! HireHub API server entry point

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use hh_api::app::create_app;
use hh_api::state::{AppState, Backends};
use hh_core::services::{AccountServiceConfig, InMemorySessionStore, SessionStore};
use hh_infra::cache::{RedisClient, RedisSessionStore};
use hh_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlCategoryRepository, MySqlRatingRepository,
    MySqlScheduleRepository,
};
use hh_infra::email::create_email_service;
use hh_infra::sms::create_sms_service;
use hh_shared::config::{AppConfig, SessionStoreKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting HireHub API server ({})", config.environment);
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with the development secret");
    }

    let database = DatabasePool::new(&config.database)
        .await
        .context("connecting to MySQL")?;
    database
        .run_migrations()
        .await
        .context("running database migrations")?;
    info!("Database ready: {}", database.get_statistics());

    let pool = database.get_pool().clone();

    let sessions: Arc<dyn SessionStore> = match config.auth.session.store {
        SessionStoreKind::Memory => Arc::new(InMemorySessionStore::new()),
        SessionStoreKind::Redis => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .context("connecting to Redis")?;
            Arc::new(RedisSessionStore::new(client, config.auth.session.timeout))
        }
    };

    let backends = Backends {
        accounts: Arc::new(MySqlAccountRepository::new(pool.clone())),
        categories: Arc::new(MySqlCategoryRepository::new(pool.clone())),
        ratings: Arc::new(MySqlRatingRepository::new(pool.clone())),
        schedules: Arc::new(MySqlScheduleRepository::new(pool)),
        sessions,
        sms: create_sms_service(&config.sms).context("configuring SMS provider")?,
        email: create_email_service(&config.email).context("configuring email provider")?,
    };

    let state = web::Data::new(AppState::new(
        backends,
        &config.auth,
        AccountServiceConfig::new(config.server.public_base_url.clone()),
    ));

    let environment = config.environment;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    database.close().await;
    Ok(())
}
