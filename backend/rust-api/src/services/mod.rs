use std::sync::Arc;
use std::time::Duration;

use redis::aio::ConnectionManager;

use crate::config::{Config, ProfileStoreBackend};

use self::assistant_service::AssistantService;
use self::auth_service::AuthService;
use self::catalog_service::Catalog;
use self::profile_store::{MemoryProfileStore, ProfileStore, RedisProfileStore};
use self::quiz_service::QuizService;
use self::search_service::SearchService;

pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub profiles: Arc<dyn ProfileStore>,
    pub auth: Arc<AuthService>,
    pub search: SearchService,
    pub quizzes: QuizService,
    pub assistant: AssistantService,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let profiles: Arc<dyn ProfileStore> = match config.profile_store {
            ProfileStoreBackend::Memory => {
                tracing::info!("Using in-memory profile store");
                Arc::new(MemoryProfileStore::new())
            }
            ProfileStoreBackend::Redis => {
                let uri = config
                    .redis_uri
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("Redis profile store requires redis.uri"))?;
                Arc::new(RedisProfileStore::new(connect_redis(&uri).await?))
            }
        };

        Ok(Self::with_store(config, profiles))
    }

    /// Wires every service around an already built profile store.
    pub fn with_store(config: Config, profiles: Arc<dyn ProfileStore>) -> Self {
        let catalog = Arc::new(Catalog::builtin());
        let auth = Arc::new(AuthService::new(profiles.clone(), catalog.clone()));

        Self {
            search: SearchService::new(catalog.clone()),
            quizzes: QuizService::new(
                catalog.clone(),
                auth.clone(),
                Duration::from_millis(config.quiz_tick_ms),
            ),
            assistant: AssistantService::new(Duration::from_millis(config.assistant_delay_ms)),
            config,
            catalog,
            profiles,
            auth,
        }
    }
}

async fn connect_redis(uri: &str) -> anyhow::Result<ConnectionManager> {
    let redis_client = redis::Client::open(uri)?;

    tracing::info!("Attempting to connect to Redis...");

    let redis = tokio::time::timeout(
        Duration::from_secs(30),
        ConnectionManager::new(redis_client),
    )
    .await
    .map_err(|_| anyhow::anyhow!("Redis connection timeout after 30s"))??;

    tracing::info!("Redis ConnectionManager created, testing with PING...");

    let mut conn = redis.clone();
    tokio::time::timeout(
        Duration::from_secs(5),
        redis::cmd("PING").query_async::<String>(&mut conn),
    )
    .await
    .map_err(|_| anyhow::anyhow!("Redis PING timeout after 5s"))??;

    tracing::info!("Redis connection established successfully");
    Ok(redis)
}

pub mod assistant_service;
pub mod auth_service;
pub mod catalog_seed;
pub mod catalog_service;
pub mod profile_store;
pub mod quiz_service;
pub mod search_service;
