use crate::config::AppConfig;
use crate::db;
use crate::graphql::{build_schema, ApiSchema};
use crate::store::Store;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Store,
    pub schema: ApiSchema,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = match config.database_url.as_deref() {
            Some(url) => {
                let pool = db::connect(url).await?;
                db::migrate(&pool).await?;
                info!("using postgres store");
                Store::postgres(pool)
            }
            None => {
                warn!("DATABASE_URL not set; data lives in memory and is lost on exit");
                Store::memory()
            }
        };

        Ok(Self::from_parts(config, store))
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Store) -> Self {
        let schema = build_schema(store.clone());
        Self {
            config,
            store,
            schema,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            jwt: crate::config::JwtConfig {
                secret: "test".into(),
                issuer: "test".into(),
                audience: "test".into(),
                ttl_minutes: 5,
                refresh_ttl_minutes: 60,
            },
        });
        Self::from_parts(config, Store::memory())
    }
}
