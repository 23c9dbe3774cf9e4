use std::sync::Arc;

use tender_config::TenderConfig;
use tender_db::TenderDb;
use tender_engine::{BidManager, TenderManager};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: Arc<TenderDb>,
    pub tenders: TenderManager<TenderDb>,
    pub bids: BidManager<TenderDb>,
    pub config: TenderConfig,
}

impl AppContext {
    /// Open the configured database. `--database` wins over both the
    /// configured path and a remote URL.
    pub async fn init(config: TenderConfig, database_override: Option<&str>) -> anyhow::Result<Self> {
        let db = match database_override {
            Some(path) => TenderDb::open_local(path).await?,
            None if config.database.is_remote() => {
                TenderDb::open_remote(&config.database.url, &config.database.auth_token).await?
            }
            None => TenderDb::open_local(&config.database.path).await?,
        };
        Ok(Self::from_db(db, config))
    }

    pub fn from_db(db: TenderDb, config: TenderConfig) -> Self {
        let db = Arc::new(db);
        Self {
            tenders: TenderManager::new(Arc::clone(&db)),
            bids: BidManager::new(Arc::clone(&db)),
            db,
            config,
        }
    }
}
