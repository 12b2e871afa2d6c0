pub mod error;
pub mod models;
pub mod serializers;
pub mod service;
pub mod store;
pub mod types;
pub mod urls;
pub mod views;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::info;
use wishtree_ai::Polisher;

pub use error::WishError;
pub use service::{SubmitPolicy, SubmitWish, WishService};
pub use store::{FileWishStore, SqlWishStore, StoreError, WishStore};
pub use types::{NewWish, Wish, WishStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// `wishes` table behind DATABASE_URL.
    Sql,
    /// JSON document at WISHES_FILE.
    File,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" | "sqlite" | "db" => Ok(Self::Sql),
            "file" | "json" => Ok(Self::File),
            other => bail!("unknown WISH_BACKEND {other:?} (expected `sql` or `file`)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WishCfg {
    pub backend: StoreBackend,
    pub database_url: String,
    pub wishes_file: PathBuf,
    pub policy: SubmitPolicy,
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE"))
        .unwrap_or(default)
}

impl WishCfg {
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("WISH_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => StoreBackend::Sql,
        };
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or("sqlite://wishes.db?mode=rwc".into());
        let wishes_file = std::env::var("WISHES_FILE").unwrap_or("wishes.json".into()).into();

        let policy = SubmitPolicy {
            require_anonymous_id: env_flag("REQUIRE_ANONYMOUS_ID", false),
            enhance_on_submit: env_flag("ENHANCE_ON_SUBMIT", true),
        };

        Ok(Self {
            backend,
            database_url,
            wishes_file,
            policy,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub wishes: Arc<WishService>,
}

impl AppState {
    pub fn new(store: Arc<dyn WishStore>, polisher: Polisher, policy: SubmitPolicy) -> Self {
        Self {
            wishes: Arc::new(WishService::new(store, polisher, policy)),
        }
    }
}

/// Ensure DB schema is up-to-date (calls migration crate).
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    use migration::Migrator;
    use sea_orm_migration::migrator::MigratorTrait;
    Migrator::up(db, None).await?;
    Ok(())
}

/// Connect and bring the `wishes` table up to date.
pub async fn connect_sql(url: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(url).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// Open the single store instance the service keeps for its lifetime.
pub async fn open_store(cfg: &WishCfg) -> Result<Arc<dyn WishStore>> {
    match cfg.backend {
        StoreBackend::Sql => {
            let db = connect_sql(&cfg.database_url).await?;
            info!(backend = ?db.get_database_backend(), "wish store: sql");
            Ok(Arc::new(SqlWishStore::new(db)))
        }
        StoreBackend::File => {
            info!(path = %cfg.wishes_file.display(), "wish store: json file");
            Ok(Arc::new(FileWishStore::new(cfg.wishes_file.clone())))
        }
    }
}
