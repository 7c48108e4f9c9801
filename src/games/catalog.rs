use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// One catalog entry as served by the upstream API. Fields we do not model
/// explicitly are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// JSON view over the shared snapshot. Serializing it walks the `Arc`
/// directly instead of copying the list per request.
pub struct CatalogList(pub Arc<Vec<Game>>);

impl Serialize for CatalogList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.as_slice().serialize(serializer)
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<Game>>;
}

pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> anyhow::Result<Vec<Game>> {
        let url = format!("{}/games", self.base_url);
        let games = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Game>>()
            .await?;
        Ok(games)
    }
}

struct Snapshot {
    games: Arc<Vec<Game>>,
    fetched_at: Instant,
}

/// Read-through snapshot of the upstream catalog with a fixed refresh TTL.
/// An expired snapshot is re-fetched on demand; if the upstream is down and
/// a previous snapshot exists, the stale data keeps being served.
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    pub async fn games(&self) -> anyhow::Result<Arc<Vec<Game>>> {
        if let Some(games) = self.fresh().await {
            return Ok(games);
        }
        self.refresh().await
    }

    pub async fn game(&self, id: i64) -> anyhow::Result<Option<Game>> {
        let games = self.games().await?;
        Ok(games.iter().find(|g| g.id == id).cloned())
    }

    async fn fresh(&self) -> Option<Arc<Vec<Game>>> {
        let guard = self.snapshot.read().await;
        guard
            .as_ref()
            .filter(|s| s.fetched_at.elapsed() < self.ttl)
            .map(|s| Arc::clone(&s.games))
    }

    async fn refresh(&self) -> anyhow::Result<Arc<Vec<Game>>> {
        let mut guard = self.snapshot.write().await;
        // another task may have refreshed while we waited for the lock
        if let Some(s) = guard.as_ref() {
            if s.fetched_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&s.games));
            }
        }
        match self.source.fetch().await {
            Ok(games) => {
                info!(count = games.len(), "catalog refreshed");
                let games = Arc::new(games);
                *guard = Some(Snapshot {
                    games: Arc::clone(&games),
                    fetched_at: Instant::now(),
                });
                Ok(games)
            }
            Err(e) => match guard.as_ref() {
                Some(s) => {
                    warn!(error = %e, "catalog refresh failed, serving stale snapshot");
                    Ok(Arc::clone(&s.games))
                }
                None => Err(e),
            },
        }
    }
}
