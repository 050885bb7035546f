use std::sync::Arc;

use crate::cache::AppCache;
use crate::config::Settings;
use crate::domain::AnalyticsRecord;
use crate::error::Result;
use crate::upstream::AnalyticsClient;

#[derive(Clone)]
pub struct AppState {
    pub client: AnalyticsClient,
    pub cache: AppCache,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(client: AnalyticsClient, cache: AppCache, settings: Settings) -> Self {
        Self {
            client,
            cache,
            settings: Arc::new(settings),
        }
    }

    /// Current analytics snapshot, served from the cache when fresh.
    pub async fn snapshot(&self) -> Result<Arc<AnalyticsRecord>> {
        let client = self.client.clone();
        self.cache
            .get_or_fetch(&self.settings.analytics_url, move || async move {
                client.latest_record().await
            })
            .await
    }
}
