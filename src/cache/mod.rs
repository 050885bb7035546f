use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::config::Settings;
use crate::domain::AnalyticsRecord;
use crate::error::Result;

/// Cache for fetched analytics snapshots, keyed by upstream URL.
///
/// A TTL of zero disables caching entirely so every page view re-fetches.
#[derive(Clone)]
pub struct AppCache {
    snapshots: Option<Cache<String, Arc<AnalyticsRecord>>>,
}

impl AppCache {
    pub fn new(settings: &Settings) -> Self {
        let snapshots = (settings.cache_ttl_secs > 0).then(|| {
            Cache::builder()
                .max_capacity(settings.cache_max_entries)
                .time_to_live(Duration::from_secs(settings.cache_ttl_secs))
                .build()
        });

        Self { snapshots }
    }

    /// Get the cached snapshot for `key`, or fetch and cache it. Failed
    /// fetches are never cached and always propagate to the caller.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, f: F) -> Result<Arc<AnalyticsRecord>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AnalyticsRecord>>,
    {
        let Some(snapshots) = &self.snapshots else {
            return Ok(Arc::new(f().await?));
        };

        if let Some(record) = snapshots.get(key).await {
            return Ok(record);
        }

        let record = Arc::new(f().await?);
        snapshots.insert(key.to_string(), record.clone()).await;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HourHistogram;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_settings(cache_ttl_secs: u64) -> Settings {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            analytics_url: "http://127.0.0.1:9000/analytics.json".to_string(),
            default_timezone: "UTC".to_string(),
            request_timeout_ms: 2000,
            cache_ttl_secs,
            cache_max_entries: 16,
        }
    }

    fn test_record(count_users: i64) -> AnalyticsRecord {
        AnalyticsRecord {
            timestamp: None,
            count_users,
            count_users_today: 0,
            count_messages: 0,
            count_messages_today: 0,
            count_messages_per_hour: HourHistogram::default(),
        }
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let cache = AppCache::new(&test_settings(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let record = cache
                .get_or_fetch("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(test_record(7))
                })
                .await
                .unwrap();
            assert_eq!(record.count_users, 7);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_caching() {
        let cache = AppCache::new(&test_settings(0));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            cache
                .get_or_fetch("key", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(test_record(1))
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let cache = AppCache::new(&test_settings(60));
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_fetch("key", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<AnalyticsRecord, _>(Error::EmptyDocument)
            })
            .await;
        assert!(first.is_err());

        let second = cache
            .get_or_fetch("key", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(test_record(3))
            })
            .await
            .unwrap();

        assert_eq!(second.count_users, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = AppCache::new(&test_settings(60));

        cache
            .get_or_fetch("a", || async { Ok(test_record(1)) })
            .await
            .unwrap();
        let b = cache
            .get_or_fetch("b", || async { Ok(test_record(2)) })
            .await
            .unwrap();

        assert_eq!(b.count_users, 2);
    }
}
