//! TTL-gated cache for backend-fetched session state (e.g. the current
//! user's membership snapshot). Callers supply `now`; the cache never
//! reads the clock itself.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct SessionCache<T> {
    entry: Option<(T, DateTime<Utc>)>,
    ttl: Duration,
}

impl<T> SessionCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// Freshness is half-open: an entry exactly `ttl` old is already stale.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|(_, fetched_at)| *fetched_at + self.ttl > now)
    }

    pub fn get(&self, now: DateTime<Utc>) -> Option<&T> {
        if self.is_fresh(now) {
            self.entry.as_ref().map(|(value, _)| value)
        } else {
            None
        }
    }

    pub fn put(&mut self, value: T, now: DateTime<Utc>) {
        self.entry = Some((value, now));
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_empty_cache_returns_none() {
        let cache: SessionCache<Vec<String>> = SessionCache::new(Duration::minutes(5));
        assert!(cache.get(at(0)).is_none());
        assert!(!cache.is_fresh(at(0)));
    }

    #[test]
    fn test_fresh_until_ttl_boundary() {
        let mut cache = SessionCache::new(Duration::minutes(5));
        cache.put("snapshot", at(0));

        assert_eq!(cache.get(at(4)), Some(&"snapshot"));
        // Exactly ttl old: stale.
        assert!(cache.get(at(5)).is_none());
        assert!(cache.get(at(6)).is_none());
    }

    #[test]
    fn test_put_refreshes_and_invalidate_clears() {
        let mut cache = SessionCache::new(Duration::minutes(5));
        cache.put(1, at(0));
        cache.put(2, at(4));

        assert_eq!(cache.get(at(8)), Some(&2));

        cache.invalidate();
        assert!(cache.get(at(8)).is_none());
    }
}
