use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use parking_lot::RwLock;

use places_boundary::PlaceResult;

type Cache = HashMap<String, (Instant, Vec<PlaceResult>)>;

pub struct SearchCache {
    timeout: Duration,
    entries: RwLock<Cache>,
}

impl SearchCache {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<PlaceResult>> {
        self.get_at(key, Instant::now())
    }

    pub fn insert(&self, key: String, results: Vec<PlaceResult>) {
        self.insert_at(key, results, Instant::now());
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<Vec<PlaceResult>> {
        let (created_at, results) = self.entries.read().get(key).cloned()?;
        if now.duration_since(created_at) < self.timeout {
            return Some(results);
        }
        None
    }

    fn insert_at(&self, key: String, results: Vec<PlaceResult>, now: Instant) {
        let mut entries = self.entries.write();
        entries.retain(|_, (created_at, _)| now.duration_since(*created_at) < self.timeout);
        entries.insert(key, (now, results));
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
