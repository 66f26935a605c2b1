use std::{collections::HashMap, time::Instant};

use parking_lot::Mutex;

use places_core::rate_limit::{RateLimit, Window};

use super::RateLimits;

// Expired windows are dropped once this many clients are tracked.
const MAX_TRACKED_WINDOWS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Default,
    Search,
    Llm,
}

pub struct RateLimiter {
    limits: RateLimits,
    windows: Mutex<HashMap<(Scope, String), Window>>,
}

impl RateLimiter {
    pub fn new(limits: RateLimits) -> Self {
        Self {
            limits,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub const fn limit(&self, scope: Scope) -> RateLimit {
        match scope {
            Scope::Default => self.limits.default,
            Scope::Search => self.limits.search,
            Scope::Llm => self.limits.llm,
        }
    }

    /// Count a request of `client` and return whether it is admitted.
    pub fn check(&self, scope: Scope, client: &str) -> bool {
        self.check_at(scope, client, Instant::now())
    }

    fn check_at(&self, scope: Scope, client: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock();
        if windows.len() >= MAX_TRACKED_WINDOWS {
            windows.retain(|(scope, _), window| !window.is_expired(self.limit(*scope), now));
        }
        windows
            .entry((scope, client.to_owned()))
            .or_insert_with(|| Window::new(now))
            .hit(self.limit(scope), now)
    }
}
