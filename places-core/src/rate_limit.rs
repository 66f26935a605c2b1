use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use thiserror::Error;

/// Maximum number of requests within a time window,
/// e.g. `60/minute` or `30 per hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimit {
    #[must_use]
    pub const fn per_minute(max_requests: u32) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid rate limit '{0}'")]
pub struct ParseRateLimitError(String);

impl FromStr for RateLimit {
    type Err = ParseRateLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRateLimitError(s.to_owned());
        let (count, unit) = s
            .split_once('/')
            .or_else(|| s.split_once(" per "))
            .ok_or_else(invalid)?;
        let max_requests = count.trim().parse::<u32>().map_err(|_| invalid())?;
        let secs = match unit.trim().to_lowercase().as_str() {
            "second" | "s" => 1,
            "minute" | "m" => 60,
            "hour" | "h" => 60 * 60,
            "day" | "d" => 24 * 60 * 60,
            _ => return Err(invalid()),
        };
        Ok(Self {
            max_requests,
            window: Duration::from_secs(secs),
        })
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.window.as_secs() {
            1 => "second",
            60 => "minute",
            3600 => "hour",
            86400 => "day",
            secs => return write!(f, "{}/{secs}s", self.max_requests),
        };
        write!(f, "{}/{unit}", self.max_requests)
    }
}

/// Request counter of a fixed time window.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    started: Instant,
    count: u32,
}

impl Window {
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self {
            started: now,
            count: 0,
        }
    }

    /// Count a request and return whether it is admitted.
    pub fn hit(&mut self, limit: RateLimit, now: Instant) -> bool {
        if now.duration_since(self.started) >= limit.window {
            *self = Self::new(now);
        }
        if self.count >= limit.max_requests {
            return false;
        }
        self.count += 1;
        true
    }

    #[must_use]
    pub fn is_expired(&self, limit: RateLimit, now: Instant) -> bool {
        now.duration_since(self.started) >= limit.window
    }
}
