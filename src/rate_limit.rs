use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Keys kept before stale buckets are swept on the next check.
const SWEEP_AFTER: usize = 1024;

/// In-memory sliding-window limiter keyed by "<bucket>:<ip hash>".
pub struct RateLimiter {
    entries: Mutex<HashMap<String, Vec<Instant>>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiter {
    pub fn new() -> Self {
        RateLimiter {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Build a limiter key without keeping raw client addresses in memory.
    pub fn client_key(bucket: &str, ip: Option<IpAddr>) -> String {
        let ip = ip.map(|ip| ip.to_string()).unwrap_or_else(|| "unknown".to_string());
        let digest = Sha256::digest(ip.as_bytes());
        format!("{}:{}", bucket, &hex::encode(digest)[..16])
    }

    /// Record an attempt; true if it is within `max_attempts` per `window`.
    pub fn check_and_record(&self, key: &str, max_attempts: u64, window: Duration) -> bool {
        let mut map = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = Instant::now();
        let cutoff = now.checked_sub(window).unwrap_or(now);

        if map.len() > SWEEP_AFTER {
            map.retain(|_, attempts| {
                attempts.retain(|t| *t > cutoff);
                !attempts.is_empty()
            });
        }

        let attempts = map.entry(key.to_string()).or_default();
        attempts.retain(|t| *t > cutoff);

        if (attempts.len() as u64) < max_attempts {
            attempts.push(now);
            true
        } else {
            false
        }
    }
}
