//! High score bookkeeping
//!
//! A single process-wide best score, persisted as a string-encoded integer.
//! Owned by the application context and handed to the controllers.

use crate::persistence::KeyValueStore;

/// Persisted best score plus the store it lives in
pub struct HighScore {
    best: u64,
    key: String,
    store: Box<dyn KeyValueStore>,
}

impl HighScore {
    /// Read the persisted value once (missing or malformed reads as 0)
    pub fn load(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        let best = match store.get(key) {
            Some(raw) => match parse_leading_int(&raw) {
                Some(v) => {
                    log::info!("Loaded high score {}", v);
                    v
                }
                None => {
                    log::warn!("Stored high score {:?} is not an integer, starting at 0", raw);
                    0
                }
            },
            None => {
                log::info!("No high score found, starting fresh");
                0
            }
        };

        Self {
            best,
            key: key.to_string(),
            store,
        }
    }

    /// Current best score
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a finished run's score.
    ///
    /// Only a strict improvement changes anything; returns whether it did.
    /// A failed write keeps the new value in memory for this session.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        match self.store.set(&self.key, &score.to_string()) {
            Ok(()) => log::info!("High score saved ({})", score),
            Err(e) => log::warn!("High score {} not persisted: {}", score, e),
        }
        true
    }
}

/// Leading integer of a stored value, the way the browser reads it back.
///
/// Leading whitespace and a `+` sign are skipped and parsing stops at the
/// first non-digit, so `"120abc"` is 120 and `"12.5"` is 12. Negative values
/// read as 0 since a best score never goes below the empty run.
fn parse_leading_int(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }
    // Longer than u64 saturates
    Some(s[..end].parse().unwrap_or(u64::MAX))
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore")
            .field("best", &self.best)
            .field("key", &self.key)
            .finish()
    }
}
