//! Request sequencing for out-of-order responses
//!
//! Requests are never cancelled once issued. Instead each request slot (the
//! feed, the username check) tags what it sends with a [`RequestToken`] and
//! only applies the response whose token is still the latest one issued.
//!
//! Token values are unique for the whole process, so a response issued by a
//! slot that has since been dropped and recreated (a feed from a previous
//! session) can never match the new slot's latest token.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

fn next_token() -> u64 {
    NEXT_TOKEN.fetch_add(1, Ordering::Relaxed)
}

/// Identifies one issued request within its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues monotonically increasing tokens for a single request slot
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token; every previously issued token becomes stale
    pub fn issue(&mut self) -> RequestToken {
        self.latest = next_token();
        RequestToken(self.latest)
    }

    /// Make every outstanding token stale without issuing a new request
    pub fn invalidate(&mut self) {
        self.latest = next_token();
    }

    /// Whether a response tagged with `token` should be applied
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSequencer::new();
        let older = seq.issue();
        let newer = seq.issue();
        assert!(!seq.is_current(older));
        assert!(seq.is_current(newer));
    }

    #[test]
    fn test_invalidate_makes_everything_stale() {
        let mut seq = RequestSequencer::new();
        let token = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(token));
        let next = seq.issue();
        assert!(seq.is_current(next));
    }

    #[test]
    fn test_recreated_slot_rejects_old_tokens() {
        let mut first = RequestSequencer::new();
        let old = first.issue();
        let mut second = RequestSequencer::new();
        second.issue();
        assert!(!second.is_current(old));
    }

    #[test]
    fn test_fresh_sequencer_has_nothing_current() {
        let seq = RequestSequencer::new();
        let mut other = RequestSequencer::new();
        assert!(!seq.is_current(other.issue()));
    }

    #[test]
    fn test_display() {
        let mut seq = RequestSequencer::new();
        let token = seq.issue();
        assert_eq!(token.to_string(), format!("#{}", token.value()));
    }
}
