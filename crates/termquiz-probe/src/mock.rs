//! Fixed-outcome probe for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::{ConnectivityProbe, Reachability};

/// A probe that always reports the same outcome without touching the network.
pub struct StaticProbe {
    target: String,
    outcome: Reachability,
    call_count: AtomicU32,
}

impl StaticProbe {
    pub fn new(target: &str, outcome: Reachability) -> Self {
        Self {
            target: target.to_string(),
            outcome,
            call_count: AtomicU32::new(0),
        }
    }

    pub fn online(target: &str) -> Self {
        Self::new(
            target,
            Reachability::Online {
                status: 200,
                latency_ms: 0,
            },
        )
    }

    pub fn offline(target: &str) -> Self {
        Self::new(target, Reachability::Offline)
    }

    /// Get the number of checks made.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ConnectivityProbe for StaticProbe {
    fn target(&self) -> &str {
        &self.target
    }

    async fn check(&self) -> Reachability {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.outcome
    }
}
