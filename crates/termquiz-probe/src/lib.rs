//! termquiz-probe — Best-effort outbound connectivity check.
//!
//! Before a quiz starts, termquiz checks whether a well-known host is
//! reachable and, if so, warns the user that looking up answers is off
//! limits. The check never blocks the quiz or changes scoring; an
//! unreachable host is the expected case.

pub mod error;
pub mod http;
pub mod mock;

use async_trait::async_trait;

pub use error::ProbeError;
pub use http::HttpProbe;

/// Outcome of a connectivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    /// The host answered (any HTTP status counts).
    Online { status: u16, latency_ms: u64 },
    /// The host could not be reached.
    Offline,
}

impl Reachability {
    pub fn is_online(&self) -> bool {
        matches!(self, Reachability::Online { .. })
    }
}

/// Trait for connectivity checks.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Human-readable probe target (e.g. a URL).
    fn target(&self) -> &str;

    /// Check reachability. Failures are reported as [`Reachability::Offline`].
    async fn check(&self) -> Reachability;
}

/// Run `probe` and return the warning to show if the network is reachable.
pub async fn connectivity_warning(probe: &dyn ConnectivityProbe) -> Option<String> {
    probe.check().await.is_online().then(|| {
        format!(
            "Warning: network access detected ({} is reachable). \
             Please disconnect and answer from memory.",
            probe.target()
        )
    })
}
