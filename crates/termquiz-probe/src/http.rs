//! HTTP connectivity probe.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::instrument;

use termquiz_core::config::ProbeConfig;

use crate::error::ProbeError;
use crate::{ConnectivityProbe, Reachability};

/// Probes a URL with a single GET request.
pub struct HttpProbe {
    url: String,
    timeout_ms: u64,
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(url: &str, timeout: Duration) -> anyhow::Result<Self> {
        reqwest::Url::parse(url).map_err(|e| ProbeError::InvalidUrl(format!("{url}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            url: url.to_string(),
            timeout_ms: millis(timeout),
            client,
        })
    }

    pub fn from_config(config: &ProbeConfig) -> anyhow::Result<Self> {
        Self::new(&config.url, Duration::from_millis(config.timeout_ms))
    }

    /// Issue the request and classify transport failures.
    pub async fn probe(&self) -> Result<Reachability, ProbeError> {
        let start = Instant::now();
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::Timeout(self.timeout_ms)
            } else if e.is_connect() {
                ProbeError::Connect(e.to_string())
            } else {
                ProbeError::NetworkError(e.to_string())
            }
        })?;

        Ok(Reachability::Online {
            status: response.status().as_u16(),
            latency_ms: millis(start.elapsed()),
        })
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl ConnectivityProbe for HttpProbe {
    fn target(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn check(&self) -> Reachability {
        match self.probe().await {
            Ok(reachability) => {
                tracing::debug!(?reachability, "probe succeeded");
                reachability
            }
            Err(e) => {
                tracing::debug!("probe failed, treating as offline: {e}");
                Reachability::Offline
            }
        }
    }
}
