use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Replica workspaces believed to run identical deployments. Order matters:
/// the dispatcher walks the derived URL list front to back on every request.
pub const WORKSPACES: &[&str] = &["naijaai", "model-host", "pauljeffrey"];

/// The completion tier can block on beam search for a long while.
pub const PREDICT_TIMEOUT: Duration = Duration::from_secs(120);

/// An ordered, de-duplicated list of base URLs treated as interchangeable
/// replicas of one logical backend. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct EndpointSet {
    urls: Vec<String>,
}

impl EndpointSet {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for url in urls {
            let url = url.into();
            if !deduped.contains(&url) {
                deduped.push(url);
            }
        }
        Self { urls: deduped }
    }

    /// Completion-tier replicas serve the `/predict` route.
    pub fn completion(workspaces: &[impl AsRef<str>]) -> Self {
        Self::new(workspaces.iter().map(|ws| {
            format!(
                "https://{}--sabiyarn-fastapi-app-fastapi-app.modal.run/predict",
                ws.as_ref()
            )
        }))
    }

    /// Chat-tier replicas answer on the root path.
    pub fn chat(workspaces: &[impl AsRef<str>]) -> Self {
        Self::new(workspaces.iter().map(|ws| {
            format!(
                "https://{}--sabiyarn-capable-fastapi-app.modal.run/",
                ws.as_ref()
            )
        }))
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Every replica was tried and none answered with a success status.
#[derive(Debug, thiserror::Error)]
#[error("All API endpoints failed: {last_error}")]
pub struct DispatchError {
    pub attempts: usize,
    pub last_error: String,
}

/// Sequential failover over an [`EndpointSet`]. Holds nothing but the shared
/// HTTP client; per-request state is just the loop position, so concurrent
/// requests never interact.
#[derive(Debug, Clone)]
pub struct FailoverDispatcher {
    client: reqwest::Client,
}

impl Default for FailoverDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FailoverDispatcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// POST the payload to each replica in order until one answers 2xx, and
    /// return that body. Timeouts and non-success statuses just advance to the
    /// next candidate; when the list runs out the last failure is surfaced.
    pub async fn dispatch<T: Serialize>(
        &self,
        endpoints: &EndpointSet,
        payload: &T,
        timeout: Duration,
    ) -> Result<String, DispatchError> {
        let mut attempts = 0;
        let mut last_error = String::from("no endpoints configured");

        for url in endpoints.urls() {
            attempts += 1;
            match self.try_endpoint(url, payload, timeout).await {
                Ok(body) => {
                    debug!(%url, attempts, "replica answered");
                    return Ok(body);
                }
                Err(err) => {
                    error!(%url, error = %err, "replica attempt failed");
                    last_error = err.to_string();
                }
            }
        }

        Err(DispatchError {
            attempts,
            last_error,
        })
    }

    async fn try_endpoint<T: Serialize>(
        &self,
        url: &str,
        payload: &T,
        timeout: Duration,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {status}: {text}");
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_set_preserves_order_and_dedupes() {
        let set = EndpointSet::new([
            "https://a.example/predict",
            "https://b.example/predict",
            "https://a.example/predict",
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.urls()[0], "https://a.example/predict");
        assert_eq!(set.urls()[1], "https://b.example/predict");
    }

    #[test]
    fn completion_urls_follow_the_modal_template() {
        let set = EndpointSet::completion(WORKSPACES);
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.urls()[0],
            "https://naijaai--sabiyarn-fastapi-app-fastapi-app.modal.run/predict"
        );
        assert_eq!(
            set.urls()[1],
            "https://model-host--sabiyarn-fastapi-app-fastapi-app.modal.run/predict"
        );
    }

    #[test]
    fn chat_urls_use_the_root_path() {
        let set = EndpointSet::chat(WORKSPACES);
        assert!(set
            .urls()
            .iter()
            .all(|u| u.ends_with(".modal.run/") && u.contains("sabiyarn-capable")));
    }

    #[tokio::test]
    async fn empty_endpoint_set_fails_with_zero_attempts() {
        let dispatcher = FailoverDispatcher::new();
        let err = dispatcher
            .dispatch(
                &EndpointSet::new(Vec::<String>::new()),
                &serde_json::json!({}),
                Duration::from_secs(1),
            )
            .await
            .unwrap_err();
        assert_eq!(err.attempts, 0);
    }
}
