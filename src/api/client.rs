use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::{Backend, ChatRequest, ChatResponse, DashboardSummary, IngestResponse};
use crate::logging::{log_api_call, log_api_failure, v_str, ProfileScope};
use crate::state::Config;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// One request per call: no retry, no timeout, no caching, no coalescing.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .with_context(|| format!("invalid api base url: {}", base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client: Client::new(), base })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(&cfg.api_base)
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        op: &'static str,
        failure: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let _scope = ProfileScope::with_context("api_request", &[("op", v_str(op))]);

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(err) => {
                log_api_failure(op, &err.to_string());
                return Err(anyhow!(failure));
            }
        };
        let status = resp.status();
        log_api_call(op, resp.url().as_str(), status.as_u16());
        if !status.is_success() {
            log_api_failure(op, &format!("HTTP {}", status));
            return Err(anyhow!(failure));
        }
        resp.json::<T>().await.map_err(|err| {
            log_api_failure(op, &err.to_string());
            anyhow!(failure)
        })
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn ingest(&self) -> Result<IngestResponse> {
        let url = self.endpoint("ingest")?;
        self.send_json("ingest", "Ingest failed", self.client.post(url)).await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let url = self.endpoint("dashboard/summary")?;
        self.send_json(
            "dashboard_summary",
            "Failed to fetch dashboard summary",
            self.client.get(url),
        )
        .await
    }

    async fn chat(&self, message: &str) -> Result<ChatResponse> {
        let url = self.endpoint("agent/chat")?;
        let body = ChatRequest { message: message.to_string() };
        self.send_json("chat", "Chat failed", self.client.post(url).json(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_keep_base_path() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/");
        assert_eq!(
            client.endpoint("dashboard/summary").unwrap().as_str(),
            "http://localhost:8000/api/dashboard/summary"
        );
        assert_eq!(
            client.endpoint("agent/chat").unwrap().as_str(),
            "http://localhost:8000/api/agent/chat"
        );
    }

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        let client = ApiClient::new("http://127.0.0.1:9000/api/").unwrap();
        assert_eq!(client.endpoint("ingest").unwrap().as_str(), "http://127.0.0.1:9000/api/ingest");
    }

    #[test]
    fn test_rejects_garbage_base() {
        assert!(ApiClient::new("not a url").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_generic_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ApiClient::new(&format!("http://127.0.0.1:{}/api", port)).unwrap();
        let err = client.ingest().await.unwrap_err();
        assert_eq!(err.to_string(), "Ingest failed");
    }
}
