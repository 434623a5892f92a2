use std::time::Duration;

use list_logging::list_warn;

use crate::{FetchRequest, FetchResponse, SourceError};

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, SourceError>;
}

/// Data source backed by an HTTP list endpoint.
///
/// Sends `page` and `flowName` as query parameters in the same canonical
/// form the address bar uses: `page` only when above 1, `flowName` only
/// when non-empty.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpDataSource {
    pub fn new(base_url: &str, settings: SourceSettings) -> Result<Self, SourceError> {
        let base_url = reqwest::Url::parse(base_url)
            .map_err(|err| SourceError::InvalidBaseUrl(err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SourceError::Network(err.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn request_url(&self, request: &FetchRequest) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if request.page > 1 || !request.flow_name.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if request.page > 1 {
                pairs.append_pair("page", &request.page.to_string());
            }
            if !request.flow_name.is_empty() {
                pairs.append_pair("flowName", &request.flow_name);
            }
        }
        url
    }
}

#[async_trait::async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, SourceError> {
        let url = self.request_url(request);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            list_warn!("list fetch failed with status {}", status);
            return Err(SourceError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes).map_err(|err| {
            list_warn!("list fetch returned malformed payload: {}", err);
            SourceError::MalformedPayload(err.to_string())
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        return SourceError::Timeout;
    }
    SourceError::Network(err.to_string())
}
