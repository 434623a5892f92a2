use serde::Deserialize;

pub type FetchToken = u64;

/// Query handed to the data source, already resolved to canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub page: u32,
    pub flow_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlowRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u32,
}

/// Wire shape of a list response: `{ "data": [...], "meta": {...} }`.
/// The `meta` block is optional; sources without pagination omit it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchResponse {
    #[serde(rename = "data")]
    pub items: Vec<FlowRecord>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
