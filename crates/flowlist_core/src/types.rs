/// Monotonically increasing tag for dispatched fetches. Only the result
/// carrying the highest token issued so far is accepted into the state.
pub type FetchToken = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowItem {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
}

/// Settled output of the external data source for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub items: Vec<FlowItem>,
    pub page_info: Option<PageInfo>,
}

/// Opaque fetch failure; the detail belongs to the data source and is
/// passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
