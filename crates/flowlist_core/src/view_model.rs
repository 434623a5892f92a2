use crate::{FetchFailure, FlowItem, PageInfo};

/// What the external renderer reads. `loading` covers both an outstanding
/// fetch for the current query and a pending correction navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub loading: bool,
    pub items: Vec<FlowItem>,
    pub page_info: Option<PageInfo>,
    pub error: Option<FetchFailure>,
    pub page: u32,
    pub filter_text: String,
}
