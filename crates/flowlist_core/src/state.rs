use crate::view_model::ListViewModel;
use crate::{FetchFailure, FetchResult, FetchToken, FlowItem, PageInfo, QueryState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPhase {
    /// Normal operation.
    #[default]
    Stable,
    /// A correction navigation has been issued and has not yet come back
    /// through the address bar.
    Correcting,
}

/// Authoritative state of the list view: current query, latest settled
/// result, loading flag, and the page-recovery phase.
///
/// Mutated only through [`crate::update`]; the renderer reads it via
/// [`ListState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    query: QueryState,
    items: Vec<FlowItem>,
    page_info: Option<PageInfo>,
    error: Option<FetchFailure>,
    loading: bool,
    latest_token: FetchToken,
    recovery: RecoveryPhase,
    dirty: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ListViewModel {
        ListViewModel {
            // While a correction navigation is pending the view keeps
            // reporting progress instead of flashing an empty result.
            loading: self.loading || self.recovery == RecoveryPhase::Correcting,
            items: self.items.clone(),
            page_info: self.page_info,
            error: self.error.clone(),
            page: self.query.page,
            filter_text: self.query.filter_text.clone(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn latest_token(&self) -> FetchToken {
        self.latest_token
    }

    pub fn recovery(&self) -> RecoveryPhase {
        self.recovery
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        self.page_info
    }

    /// Returns whether the view changed since the last call, clearing the
    /// flag. Drivers render only when this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn items(&self) -> &[FlowItem] {
        &self.items
    }

    pub(crate) fn apply_location(&mut self, query: QueryState) {
        self.query = query;
        self.recovery = RecoveryPhase::Stable;
        self.dirty = true;
    }

    /// Allocates the next fetch token and raises the loading flag. Any
    /// fetch still in flight under an older token becomes stale.
    pub(crate) fn begin_fetch(&mut self) -> FetchToken {
        self.latest_token += 1;
        self.loading = true;
        self.dirty = true;
        self.latest_token
    }

    pub(crate) fn accept_result(&mut self, result: FetchResult) {
        self.items = result.items;
        self.page_info = result.page_info;
        self.error = None;
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn accept_failure(&mut self, failure: FetchFailure) {
        self.items.clear();
        self.page_info = None;
        self.error = Some(failure);
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn enter_correction(&mut self) {
        self.recovery = RecoveryPhase::Correcting;
        self.dirty = true;
    }
}
