use std::collections::VecDeque;
use std::sync::Arc;

use flowlist_core::{
    update, Effect, FetchFailure, FetchResult, FetchTiming, FlowItem, ListState, ListViewModel,
    Msg, PageInfo,
};
use flowlist_engine::{
    DataSource, DispatchTiming, FetchRequest, FetchResponse, FetchScheduler, FlowRecord,
    SchedulerSettings, SettledFetch,
};
use list_logging::list_warn;
use tokio::sync::{mpsc, watch};

use crate::address_bar::AddressBar;

/// Drives the list view: applies core messages, executes the resulting
/// effects against the scheduler and the address bar, and publishes a view
/// model to the single downstream renderer whenever the state changed.
pub struct ListSession {
    state: ListState,
    scheduler: FetchScheduler,
    address_bar: AddressBar,
    view_tx: watch::Sender<ListViewModel>,
}

impl ListSession {
    /// Builds a session and performs the initial load for `initial_query`.
    ///
    /// Must be called from within a tokio runtime. Settled fetches arrive
    /// on the returned receiver and are fed back via
    /// [`ListSession::handle_settled`].
    pub fn new(
        source: Arc<dyn DataSource>,
        settings: SchedulerSettings,
        initial_query: &str,
    ) -> (
        Self,
        watch::Receiver<ListViewModel>,
        mpsc::UnboundedReceiver<SettledFetch>,
    ) {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let state = ListState::new();
        let (view_tx, view_rx) = watch::channel(state.view());
        let mut session = Self {
            state,
            scheduler: FetchScheduler::new(source, settings, settled_tx),
            address_bar: AddressBar::new(initial_query),
            view_tx,
        };
        session.handle(Msg::LocationChanged {
            raw_query: initial_query.to_string(),
        });
        (session, view_rx, settled_rx)
    }

    pub fn view(&self) -> ListViewModel {
        self.state.view()
    }

    pub fn raw_query(&self) -> &str {
        self.address_bar.raw_query()
    }

    /// User-initiated navigation: pagination links and direct address
    /// edits land here.
    pub fn navigate(&mut self, raw_query: impl Into<String>) {
        if let Some(raw_query) = self.address_bar.apply(raw_query.into()) {
            self.handle(Msg::LocationChanged { raw_query });
        }
    }

    pub fn handle_settled(&mut self, settled: SettledFetch) {
        let result = match settled.result {
            Ok(response) => Ok(map_response(response)),
            Err(err) => {
                list_warn!("fetch token={} failed: {}", settled.token, err);
                Err(FetchFailure::new(err.to_string()))
            }
        };
        self.handle(Msg::FetchSettled {
            token: settled.token,
            result,
        });
    }

    pub fn handle(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                match effect {
                    Effect::ScheduleFetch {
                        token,
                        query,
                        timing,
                    } => {
                        self.scheduler.schedule(
                            token,
                            FetchRequest {
                                page: query.page,
                                flow_name: query.filter_text,
                            },
                            map_timing(timing),
                        );
                    }
                    Effect::Navigate { raw_query } => {
                        if let Some(raw_query) = self.address_bar.apply(raw_query) {
                            inbox.push_back(Msg::LocationChanged { raw_query });
                        }
                    }
                    Effect::CancelPending => self.scheduler.cancel(),
                }
            }
        }

        if self.state.consume_dirty() {
            let _ = self.view_tx.send(self.state.view());
        }
    }

    /// Teardown on navigation away from the view.
    pub fn close(&mut self) {
        self.handle(Msg::ViewClosed);
    }
}

fn map_timing(timing: FetchTiming) -> DispatchTiming {
    match timing {
        FetchTiming::Debounced => DispatchTiming::Debounced,
        FetchTiming::Immediate => DispatchTiming::Immediate,
    }
}

fn map_response(response: FetchResponse) -> FetchResult {
    FetchResult {
        items: response.items.into_iter().map(map_record).collect(),
        page_info: response.meta.map(|meta| PageInfo {
            current_page: meta.current_page,
            total_pages: meta.total_pages,
        }),
    }
}

fn map_record(record: FlowRecord) -> FlowItem {
    FlowItem {
        id: record.id,
        name: record.name,
        active: record.active,
    }
}
