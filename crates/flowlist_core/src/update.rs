use crate::{Effect, FetchTiming, ListState, Msg, QueryState, RecoveryPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ListState, msg: Msg) -> (ListState, Vec<Effect>) {
    let effects = match msg {
        Msg::LocationChanged { raw_query } => {
            let query = QueryState::decode(&raw_query);
            // Filter edits are debounced so typing does not fetch per
            // keystroke; page-only changes (including a correction landing)
            // fetch right away.
            let timing = if query.filter_text != state.query().filter_text {
                FetchTiming::Debounced
            } else {
                FetchTiming::Immediate
            };
            state.apply_location(query.clone());
            let token = state.begin_fetch();
            vec![Effect::ScheduleFetch {
                token,
                query,
                timing,
            }]
        }
        Msg::SearchChanged { text } => {
            // A search edit resets pagination. State itself only moves once
            // the navigation comes back through the address bar.
            vec![Effect::Navigate {
                raw_query: QueryState::new(1, text).encode(),
            }]
        }
        Msg::FetchSettled { token, result } => {
            if token != state.latest_token() {
                // A newer fetch was scheduled after this one was dispatched;
                // its completion is stale regardless of arrival order.
                return (state, Vec::new());
            }
            match result {
                Ok(result) => {
                    state.accept_result(result);
                    correction_for_empty_page(&mut state)
                }
                Err(failure) => {
                    state.accept_failure(failure);
                    Vec::new()
                }
            }
        }
        Msg::ItemDuplicated => {
            // The duplicate lands at the top of the list, so jump back to
            // page 1 unless we are already there.
            let on_later_page = state
                .page_info()
                .is_some_and(|info| info.current_page > 1);
            if on_later_page {
                vec![Effect::Navigate {
                    raw_query: QueryState::new(1, state.query().filter_text.clone()).encode(),
                }]
            } else {
                refresh(&mut state)
            }
        }
        Msg::ItemDeleted => refresh(&mut state),
        Msg::ViewClosed => vec![Effect::CancelPending],
    };

    (state, effects)
}

fn refresh(state: &mut ListState) -> Vec<Effect> {
    let token = state.begin_fetch();
    vec![Effect::ScheduleFetch {
        token,
        query: state.query().clone(),
        timing: FetchTiming::Immediate,
    }]
}

/// Issues at most one corrective navigation when the current page settled
/// empty beyond page 1, typically after the last item of a trailing page
/// was removed. An empty page 1 is a legitimate terminal state.
fn correction_for_empty_page(state: &mut ListState) -> Vec<Effect> {
    if !state.items().is_empty()
        || state.query().page <= 1
        || state.recovery() == RecoveryPhase::Correcting
    {
        return Vec::new();
    }

    let page = state.query().page;
    let target = match state.page_info() {
        // An empty page with total_pages >= page is inconsistent data;
        // clamping below the current page keeps the correction from
        // navigating in place and looping.
        Some(info) if info.total_pages >= 1 => info.total_pages.min(page - 1),
        _ => 1,
    };

    state.enter_correction();
    vec![Effect::Navigate {
        raw_query: QueryState::new(target, state.query().filter_text.clone()).encode(),
    }]
}
