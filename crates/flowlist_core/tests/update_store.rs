use std::sync::Once;

use flowlist_core::{
    update, Effect, FetchFailure, FetchResult, FetchTiming, FlowItem, ListState, Msg, PageInfo,
    QueryState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(list_logging::initialize_for_tests);
}

fn open(raw_query: &str) -> (ListState, Vec<Effect>) {
    update(
        ListState::new(),
        Msg::LocationChanged {
            raw_query: raw_query.to_string(),
        },
    )
}

fn item(id: &str) -> FlowItem {
    FlowItem {
        id: id.to_string(),
        name: format!("flow {id}"),
        active: true,
    }
}

fn success(items: Vec<FlowItem>, page_info: Option<PageInfo>) -> Result<FetchResult, FetchFailure> {
    Ok(FetchResult { items, page_info })
}

#[test]
fn location_change_schedules_fetch_and_raises_loading() {
    init_logging();
    let (mut state, effects) = open("page=2");

    assert!(state.view().loading);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::ScheduleFetch {
            token: 1,
            query: QueryState::new(2, ""),
            timing: FetchTiming::Immediate,
        }]
    );
}

#[test]
fn filter_change_is_debounced_page_change_is_not() {
    init_logging();
    let (state, _effects) = open("");
    let (state, effects) = update(
        state,
        Msg::LocationChanged {
            raw_query: "flowName=inv".to_string(),
        },
    );
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleFetch {
            timing: FetchTiming::Debounced,
            ..
        }]
    ));

    let (_state, effects) = update(
        state,
        Msg::LocationChanged {
            raw_query: "page=2&flowName=inv".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ScheduleFetch {
            token: 3,
            query: QueryState::new(2, "inv"),
            timing: FetchTiming::Immediate,
        }]
    );
}

#[test]
fn accepted_result_clears_loading_and_stores_items() {
    init_logging();
    let (state, _effects) = open("");
    let (mut state, effects) = update(
        state,
        Msg::FetchSettled {
            token: 1,
            result: success(vec![item("a"), item("b")], Some(PageInfo {
                current_page: 1,
                total_pages: 1,
            })),
        },
    );

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.error, None);
    assert!(state.consume_dirty());
    assert!(effects.is_empty());
}

#[test]
fn stale_completion_is_discarded() {
    init_logging();
    let (state, _effects) = open("");
    // A second fetch is scheduled before the first settles.
    let (mut state, _effects) = update(state, Msg::ItemDeleted);
    assert!(state.consume_dirty());

    // Token 1 settles late, after token 2 was dispatched.
    let (mut state, effects) = update(
        state,
        Msg::FetchSettled {
            token: 1,
            result: success(vec![item("old")], None),
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().loading, "stale settle must not clear loading");
    assert!(state.view().items.is_empty());
    assert!(!state.consume_dirty(), "stale settle must not trigger render");

    // Token 2 settles and wins regardless of arrival order.
    let (mut state, _effects) = update(
        state,
        Msg::FetchSettled {
            token: 2,
            result: success(vec![item("fresh")], None),
        },
    );
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.items, vec![item("fresh")]);
}

#[test]
fn failure_clears_items_and_surfaces_error() {
    init_logging();
    let (state, _effects) = open("");
    let (state, _effects) = update(
        state,
        Msg::FetchSettled {
            token: 1,
            result: success(vec![item("a")], None),
        },
    );
    let (mut state, effects) = update(
        state,
        Msg::FetchSettled {
            token: 1,
            result: Err(FetchFailure::new("boom")),
        },
    );

    // Second settle for the same token is not stale; it is simply the
    // latest word from the data source.
    let view = state.view();
    assert!(!view.loading);
    assert!(view.items.is_empty());
    assert_eq!(view.error, Some(FetchFailure::new("boom")));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn search_change_navigates_to_page_one() {
    init_logging();
    let (state, _effects) = open("page=5&flowName=old");
    let (_state, effects) = update(
        state,
        Msg::SearchChanged {
            text: "new".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Navigate {
            raw_query: "flowName=new".to_string(),
        }]
    );
}

#[test]
fn duplicate_on_page_one_refreshes_immediately() {
    init_logging();
    let (state, _effects) = open("flowName=inv");
    let (state, _effects) = update(
        state,
        Msg::FetchSettled {
            token: 1,
            result: success(vec![item("a")], Some(PageInfo {
                current_page: 1,
                total_pages: 3,
            })),
        },
    );

    let (_state, effects) = update(state, Msg::ItemDuplicated);
    assert_eq!(
        effects,
        vec![Effect::ScheduleFetch {
            token: 2,
            query: QueryState::new(1, "inv"),
            timing: FetchTiming::Immediate,
        }]
    );
}

#[test]
fn duplicate_on_later_page_navigates_to_page_one() {
    init_logging();
    let (state, _effects) = open("page=3&flowName=inv");
    let (state, _effects) = update(
        state,
        Msg::FetchSettled {
            token: 1,
            result: success(vec![item("a")], Some(PageInfo {
                current_page: 3,
                total_pages: 5,
            })),
        },
    );

    let (_state, effects) = update(state, Msg::ItemDuplicated);
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            raw_query: "flowName=inv".to_string(),
        }]
    );
}

#[test]
fn delete_refreshes_current_query_immediately() {
    init_logging();
    let (state, _effects) = open("page=2");
    let (state, _effects) = update(
        state,
        Msg::FetchSettled {
            token: 1,
            result: success(vec![item("a"), item("b")], None),
        },
    );

    let (_state, effects) = update(state, Msg::ItemDeleted);
    assert_eq!(
        effects,
        vec![Effect::ScheduleFetch {
            token: 2,
            query: QueryState::new(2, ""),
            timing: FetchTiming::Immediate,
        }]
    );
}

#[test]
fn view_closed_cancels_pending_fetch() {
    init_logging();
    let (state, _effects) = open("");
    let (_state, effects) = update(state, Msg::ViewClosed);
    assert_eq!(effects, vec![Effect::CancelPending]);
}
