use crate::{FetchToken, QueryState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a fetch to the scheduler. Arming a new fetch replaces any
    /// pending one; a replaced pending fetch is never dispatched.
    ScheduleFetch {
        token: FetchToken,
        query: QueryState,
        timing: FetchTiming,
    },
    /// Apply a raw query string to the address bar. Re-enters the state
    /// machine as `Msg::LocationChanged` when the address actually changes.
    Navigate { raw_query: String },
    /// Clear any pending scheduled fetch without replacement.
    CancelPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTiming {
    /// Dispatch after the quiet interval; used while filter text is typed.
    Debounced,
    /// Dispatch right away; used for page navigation and explicit refresh.
    Immediate,
}
