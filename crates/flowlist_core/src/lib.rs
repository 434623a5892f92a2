//! Flowlist core: pure state machine for a query-synchronized list view.
mod effect;
mod msg;
mod query;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::{Effect, FetchTiming};
pub use msg::Msg;
pub use query::{QueryState, PARAM_FILTER, PARAM_PAGE};
pub use state::{ListState, RecoveryPhase};
pub use types::{FetchFailure, FetchResult, FetchToken, FlowItem, PageInfo};
pub use update::update;
pub use view_model::ListViewModel;
