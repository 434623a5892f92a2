//! Flowlist engine: fetch scheduling and data-source IO.
mod scheduler;
mod source;
mod types;

pub use scheduler::{DispatchTiming, FetchScheduler, SchedulerSettings, SettledFetch};
pub use source::{DataSource, HttpDataSource, SourceSettings};
pub use types::{FetchRequest, FetchResponse, FetchToken, FlowRecord, PageMeta, SourceError};
