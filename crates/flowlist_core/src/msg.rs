use crate::{FetchFailure, FetchResult, FetchToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The address bar changed: user navigation, the initial load, or a
    /// correction navigation landing.
    LocationChanged { raw_query: String },
    /// User edited the filter box (raw text, one message per keystroke).
    SearchChanged { text: String },
    /// A dispatched fetch settled, successfully or not.
    FetchSettled {
        token: FetchToken,
        result: Result<FetchResult, FetchFailure>,
    },
    /// A collaborator duplicated a list item.
    ItemDuplicated,
    /// A collaborator deleted a list item.
    ItemDeleted,
    /// The view is being torn down (navigation away).
    ViewClosed,
}
