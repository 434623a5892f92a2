/// Stand-in for the browser address bar: the one externally visible
/// query-string surface.
///
/// Applying an unchanged query is dropped, the way a router ignores a
/// navigation to the current location. That also keeps a correction
/// navigation from re-entering the state machine in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressBar {
    raw_query: String,
}

impl AddressBar {
    pub fn new(raw_query: impl Into<String>) -> Self {
        Self {
            raw_query: raw_query.into(),
        }
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Sets the address; returns the new raw query when it actually
    /// changed, `None` for a no-op navigation.
    pub fn apply(&mut self, raw_query: String) -> Option<String> {
        if self.raw_query == raw_query {
            return None;
        }
        self.raw_query = raw_query.clone();
        Some(raw_query)
    }
}
