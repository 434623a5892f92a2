use url::form_urlencoded;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_FILTER: &str = "flowName";

/// Canonical query state derived from the address bar.
///
/// Always constructed through [`QueryState::decode`] or [`QueryState::new`];
/// `page` is never below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub filter_text: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            filter_text: String::new(),
        }
    }
}

impl QueryState {
    pub fn new(page: u32, filter_text: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            filter_text: filter_text.into(),
        }
    }

    /// Parses a raw address-bar query string into canonical state.
    ///
    /// A missing, malformed, or zero `page` falls back to 1; a missing
    /// filter falls back to the empty string. Unknown parameters are
    /// ignored.
    pub fn decode(raw: &str) -> Self {
        let mut page = 1u32;
        let mut filter_text = String::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                PARAM_PAGE => {
                    page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                PARAM_FILTER => filter_text = value.into_owned(),
                _ => {}
            }
        }
        Self { page, filter_text }
    }

    /// Canonical encoding: defaults are omitted so the address bar stays
    /// clean at page 1 with no filter. `decode(encode(s)) == s`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if self.page > 1 {
            serializer.append_pair(PARAM_PAGE, &self.page.to_string());
        }
        if !self.filter_text.is_empty() {
            serializer.append_pair(PARAM_FILTER, &self.filter_text);
        }
        serializer.finish()
    }
}
