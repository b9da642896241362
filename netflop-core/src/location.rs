//! The page's addressable location and its query parameters.

use url::Url;

/// Parameter carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Mutable page URL. Other parameters and their order are preserved when one
/// parameter is set or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlLocation {
    url: Url,
}

impl UrlLocation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Set `name` to `value`; an empty value removes the parameter.
    pub fn set_param(&mut self, name: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let position = pairs.iter().position(|(key, _)| key == name);
        pairs.retain(|(key, _)| key != name);
        if !value.is_empty() {
            let at = position.unwrap_or(pairs.len());
            pairs.insert(at, (name.to_string(), value.to_string()));
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url
                .query_pairs_mut()
                .clear()
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
    }

    /// Current search text, trimmed; `None` when absent or blank.
    pub fn query(&self) -> Option<String> {
        self.param(QUERY_PARAM)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn set_query(&mut self, query: &str) {
        self.set_param(QUERY_PARAM, query.trim());
    }

    pub fn clear_query(&mut self) {
        self.set_param(QUERY_PARAM, "");
    }
}
