//! Query parameter sets
//!
//! A small ordered map of query parameters where setting a key replaces any
//! previous value. Keys are encoded in sorted order.

use std::collections::BTreeMap;
use url::Url;

/// Query parameters attached to a request.
///
/// Endpoint operations pass `Some(params)` when they supply their own set and
/// `None` when the query already present on the resolved URL should be kept.
/// An empty `QueryParams` is not the same as `None`: it replaces the URL's
/// existing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the query already present on `url`.
    ///
    /// When a key occurs more than once the last occurrence wins.
    pub fn from_url(url: &Url) -> Self {
        let values = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { values }
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Replaces the query of `url` with these parameters.
    pub fn apply_to(&self, url: &mut Url) {
        if self.values.is_empty() {
            url.set_query(None);
            return;
        }
        url.query_pairs_mut().clear().extend_pairs(self.values.iter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut params = QueryParams::new();
        params.set("apikey", "caller").set("apikey", "client");
        let mut url = Url::parse("http://localhost:8989/api/tag").unwrap();
        params.apply_to(&mut url);
        assert_eq!(url.query(), Some("apikey=client"));
    }

    #[test]
    fn test_from_url_reads_existing_query() {
        let url = Url::parse("http://localhost:8989/api/series?seriesId=3&apikey=old").unwrap();
        let mut params = QueryParams::from_url(&url);
        params.set("apikey", "new");
        assert_eq!(params.values.get("seriesId").map(String::as_str), Some("3"));
        assert_eq!(params.values.get("apikey").map(String::as_str), Some("new"));
    }

    #[test]
    fn test_apply_encodes_sorted_keys() {
        let mut url = Url::parse("http://localhost:8989/api/calendar?stale=1").unwrap();
        let mut params = QueryParams::new();
        params.set("start", "2017-01-01").set("end", "2017-01-31").set("apikey", "k");
        params.apply_to(&mut url);
        assert_eq!(
            url.query(),
            Some("apikey=k&end=2017-01-31&start=2017-01-01")
        );
    }

    #[test]
    fn test_apply_empty_clears_query() {
        let mut url = Url::parse("http://localhost:8989/api/tag?stale=1").unwrap();
        QueryParams::new().apply_to(&mut url);
        assert_eq!(url.query(), None);
    }
}
