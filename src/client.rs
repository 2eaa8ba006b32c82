//! Sonarr client and request construction
//!
//! The [`Sonarr`] value holds the normalized base address, the API key and a
//! reusable blocking HTTP client. Every endpoint operation goes through one of
//! the `get`, `put` or `delete` helpers here, which resolve the endpoint
//! against the base address, attach the API key and decode the JSON body.

use crate::query::QueryParams;
use crate::{Result, SonarrError};
use log::{debug, trace};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

/// Name of the query parameter carrying the API key.
const API_KEY_PARAM: &str = "apikey";

/// Client for a Sonarr server's REST API.
///
/// Calls block until the server has answered. The client can be cloned
/// cheaply and shared between threads; clones share the underlying
/// connection pool.
///
/// # Examples
///
/// ```no_run
/// use sonarr_client::Sonarr;
///
/// let sonarr = Sonarr::new("http://localhost:8989/api", "0123456789abcdef")?;
/// for series in sonarr.get_all_series()? {
///     println!("{} ({} seasons)", series.title, series.season_count);
/// }
/// # Ok::<(), sonarr_client::SonarrError>(())
/// ```
#[derive(Clone)]
pub struct Sonarr {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl Sonarr {
    /// Creates a client for the server at `address` using a default HTTP client.
    ///
    /// `address` is the API root, e.g. `http://localhost:8989/api`. A trailing
    /// `/` is appended when missing so endpoint paths resolve below it.
    ///
    /// # Errors
    ///
    /// Fails if `address` or `api_key` is empty, or if `address` is not a
    /// valid absolute URL.
    pub fn new(address: &str, api_key: &str) -> Result<Self> {
        Self::with_http_client(address, api_key, Client::new())
    }

    /// Creates a client that sends its requests through `client`.
    ///
    /// Use this to configure timeouts, proxies or TLS settings on the
    /// transport. Validation is the same as for [`Sonarr::new`].
    pub fn with_http_client(address: &str, api_key: &str, client: Client) -> Result<Self> {
        if address.is_empty() {
            return Err(SonarrError::MissingAddress);
        }
        if api_key.is_empty() {
            return Err(SonarrError::MissingApiKey);
        }

        let base_url = normalize_base_url(address)?;

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            client,
        })
    }

    /// The normalized base address. Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `endpoint` against the base address and builds its query.
    ///
    /// With `Some(params)` the query consists of exactly those parameters;
    /// with `None` the query already present on the resolved URL is kept.
    /// The API key is set last in both cases and overrides any value the
    /// caller or the URL supplied.
    pub(crate) fn endpoint_url(&self, endpoint: &str, params: Option<QueryParams>) -> Result<Url> {
        // Build the absolute URL below the base path
        let mut url =
            self.base_url
                .join(endpoint)
                .map_err(|source| SonarrError::InvalidEndpoint {
                    endpoint: endpoint.to_string(),
                    source,
                })?;

        // The API key always wins over anything already in the query
        let mut params = params.unwrap_or_else(|| QueryParams::from_url(&url));
        params.set(API_KEY_PARAM, self.api_key.as_str());
        params.apply_to(&mut url);

        Ok(url)
    }

    /// Issues a GET to `endpoint` and decodes the JSON response.
    pub(crate) fn get<T>(&self, endpoint: &str, params: Option<QueryParams>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, params)?;
        self.execute(Method::GET, endpoint, self.client.get(url))
    }

    /// Issues a PUT of `payload` as JSON to `endpoint` and decodes the response.
    ///
    /// The payload is serialized before anything else happens, so a payload
    /// that cannot be encoded never reaches the network.
    pub(crate) fn put<P, T>(&self, endpoint: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(payload).map_err(SonarrError::Serialization)?;
        let url = self.endpoint_url(endpoint, None)?;
        let request = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.execute(Method::PUT, endpoint, request)
    }

    /// Issues a DELETE to `endpoint` and decodes the JSON response.
    pub(crate) fn delete<T>(&self, endpoint: &str, params: Option<QueryParams>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, params)?;
        self.execute(Method::DELETE, endpoint, self.client.delete(url))
    }

    /// Sends the request and decodes the body, whatever the response status.
    ///
    /// The body is read to the end before decoding so the connection goes
    /// back to the pool even when decoding fails.
    fn execute<T>(&self, method: Method, endpoint: &str, request: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        // Make the HTTP request
        let response = request.send()?;
        let status = response.status();
        debug!("{} {} -> {}", method, endpoint, status);

        // Non-success statuses are decoded like any other response
        let body = response.text()?;
        trace!("{} {} returned {} bytes", method, endpoint, body.len());

        // Parse the JSON response
        serde_json::from_str(&body).map_err(|source| SonarrError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

impl fmt::Debug for Sonarr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sonarr")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Parses `address`, appending a trailing `/` first when it has none.
fn normalize_base_url(address: &str) -> Result<Url> {
    let mut address = address.to_string();
    if !address.ends_with('/') {
        address.push('/');
    }

    Url::parse(&address).map_err(|source| SonarrError::InvalidAddress { address, source })
}

/// Rejects identifiers that are zero or negative before any request is made.
pub(crate) fn require_positive_id(name: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(SonarrError::InvalidId { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sonarr(address: &str) -> Sonarr {
        Sonarr::new(address, "secret").unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(
            sonarr("http://localhost:8989/api").base_url().as_str(),
            "http://localhost:8989/api/"
        );
    }

    #[test]
    fn test_base_url_normalization_is_idempotent() {
        let once = sonarr("http://localhost:8989/api");
        let twice = sonarr(once.base_url().as_str());
        assert_eq!(once.base_url(), twice.base_url());
        assert!(!twice.base_url().as_str().ends_with("//"));
    }

    #[test]
    fn test_construction_requires_address() {
        let err = Sonarr::new("", "secret").unwrap_err();
        assert!(matches!(err, SonarrError::MissingAddress));
        assert_eq!(err.to_string(), "address required");
    }

    #[test]
    fn test_construction_requires_api_key() {
        let err = Sonarr::new("http://localhost:8989/api", "").unwrap_err();
        assert!(matches!(err, SonarrError::MissingApiKey));
        assert_eq!(err.to_string(), "key required");
    }

    #[test]
    fn test_construction_rejects_unparseable_address() {
        let err = Sonarr::new("not a url", "secret").unwrap_err();
        assert!(matches!(err, SonarrError::InvalidAddress { .. }));
        assert!(err.to_string().starts_with("invalid address"));
    }

    #[test]
    fn test_endpoint_resolves_below_base_path() {
        let url = sonarr("http://localhost:8989/api")
            .endpoint_url("series/5", None)
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8989/api/series/5?apikey=secret");
    }

    #[test]
    fn test_api_key_overrides_caller_value() {
        let mut params = QueryParams::new();
        params.set("apikey", "forged").set("seriesId", "3");
        let url = sonarr("http://localhost:8989/api")
            .endpoint_url("episode", Some(params))
            .unwrap();
        assert_eq!(url.query(), Some("apikey=secret&seriesId=3"));
    }

    #[test]
    fn test_absent_params_keep_existing_query() {
        let url = sonarr("http://localhost:8989/api")
            .endpoint_url("calendar?start=2017-01-01&apikey=forged", None)
            .unwrap();
        assert_eq!(url.query(), Some("apikey=secret&start=2017-01-01"));
    }

    #[test]
    fn test_empty_params_replace_existing_query() {
        let url = sonarr("http://localhost:8989/api")
            .endpoint_url("calendar?start=2017-01-01", Some(QueryParams::new()))
            .unwrap();
        assert_eq!(url.query(), Some("apikey=secret"));
    }

    #[test]
    fn test_unencodable_payload_fails_before_sending() {
        // Nothing listens on port 1, so reaching the network would be a request error
        let sonarr = sonarr("http://127.0.0.1:1/api");
        let mut payload = HashMap::new();
        payload.insert((1, 2), 3);

        let err = sonarr
            .put::<_, serde_json::Value>("series/1", &payload)
            .unwrap_err();
        assert!(matches!(err, SonarrError::Serialization(_)), "{:?}", err);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let rendered = format!("{:?}", sonarr("http://localhost:8989/api"));
        assert!(rendered.contains("localhost:8989"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_require_positive_id() {
        assert!(require_positive_id("seriesID", 1).is_ok());
        let err = require_positive_id("seriesID", 0).unwrap_err();
        assert_eq!(err.to_string(), "seriesID must be a positive integer (got 0)");
        assert!(require_positive_id("seriesID", -4).is_err());
    }
}
