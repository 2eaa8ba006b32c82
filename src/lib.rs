//! sonarr_client - A blocking client for the Sonarr REST API
//!
//! This library builds authenticated requests against a Sonarr server, sends
//! them and decodes the JSON responses into typed structures. It covers
//! series, episodes, episode files, the download queue, the calendar, disk
//! space, tags and the system status.
//!
//! Every operation is a single request/response round trip. There is no
//! retrying, caching or paging. A response with a non-success status is
//! decoded like any other; whether the body makes sense is up to the caller.
//!
//! ```no_run
//! use sonarr_client::Sonarr;
//!
//! let sonarr = Sonarr::new("http://localhost:8989/api", "0123456789abcdef")?;
//! let mut episode = sonarr.get_episode(42)?;
//! episode.monitored = false;
//! // The reply is what the server actually stored
//! let stored = sonarr.update_episode(&episode)?;
//! println!("episode {} monitored: {}", stored.id, stored.monitored);
//! # Ok::<(), sonarr_client::SonarrError>(())
//! ```

mod client;
mod endpoints;
mod models;
mod query;

pub use client::Sonarr;
pub use models::{
    AlternateTitle, Calendar, DiskSpace, Episode, EpisodeFile, Image, Quality, QualityDefinition,
    Queue, Ratings, Revision, Season, SeasonStatistics, Series, StatusMessage, SystemStatus, Tag,
};

use thiserror::Error;

/// Result type returned by all client operations
pub type Result<T> = std::result::Result<T, SonarrError>;

/// Errors returned by the Sonarr client
#[derive(Debug, Error)]
pub enum SonarrError {
    /// The base address passed to the constructor was empty
    #[error("address required")]
    MissingAddress,

    /// The API key passed to the constructor was empty
    #[error("key required")]
    MissingApiKey,

    /// The base address could not be parsed as a URL
    #[error("invalid address {address}: {source}")]
    InvalidAddress {
        address: String,
        source: url::ParseError,
    },

    /// An endpoint path could not be resolved against the base address
    #[error("invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    /// An identifier was zero or negative
    #[error("{name} must be a positive integer (got {value})")]
    InvalidId { name: &'static str, value: i64 },

    /// A request payload could not be encoded as JSON
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP exchange failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not match the expected structure
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
}
