use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::{Location, RawDocument};

pub mod openmeteo;

pub use openmeteo::OpenMeteo;

/// Failures on the way to a raw response body.
///
/// Extraction never fails; fetching is the only fallible seam in the crate.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather service responded with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
}

/// A source of current weather observations for a coordinate.
///
/// Implementations return the response body as opaque text; interpreting it
/// is the field mapper's job.
#[async_trait]
pub trait ObservationSource: Send + Sync + Debug {
    async fn fetch_current(&self, location: &Location) -> Result<RawDocument, FetchError>;
}

/// Trim a response body for inclusion in an error message.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
