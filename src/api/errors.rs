use thiserror::Error;
use url::Url;

use crate::errors::RequestFailure;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Invalid base URL: {0}, provide an HTTP or HTTPS URL that can serve as a base")]
    CannotBeBase(Url),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Failure(#[from] RequestFailure),

    #[error("Response from {url} is not valid JSON: {source}")]
    Decode {
        url: Url,
        source: serde_json::Error,
    },

    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
