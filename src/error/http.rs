use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build {verb} request to {url}: {source}")]
    BuildRequestFailed {
        verb: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("error making {verb} request to {url}: {source}")]
    RequestFailed {
        verb: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

