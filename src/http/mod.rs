mod response;

pub use response::ResponseHandler;

use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use std::ops::Deref;
use thiserror::Error;

const GITHUB_API_VERSION: &str = "2022-11-28";

pub struct HttpClient {
    client: Client,
    token: String,
}

impl HttpClient {
    pub fn new(token: impl Into<String>) -> Self {
        HttpClient {
            client: Client::new(),
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, env!("CARGO_PKG_NAME"))
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Resource not found: {message}")]
    NotFound { message: String },
    #[error("Request failed with status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize request")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

pub fn parse<T: DeserializeOwned>(payload: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(payload).map_err(|cause| Error::ParseResponseError { cause })
}
