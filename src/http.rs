//! A blocking http client for the edge platform api.
//!
//! The client is created once per invocation. The token, the default
//! headers and the timeout are configured at construction; every
//! request afterwards only adds a path and maybe a body.
//!
//! Non-success responses and transport failures are translated into
//! [`Error`] values whose message is meant to be shown to the user
//! as is.

pub mod payload;
mod proxy;
mod util;

pub use self::proxy::{ProxyAuth, ProxySetting};
pub use self::util::HELP_HINT;

use self::payload::Envelope;
use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use snafu::{ResultExt, Snafu};
use std::time::Duration;

use crate::error::ErrorKind;

const TIMEOUT: Duration = Duration::from_secs(30);
const ACCEPT_VERSION: &str = "application/json; version=3";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Unable to create the http client: {}", source))]
    ClientCreate { source: reqwest::Error },

    #[snafu(display("Invalid proxy url {}: {}", url, source))]
    InvalidProxy { source: reqwest::Error, url: String },

    #[snafu(display("The api token contains invalid characters"))]
    InvalidToken {
        source: reqwest::header::InvalidHeaderValue,
    },

    #[snafu(display("{}. {}", message, HELP_HINT))]
    Status {
        status: StatusCode,
        message: String,
        url: String,
    },

    #[snafu(display("Request to {} failed: {}. {}", url, source, HELP_HINT))]
    Transport { source: reqwest::Error, url: String },

    #[snafu(display("Unexpected response from {}: {}", url, source))]
    DeserializeResp {
        source: serde_json::Error,
        url: String,
    },
}

impl Error {
    /// The http status, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Status { .. } => ErrorKind::Api,
            _ => ErrorKind::Transport,
        }
    }
}

/// Settings applied once when building the client.
pub struct ClientSettings {
    pub token: Option<String>,
    pub proxy: ProxySetting,
    pub accept_invalid_certs: bool,
}

pub struct Client {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Client {
    pub fn new<S: Into<String>>(api_url: S, settings: ClientSettings) -> Result<Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VERSION));
        match &settings.token {
            Some(token) => {
                let mut value =
                    HeaderValue::from_str(&format!("token {}", token)).context(InvalidTokenSnafu)?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None => log::warn!("No api token configured; requests are sent unauthenticated"),
        }

        let builder = reqwest::blocking::ClientBuilder::new()
            .default_headers(headers)
            .user_agent(concat!("edgectl/", env!("CARGO_PKG_VERSION")))
            .timeout(TIMEOUT)
            .danger_accept_invalid_certs(settings.accept_invalid_certs);
        let client = settings
            .proxy
            .apply(builder)?
            .build()
            .context(ClientCreateSnafu)?;

        let base_url: String = api_url.into();
        Ok(Client {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the resource at `path`, adding the query parameters.
    pub fn get<R: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<R, Error> {
        let url = self.url(path);
        log::debug!("GET {} {:?}", url, query);
        let req = self.client.get(&url).query(query);
        self.execute(req, &url)
    }

    /// Sends `body` as json to `path` using the given method.
    pub fn send<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("{} {} with {:?}", method, url, body);
        let req = self.client.request(method, &url).json(body);
        self.execute(req, &url)
    }

    /// Deletes the resource at `path`. The response body is ignored.
    pub fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let resp = self
            .client
            .delete(&url)
            .send()
            .context(TransportSnafu { url: &url })?;
        check_status(resp, &url).map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn execute<R: DeserializeOwned>(&self, req: RequestBuilder, url: &str) -> Result<R, Error> {
        let resp = req.send().context(TransportSnafu { url })?;
        let body = check_status(resp, url)?
            .text()
            .context(TransportSnafu { url })?;
        let envelope: Envelope<R> =
            serde_json::from_str(&body).context(DeserializeRespSnafu { url })?;
        Ok(envelope.into_inner())
    }
}

fn check_status(resp: Response, url: &str) -> Result<Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    // An unreadable body still yields a message from the status.
    let body = resp.text().unwrap_or_default();
    log::info!("Request to {} failed with status {}", url, status);
    log::debug!("Error response body: {}", body);
    Err(Error::Status {
        status,
        message: util::error_message(status, &body),
        url: url.to_string(),
    })
}
