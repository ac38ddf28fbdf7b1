use reqwest::blocking::ClientBuilder;
use reqwest::Proxy;
use snafu::ResultExt;

use super::{Error, InvalidProxySnafu};

/// Basic auth credentials for a proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyAuth {
    pub user: String,
    pub password: String,
}

/// How the client reaches the api.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxySetting {
    /// Whatever the environment defines (`HTTPS_PROXY` etc.).
    System,
    /// Direct connections only, the environment is ignored.
    None,
    /// Every request goes through the proxy at `url`.
    Custom { url: String, auth: Option<ProxyAuth> },
}

impl ProxySetting {
    /// Configures the client builder to use this proxy.
    pub fn apply(&self, builder: ClientBuilder) -> Result<ClientBuilder, Error> {
        match self {
            ProxySetting::System => Ok(builder),
            ProxySetting::None => {
                log::debug!("Ignoring system proxies");
                Ok(builder.no_proxy())
            }
            ProxySetting::Custom { url, auth } => {
                let proxy = Proxy::all(url.as_str()).context(InvalidProxySnafu { url: url.clone() })?;
                let proxy = match auth {
                    Some(ProxyAuth { user, password }) => {
                        log::debug!("Sending requests via {} as {}", url, user);
                        proxy.basic_auth(user, password)
                    }
                    None => {
                        log::debug!("Sending requests via {}", url);
                        proxy
                    }
                };
                Ok(builder.proxy(proxy))
            }
        }
    }
}
