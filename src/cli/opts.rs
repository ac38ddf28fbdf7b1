//! Defines all options and commands for the cli via [clap](https://clap.rs).

use super::cmd::*;
use crate::http::{ProxyAuth, ProxySetting as HttpProxySetting};
use clap::{ArgAction, Args, Parser, ValueEnum, ValueHint};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

/// This is a command line interface to an edge platform. It manages
/// edge applications, their origins, domains, variables and the
/// resources of edge services.
///
/// Most commands are thin wrappers around the platform's rest api.
/// Create and update commands take their input either from flags or
/// from a json document given via `--in <file>` (`--in -` reads
/// stdin).
#[derive(Parser, Debug)]
#[command(name = "edgectl", version)]
pub struct MainOpts {
    /// This can specify a path to a config file to load. It is
    /// expected to be in TOML format. If not given, the default
    /// config file is looked up based on the current OS. If no such
    /// file exists, the default configuration is used.
    ///
    /// The environment variable EDGECTL_CONFIG can also be used to
    /// define a specific config file.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub common_opts: CommonOpts,

    #[command(subcommand)]
    pub subcmd: SubCommand,
}

/// Options that are applicable to all (or most) commands.
#[derive(Args, Debug)]
pub struct CommonOpts {
    /// Be more verbose. A single `-v` prints all details of a result
    /// instead of a short confirmation. More occurrences increase the
    /// log level: `-vv` for info and `-vvv` for debug.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The output format. The default is "text" or it can be given
    /// via the config file. `json` presents all information as
    /// returned by the api, `csv` and `tabular` render tables.
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<Format>,

    /// The (base) URL of the api. If not given, it is looked up in
    /// the environment variable EDGECTL_API_URL and then in the config
    /// file.
    #[arg(long, value_hint = ValueHint::Url)]
    pub api_url: Option<String>,

    /// The personal token used to authenticate at the api. If not
    /// given, it is looked up in the environment variable
    /// EDGECTL_TOKEN and then in the config file.
    #[arg(long)]
    pub token: Option<String>,

    /// Set a proxy to use for doing http requests. By default, the
    /// system proxy will be used. Can be either `none` or <url>. If
    /// `none`, the system proxy will be ignored; otherwise specify
    /// the proxy url, like `http://myproxy.com`.
    #[arg(long)]
    pub proxy: Option<ProxySetting>,

    /// The user to authenticate at the proxy via Basic auth.
    #[arg(long)]
    pub proxy_user: Option<String>,

    /// The password to authenticate at the proxy via Basic auth.
    #[arg(long)]
    pub proxy_password: Option<String>,

    /// This ignores any invalid certificates when connecting to the
    /// api. It is obvious, that this should be used carefully!
    #[arg(long)]
    pub accept_invalid_certificates: bool,
}

impl CommonOpts {
    pub fn to_proxy_setting(&self) -> HttpProxySetting {
        match &self.proxy {
            None => HttpProxySetting::System,
            Some(ProxySetting::None) => HttpProxySetting::None,
            Some(ProxySetting::Custom { url }) => HttpProxySetting::Custom {
                url: url.clone(),
                auth: self.proxy_user.clone().map(|user| ProxyAuth {
                    user,
                    password: self.proxy_password.clone().unwrap_or_default(),
                }),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProxySetting {
    /// Don't use any proxy; this will also discard the system proxy.
    None,

    /// Use a custom defined proxy.
    Custom { url: String },
}

impl FromStr for ProxySetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            Ok(ProxySetting::None)
        } else {
            Ok(ProxySetting::Custom { url: s.to_string() })
        }
    }
}

/// All subcommands.
#[derive(Parser, Debug)]
pub enum SubCommand {
    /// Write the default config to the file system and exit.
    ///
    /// The location depends on the OS and is shown after writing.
    #[command(version)]
    WriteDefaultConfig,

    /// Write completions for some shells to stdout.
    GenerateCompletions(generate_completions::Input),

    #[command(version)]
    Configure(configure::Input),

    #[command(version)]
    Version(version::Input),

    #[command(version, alias = "edge-applications")]
    EdgeApplication(edge_application::Input),

    #[command(version, alias = "origins")]
    Origin(origin::Input),

    #[command(version, alias = "domains")]
    Domain(domain::Input),

    #[command(version, alias = "variables")]
    Variable(variable::Input),

    #[command(version, alias = "resources")]
    Resource(resource::Input),
}

/// The format for presenting the results.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Short confirmations, or all details with `-v`.
    #[default]
    Text,
    Json,
    Csv,
    Tabular,
}

/// Shared options of all list commands. Given values are sent as
/// query parameters.
#[derive(Args, Debug, Clone, Default)]
pub struct ListOpts {
    /// The page to fetch, starting at 1.
    #[arg(long)]
    pub page: Option<u32>,

    /// How many entries a page holds.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// The sort direction.
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// The field to order the entries by, like `name` or `id`.
    #[arg(long)]
    pub order_by: Option<String>,
}

impl ListOpts {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            query.push(("page_size", size.to_string()));
        }
        if let Some(sort) = self.sort {
            query.push(("sort", sort.to_value().to_string()));
        }
        if let Some(order) = &self.order_by {
            query.push(("order_by", order.clone()));
        }
        query
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_value(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn unit_cli_is_consistent() {
        MainOpts::command().debug_assert();
    }

    #[test]
    fn unit_verbose_is_global() {
        let opts = MainOpts::try_parse_from(["edgectl", "domain", "list", "-vv"]).unwrap();
        assert_eq!(opts.common_opts.verbose, 2);
    }

    #[test]
    fn unit_list_query() {
        let opts = ListOpts {
            page: Some(2),
            page_size: None,
            sort: Some(SortOrder::Desc),
            order_by: Some("name".into()),
        };
        assert_eq!(
            opts.to_query(),
            vec![
                ("page", "2".to_string()),
                ("sort", "desc".to_string()),
                ("order_by", "name".to_string())
            ]
        );
    }

    #[test]
    fn unit_proxy_setting() {
        assert_eq!(ProxySetting::from_str("NONE"), Ok(ProxySetting::None));
        assert_eq!(
            ProxySetting::from_str("http://proxy"),
            Ok(ProxySetting::Custom {
                url: "http://proxy".into()
            })
        );
    }
}
