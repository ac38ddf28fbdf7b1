//! Request and response bodies of the api.
//!
//! Request types double as partial requests: every body field is an
//! `Option` and absent values are not serialized at all, so an update
//! only transmits what was explicitly given. Identifiers that end up
//! in the request path are read from input documents but never
//! serialized into the body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most endpoints wrap their answer in `{"results": ...}`, some
/// don't. Both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { results: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { results } => results,
            Envelope::Bare(value) => value,
        }
    }
}

// --- edge applications

/// The settings an edge application is created with. The module
/// switches can only be changed afterwards.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEdgeApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_protocol_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rules: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeApplicationRequest {
    #[serde(default, skip_serializing)]
    pub application_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_protocol_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_acceleration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_detection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_firewall: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_functions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_optimization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_caching: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_application_firewall: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeApplication {
    pub id: i64,
    pub name: String,
    pub active: Option<bool>,
    pub delivery_protocol: Option<String>,
    /// Either a single port or a list of ports, depending on the api
    /// version.
    pub http_port: Option<serde_json::Value>,
    pub https_port: Option<serde_json::Value>,
    pub minimum_tls_version: Option<String>,
    pub debug_rules: Option<bool>,
    pub application_acceleration: Option<bool>,
    pub caching: Option<bool>,
    pub device_detection: Option<bool>,
    pub edge_firewall: Option<bool>,
    pub edge_functions: Option<bool>,
    pub image_optimization: Option<bool>,
    pub l2_caching: Option<bool>,
    pub load_balancer: Option<bool>,
    pub raw_logs: Option<bool>,
    pub web_application_firewall: Option<bool>,
}

// --- origins

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginRequest {
    #[serde(default, skip_serializing)]
    pub application_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub origin_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<OriginAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_protocol_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmac_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmac_region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmac_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmac_secret_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginAddress {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl OriginAddress {
    pub fn new<S: Into<String>>(address: S) -> OriginAddress {
        OriginAddress {
            address: address.into(),
            weight: None,
            server_role: None,
            is_active: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub origin_key: String,
    pub origin_id: Option<i64>,
    pub name: String,
    pub origin_type: Option<String>,
    #[serde(default)]
    pub addresses: Vec<OriginAddress>,
    pub origin_protocol_policy: Option<String>,
    pub is_origin_redirection_enabled: Option<bool>,
    pub host_header: Option<String>,
    pub method: Option<String>,
    pub origin_path: Option<String>,
    pub connection_timeout: Option<i64>,
    pub timeout_between_bytes: Option<i64>,
    pub hmac_authentication: Option<bool>,
    pub hmac_region_name: Option<String>,
    pub hmac_access_key: Option<String>,
    pub hmac_secret_key: Option<String>,
}

// --- domains

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRequest {
    #[serde(default, skip_serializing)]
    pub domain_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnames: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname_access_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_certificate_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_application_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub name: String,
    pub domain_name: Option<String>,
    #[serde(default)]
    pub cnames: Vec<String>,
    pub cname_access_only: Option<bool>,
    pub digital_certificate_id: Option<i64>,
    pub edge_application_id: Option<i64>,
    pub is_active: Option<bool>,
}

// --- variables

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRequest {
    #[serde(default, skip_serializing)]
    pub variable_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub uuid: String,
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub secret: bool,
    pub last_editor: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// --- edge service resources

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequest {
    #[serde(default, skip_serializing)]
    pub service_id: Option<i64>,
    #[serde(default, skip_serializing)]
    pub resource_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub trigger: Option<String>,
    pub content_type: Option<String>,
    pub content: Option<String>,
}

// --- client information

#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub build_date: &'static str,
    pub build_version: &'static str,
    pub git_commit: &'static str,
    pub rustc_host_triple: &'static str,
    pub rustc_version: &'static str,
    pub cargo_target_triple: &'static str,
    pub api_url: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        BuildInfo {
            build_date: env!("VERGEN_BUILD_TIMESTAMP"),
            build_version: env!("VERGEN_BUILD_SEMVER"),
            git_commit: env!("VERGEN_GIT_SHA"),
            rustc_host_triple: env!("VERGEN_RUSTC_HOST_TRIPLE"),
            rustc_version: env!("VERGEN_RUSTC_SEMVER"),
            cargo_target_triple: env!("VERGEN_CARGO_TARGET_TRIPLE"),
            api_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_envelope_accepts_both_shapes() {
        let wrapped: Envelope<Domain> =
            serde_json::from_str(r#"{"results": {"id": 1, "name": "d"}}"#).unwrap();
        let bare: Envelope<Domain> = serde_json::from_str(r#"{"id": 1, "name": "d"}"#).unwrap();
        assert_eq!(wrapped.into_inner(), bare.into_inner());
    }

    #[test]
    fn unit_path_ids_are_not_serialized() {
        let req = OriginRequest {
            application_id: Some(12),
            origin_key: Some("abc".into()),
            name: Some("n".into()),
            ..OriginRequest::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"name": "n"}));
    }

    #[test]
    fn unit_path_ids_are_read_from_documents() {
        let req: OriginRequest =
            serde_json::from_str(r#"{"application_id": 12, "origin_key": "abc"}"#).unwrap();
        assert_eq!(req.application_id, Some(12));
        assert_eq!(req.origin_key.as_deref(), Some("abc"));
    }

    #[test]
    fn unit_resource_trigger_is_named_type() {
        let res: Resource = serde_json::from_str(
            r#"{"id": 3, "name": "/tmp/a.sh", "type": "Install", "content_type": "Shellscript"}"#,
        )
        .unwrap();
        assert_eq!(res.trigger.as_deref(), Some("Install"));
        assert_eq!(res.content, None);
    }
}
