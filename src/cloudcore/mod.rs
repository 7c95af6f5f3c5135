//! Cloudcore configuration model
//!
//! Field names follow the JSON layout of the cloudcore config file. Every
//! record falls back to its default for fields the file leaves out, so a
//! partial file yields a complete configuration.

mod defaults;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{defaults as default_values, envvars};
use crate::helpers::base_path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudCoreConfig {
    #[serde(rename = "kubeAPIConfig")]
    pub kube_api_config: KubeApiConfig,
    pub modules: Modules,
}

/// Settings for the client talking to the Kubernetes API server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KubeApiConfig {
    pub master: String,
    pub content_type: String,
    pub qps: f32,
    pub burst: i32,
    /// Path to a kubeconfig file; empty when not provided
    pub kube_config: String,
}

/// A module set to `None` is not configured at all and is never checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Modules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_hub: Option<CloudHub>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_controller: Option<EdgeController>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_controller: Option<DeviceController>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_controller: Option<SyncController>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudHub {
    pub enable: bool,
    pub keepalive_interval: i32,
    pub node_limit: i32,
    #[serde(rename = "tlsCAFile")]
    pub tls_ca_file: String,
    #[serde(rename = "tlsCAKeyFile")]
    pub tls_ca_key_file: String,
    pub tls_cert_file: String,
    pub tls_private_key_file: String,
    pub write_timeout: i32,
    pub quic: CloudHubQuic,
    pub unixsocket: CloudHubUnixSocket,
    pub websocket: CloudHubWebSocket,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudHubQuic {
    pub enable: bool,
    pub address: String,
    pub port: u32,
    pub max_incoming_streams: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudHubUnixSocket {
    pub enable: bool,
    /// Must carry the `unix://` scheme
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudHubWebSocket {
    pub enable: bool,
    pub address: String,
    pub port: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeController {
    pub enable: bool,
    /// Seconds between node status updates
    pub node_update_frequency: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceController {
    pub enable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncController {
    pub enable: bool,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}

pub fn from_str(config_raw: &str) -> Result<CloudCoreConfig, ConfigError> {
    serde_json::from_str::<CloudCoreConfig>(config_raw).map_err(Into::into)
}

pub fn from_file(path: impl AsRef<Path>) -> Result<CloudCoreConfig, ConfigError> {
    let path = path.as_ref();
    log::debug!("Loading cloudcore config from {}", path.display());
    let config_raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&config_raw)
}

/// Resolve which config file to load
///
/// An explicit path wins, then `$CLOUDCORE_CONFIG`, then the file under the
/// KubeEdge root directory.
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(path) = env::var(envvars::CONFIG_PATH) {
        return path.into();
    }
    base_path::ROOT_DIR.join(default_values::CONFIG_FILE)
}
