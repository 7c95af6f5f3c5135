use crate::constants::defaults;
use crate::helpers::base_path::under_root;

use super::{
    CloudCoreConfig, CloudHub, CloudHubQuic, CloudHubUnixSocket, CloudHubWebSocket,
    DeviceController, EdgeController, KubeApiConfig, Modules, SyncController,
};

impl CloudCoreConfig {
    /// Smallest useful configuration: hub and edge controller only
    pub fn min_config() -> Self {
        CloudCoreConfig {
            kube_api_config: KubeApiConfig::default(),
            modules: Modules {
                cloud_hub: Some(CloudHub::default()),
                edge_controller: Some(EdgeController::default()),
                device_controller: None,
                sync_controller: None,
            },
        }
    }
}

impl Default for KubeApiConfig {
    fn default() -> Self {
        KubeApiConfig {
            master: String::new(),
            content_type: defaults::KUBE_CONTENT_TYPE.to_string(),
            qps: defaults::KUBE_QPS,
            burst: defaults::KUBE_BURST,
            kube_config: defaults::KUBE_CONFIG.to_string(),
        }
    }
}

impl Default for Modules {
    fn default() -> Self {
        Modules {
            cloud_hub: Some(CloudHub::default()),
            edge_controller: Some(EdgeController::default()),
            device_controller: Some(DeviceController::default()),
            sync_controller: Some(SyncController::default()),
        }
    }
}

impl Default for CloudHub {
    fn default() -> Self {
        CloudHub {
            enable: true,
            keepalive_interval: defaults::KEEPALIVE_INTERVAL,
            node_limit: defaults::NODE_LIMIT,
            tls_ca_file: under_root(defaults::CA_FILE),
            tls_ca_key_file: under_root(defaults::CA_KEY_FILE),
            tls_cert_file: under_root(defaults::CERT_FILE),
            tls_private_key_file: under_root(defaults::KEY_FILE),
            write_timeout: defaults::WRITE_TIMEOUT,
            quic: CloudHubQuic::default(),
            unixsocket: CloudHubUnixSocket::default(),
            websocket: CloudHubWebSocket::default(),
        }
    }
}

impl Default for CloudHubQuic {
    fn default() -> Self {
        CloudHubQuic {
            enable: false,
            address: defaults::LISTEN_ADDRESS.to_string(),
            port: defaults::QUIC_PORT,
            max_incoming_streams: defaults::QUIC_MAX_INCOMING_STREAMS,
        }
    }
}

impl Default for CloudHubUnixSocket {
    fn default() -> Self {
        CloudHubUnixSocket {
            enable: true,
            address: defaults::UNIX_SOCKET_ADDRESS.to_string(),
        }
    }
}

impl Default for CloudHubWebSocket {
    fn default() -> Self {
        CloudHubWebSocket {
            enable: true,
            address: defaults::LISTEN_ADDRESS.to_string(),
            port: defaults::WEBSOCKET_PORT,
        }
    }
}

impl Default for EdgeController {
    fn default() -> Self {
        EdgeController {
            enable: true,
            node_update_frequency: defaults::NODE_UPDATE_FREQUENCY,
        }
    }
}

impl Default for DeviceController {
    fn default() -> Self {
        DeviceController { enable: true }
    }
}

impl Default for SyncController {
    fn default() -> Self {
        SyncController { enable: true }
    }
}
