pub const LOG_LEVEL: &str = "info";

pub const ROOT_DIR: &str = "/etc/kubeedge";
pub const CONFIG_FILE: &str = "config/cloudcore.json";

pub const CA_FILE: &str = "ca/rootCA.crt";
pub const CA_KEY_FILE: &str = "ca/rootCA.key";
pub const CERT_FILE: &str = "certs/server.crt";
pub const KEY_FILE: &str = "certs/server.key";

pub const KUBE_CONFIG: &str = "/root/.kube/config";
pub const KUBE_CONTENT_TYPE: &str = "application/vnd.kubernetes.protobuf";
pub const KUBE_QPS: f32 = 100.0;
pub const KUBE_BURST: i32 = 200;

pub const LISTEN_ADDRESS: &str = "0.0.0.0";
pub const WEBSOCKET_PORT: u32 = 10000;
pub const QUIC_PORT: u32 = 10001;
pub const QUIC_MAX_INCOMING_STREAMS: i32 = 10000;
pub const UNIX_SOCKET_ADDRESS: &str = "unix:///var/lib/kubeedge/kubeedge.sock";

pub const KEEPALIVE_INTERVAL: i32 = 30;
pub const NODE_LIMIT: i32 = 1000;
pub const WRITE_TIMEOUT: i32 = 30;

pub const NODE_UPDATE_FREQUENCY: i32 = 10;
