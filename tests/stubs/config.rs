#![allow(dead_code)]
// Each test binary only uses some of these

/// `{ROOT}` is replaced with a per-test temporary directory
pub const VALID_PAYLOAD: &str = r#"
{
    "kubeAPIConfig": {
        "master": "",
        "contentType": "application/vnd.kubernetes.protobuf",
        "qps": 100,
        "burst": 200,
        "kubeConfig": "{ROOT}/kubeconfig"
    },
    "modules": {
        "cloudHub": {
            "enable": true,
            "keepaliveInterval": 30,
            "nodeLimit": 1000,
            "tlsCAFile": "{ROOT}/ca/rootCA.crt",
            "tlsCAKeyFile": "{ROOT}/ca/rootCA.key",
            "tlsCertFile": "{ROOT}/certs/server.crt",
            "tlsPrivateKeyFile": "{ROOT}/certs/server.key",
            "writeTimeout": 30,
            "quic": {
                "enable": false,
                "address": "0.0.0.0",
                "port": 10001,
                "maxIncomingStreams": 10000
            },
            "unixsocket": {
                "enable": true,
                "address": "unix://{ROOT}/run/kubeedge.sock"
            },
            "websocket": {
                "enable": true,
                "address": "0.0.0.0",
                "port": 10000
            }
        },
        "edgeController": {
            "enable": true,
            "nodeUpdateFrequency": 10
        },
        "deviceController": {
            "enable": true
        },
        "syncController": {
            "enable": true
        }
    }
}
"#;

/// Broken in several independent places
pub const INVALID_PAYLOAD: &str = r#"
{
    "kubeAPIConfig": {
        "kubeConfig": "relative/kubeconfig"
    },
    "modules": {
        "cloudHub": {
            "enable": true,
            "tlsCAFile": "{ROOT}/ca/rootCA.crt",
            "tlsCertFile": "{ROOT}/certs/missing.crt",
            "tlsPrivateKeyFile": "{ROOT}/certs/server.key",
            "unixsocket": {
                "address": "unix://{ROOT}/run/kubeedge.sock"
            },
            "websocket": {
                "address": "0.0.0.0",
                "port": 70000
            }
        },
        "edgeController": {
            "enable": true,
            "nodeUpdateFrequency": 0
        }
    }
}
"#;

/// Every module off, with garbage in each of them
pub const DISABLED_MODULES_PAYLOAD: &str = r#"
{
    "kubeAPIConfig": {
        "kubeConfig": ""
    },
    "modules": {
        "cloudHub": {
            "enable": false,
            "tlsCAFile": "/nonexistent/rootCA.crt",
            "tlsCertFile": "/nonexistent/server.crt",
            "tlsPrivateKeyFile": "/nonexistent/server.key",
            "unixsocket": {
                "address": "/no/scheme.sock"
            },
            "websocket": {
                "address": "not-an-ip",
                "port": 0
            }
        },
        "edgeController": {
            "enable": false,
            "nodeUpdateFrequency": -1
        },
        "deviceController": {
            "enable": false
        },
        "syncController": {
            "enable": false
        }
    }
}
"#;

pub const INVALID_JSON: &str = "blah";

/// Lay out the TLS material and kubeconfig the payloads point at
pub fn populate_root(root: &std::path::Path) {
    for file in [
        "kubeconfig",
        "ca/rootCA.crt",
        "ca/rootCA.key",
        "certs/server.crt",
        "certs/server.key",
    ] {
        let path = root.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "test").unwrap();
    }
}

pub fn render(payload: &str, root: &std::path::Path) -> String {
    payload.replace("{ROOT}", &root.to_string_lossy())
}
