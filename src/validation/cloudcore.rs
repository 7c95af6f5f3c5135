//! Startup checks for a cloudcore configuration
//!
//! Every check runs regardless of earlier failures, so a single pass reports
//! everything wrong with the configuration. A module that is disabled or not
//! configured contributes no errors.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cloudcore::{
    CloudCoreConfig, CloudHub, DeviceController, EdgeController, KubeApiConfig, SyncController,
};

use super::field::{ErrorList, FieldError, FieldPath};
use super::util::{file_exists, is_valid_ip, is_valid_port_num};

const UNIX_SCHEME: &str = "unix://";
const SCHEME_SEPARATOR: &str = "://";

/// Validate the whole configuration and return every problem found
pub fn validate_cloud_core_configuration(config: &CloudCoreConfig) -> ErrorList {
    let mut all_errs = ErrorList::new();
    all_errs.extend(validate_kube_api_config(
        &config.kube_api_config,
        &FieldPath::new("kubeAPIConfig"),
    ));

    let modules = &config.modules;
    let modules_path = FieldPath::new("modules");

    let path = modules_path.child("cloudHub");
    match &modules.cloud_hub {
        Some(hub) => all_errs.extend(validate_module_cloud_hub(hub, &path)),
        None => log::debug!("{path} not configured"),
    }
    let path = modules_path.child("edgeController");
    match &modules.edge_controller {
        Some(ec) => all_errs.extend(validate_module_edge_controller(ec, &path)),
        None => log::debug!("{path} not configured"),
    }
    let path = modules_path.child("deviceController");
    match &modules.device_controller {
        Some(dc) => all_errs.extend(validate_module_device_controller(dc, &path)),
        None => log::debug!("{path} not configured"),
    }
    let path = modules_path.child("syncController");
    match &modules.sync_controller {
        Some(sc) => all_errs.extend(validate_module_sync_controller(sc, &path)),
        None => log::debug!("{path} not configured"),
    }

    all_errs
}

pub fn validate_module_cloud_hub(hub: &CloudHub, path: &FieldPath) -> ErrorList {
    if !hub.enable {
        log::debug!("{path} disabled; skipping");
        return ErrorList::new();
    }

    let mut all_errs = ErrorList::new();

    let ws_path = path.child("websocket");
    for msg in is_valid_port_num(hub.websocket.port) {
        all_errs.push(FieldError::invalid(&ws_path.child("port"), hub.websocket.port, msg));
    }
    for msg in is_valid_ip(&hub.websocket.address) {
        all_errs.push(FieldError::invalid(
            &ws_path.child("address"),
            hub.websocket.address.as_str(),
            msg,
        ));
    }

    // The QUIC listener is checked even when it is switched off
    let quic_path = path.child("quic");
    for msg in is_valid_port_num(hub.quic.port) {
        all_errs.push(FieldError::invalid(&quic_path.child("port"), hub.quic.port, msg));
    }
    for msg in is_valid_ip(&hub.quic.address) {
        all_errs.push(FieldError::invalid(
            &quic_path.child("address"),
            hub.quic.address.as_str(),
            msg,
        ));
    }

    for (name, file) in [
        ("tlsPrivateKeyFile", &hub.tls_private_key_file),
        ("tlsCertFile", &hub.tls_cert_file),
        ("tlsCAFile", &hub.tls_ca_file),
    ] {
        if !file_exists(file) {
            all_errs.push(FieldError::invalid(
                &path.child(name),
                file.as_str(),
                format!("{name} does not exist"),
            ));
        }
    }

    all_errs.extend(validate_unix_socket_address(
        &hub.unixsocket.address,
        &path.child("unixsocket").child("address"),
    ));

    all_errs
}

/// Check the socket scheme, and make sure the socket's directory is there
///
/// The directory is created whenever the address has a `scheme://` part,
/// whether or not the scheme is the expected one.
fn validate_unix_socket_address(address: &str, path: &FieldPath) -> ErrorList {
    let mut all_errs = ErrorList::new();

    if !address.to_lowercase().starts_with(UNIX_SCHEME) {
        all_errs.push(FieldError::invalid(
            path,
            address,
            format!("unix socket address must have prefix {UNIX_SCHEME}"),
        ));
    }

    if let Some((_, socket_file)) = address.split_once(SCHEME_SEPARATOR) {
        let dir = socket_dir(socket_file);
        if !file_exists(&dir) {
            match fs::create_dir_all(&dir) {
                Ok(()) => log::info!("Created unix socket directory {}", dir.display()),
                Err(e) => {
                    log::warn!("Could not create unix socket directory {}: {}", dir.display(), e);
                    all_errs.push(FieldError::invalid(
                        path,
                        address,
                        format!(
                            "create unix socket address {} dir {} error: {}",
                            address,
                            dir.display(),
                            e
                        ),
                    ));
                }
            }
        }
    }

    all_errs
}

/// Directory holding the socket file: everything up to the last `/`, cleaned
///
/// A bare file name lives in `.`; a trailing `/` names the directory itself.
fn socket_dir(socket_file: &str) -> PathBuf {
    let dir = match socket_file.rfind('/') {
        Some(i) => &socket_file[..=i],
        None => "",
    };
    PathBuf::from(clean_path(dir))
}

/// Lexically normalize a slash-separated path
///
/// Repeated separators and `.` elements are dropped, and `..` removes the
/// element before it. Nothing is looked up on disk, so `file/..` cleans away
/// even when `file` is not a directory.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                _ if rooted => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

pub fn validate_module_edge_controller(ec: &EdgeController, path: &FieldPath) -> ErrorList {
    if !ec.enable {
        log::debug!("{path} disabled; skipping");
        return ErrorList::new();
    }

    let mut all_errs = ErrorList::new();
    if ec.node_update_frequency <= 0 {
        all_errs.push(FieldError::invalid(
            &path.child("nodeUpdateFrequency"),
            ec.node_update_frequency,
            "nodeUpdateFrequency must be greater than 0",
        ));
    }
    all_errs
}

pub fn validate_module_device_controller(dc: &DeviceController, path: &FieldPath) -> ErrorList {
    if !dc.enable {
        log::debug!("{path} disabled; skipping");
    }
    ErrorList::new()
}

pub fn validate_module_sync_controller(sc: &SyncController, path: &FieldPath) -> ErrorList {
    if !sc.enable {
        log::debug!("{path} disabled; skipping");
    }
    ErrorList::new()
}

/// An empty kubeconfig means none was given, and is not checked
pub fn validate_kube_api_config(k: &KubeApiConfig, path: &FieldPath) -> ErrorList {
    let mut all_errs = ErrorList::new();
    if k.kube_config.is_empty() {
        return all_errs;
    }

    let kube_config_path = path.child("kubeConfig");
    if !Path::new(&k.kube_config).is_absolute() {
        all_errs.push(FieldError::invalid(
            &kube_config_path,
            k.kube_config.as_str(),
            "kubeconfig must be an absolute path",
        ));
    }
    if !file_exists(&k.kube_config) {
        all_errs.push(FieldError::invalid(
            &kube_config_path,
            k.kube_config.as_str(),
            "kubeconfig does not exist",
        ));
    }
    all_errs
}
