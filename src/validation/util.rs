//! Primitive format checks
//!
//! The list-returning checks yield one message per problem found, and an empty
//! list when the value is acceptable.

use std::fs;
use std::net::IpAddr;
use std::path::Path;

const MIN_PORT: u32 = 1;
const MAX_PORT: u32 = 65535;

fn inclusive_range_error(lo: impl std::fmt::Display, hi: impl std::fmt::Display) -> String {
    format!("must be between {lo} and {hi}, inclusive")
}

/// Check that `port` is a usable TCP/UDP port number
pub fn is_valid_port_num(port: u32) -> Vec<String> {
    if (MIN_PORT..=MAX_PORT).contains(&port) {
        return Vec::new();
    }
    vec![inclusive_range_error(MIN_PORT, MAX_PORT)]
}

/// Check that `value` is an IPv4 or IPv6 literal
pub fn is_valid_ip(value: &str) -> Vec<String> {
    if value.parse::<IpAddr>().is_ok() {
        return Vec::new();
    }
    vec!["must be a valid IP address, (e.g. 10.9.8.7 or 2001:db8::ffff)".to_string()]
}

/// True when something (file or directory) exists at `path`
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}
