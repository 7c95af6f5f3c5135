pub const ROOT_DIR: &str = "KUBEEDGE_ROOT_DIR";
pub const CONFIG_PATH: &str = "CLOUDCORE_CONFIG";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
