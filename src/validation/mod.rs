mod cloudcore;
mod field;
mod util;

pub use cloudcore::{
    validate_cloud_core_configuration, validate_kube_api_config,
    validate_module_cloud_hub, validate_module_device_controller,
    validate_module_edge_controller, validate_module_sync_controller,
};
pub use field::{ErrorList, FieldError, FieldPath};
pub use util::{file_exists, is_valid_ip, is_valid_port_num};
