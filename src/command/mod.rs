mod print_config;
mod validate;

pub use print_config::{default_config, min_config};
pub use validate::validate;
