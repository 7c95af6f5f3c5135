use std::env;

use crate::constants::envvars;

pub fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        eprintln!("Loaded local .env")
    }
    // Also load $KUBEEDGE_ROOT_DIR/.env if exists
    if let Ok(root_dir) = env::var(envvars::ROOT_DIR) {
        let root_dotenv = format!("{root_dir}/.env");
        if dotenv::from_path(&root_dotenv).is_ok() {
            eprintln!("Loaded {root_dotenv}");
        }
    }
}
