use anyhow::{anyhow, Result};

use crate::argsets::ValidateArgs;
use crate::cloudcore;
use crate::validation::validate_cloud_core_configuration;

pub fn validate(args: ValidateArgs) -> Result<()> {
    let path = cloudcore::config_path(args.config);
    let config = cloudcore::from_file(&path)?;
    log::info!("Validating {}", path.display());

    let errs = validate_cloud_core_configuration(&config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&errs)?);
    } else {
        for err in &errs {
            println!("{err}");
        }
    }

    if !errs.is_empty() {
        return Err(anyhow!(
            "{} is invalid: {} error(s) found",
            path.display(),
            errs.len()
        ));
    }
    log::info!("Configuration is valid");
    Ok(())
}
