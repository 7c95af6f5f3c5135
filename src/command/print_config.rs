use anyhow::Result;

use crate::cloudcore::CloudCoreConfig;

pub fn default_config() -> Result<()> {
    print_config(&CloudCoreConfig::default())
}

pub fn min_config() -> Result<()> {
    print_config(&CloudCoreConfig::min_config())
}

fn print_config(config: &CloudCoreConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
