use anyhow::{anyhow, Result};
use env_logger::Env;

use cloudcore_config::argsets::ValidateArgs;
use cloudcore_config::constants::{defaults, envvars};
use cloudcore_config::{command, helpers};

const CMD_VALIDATE: &str = "validate";
const CMD_DEFAULT_CONFIG: &str = "defaultconfig";
const CMD_MIN_CONFIG: &str = "minconfig";

fn main() -> Result<()> {
    helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => command::validate(ValidateArgs {
            config: args.opt_value_from_str("--config")?,
            json: args.contains("--json"),
        }),
        Some(CMD_DEFAULT_CONFIG) => command::default_config(),
        Some(CMD_MIN_CONFIG) => command::min_config(),
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'defaultconfig', 'minconfig'"
        )),
    }
}
