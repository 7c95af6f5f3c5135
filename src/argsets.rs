use std::path::PathBuf;

pub struct ValidateArgs {
    pub config: Option<PathBuf>,
    pub json: bool,
}
