use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

/// Write the default config into `dir`. An existing file is left untouched
/// and reported as a problem.
pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(
            CommandResult::new(CommandSummary::Init(InitSummary { created: false }))
                .with_problems(1),
        );
    }

    fs::write(&config_path, default_config_json()?)?;
    tracing::debug!(path = %config_path.display(), "wrote config");

    Ok(CommandResult::new(CommandSummary::Init(InitSummary {
        created: true,
    })))
}
