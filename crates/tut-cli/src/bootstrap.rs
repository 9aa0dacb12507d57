use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<tut_config::TutConfig> {
    let mut config =
        tut_config::TutConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "database path overridden on command line");
        config.database.path.clone_from(db);
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}
