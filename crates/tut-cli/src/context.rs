use anyhow::Context;
use tut_config::TutConfig;
use tut_db::service::TutorialService;

/// State shared by database-backed commands.
pub struct AppContext {
    pub config: TutConfig,
    pub service: TutorialService,
}

impl AppContext {
    pub async fn init(config: TutConfig) -> anyhow::Result<Self> {
        let service = TutorialService::from_config(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        Ok(Self { config, service })
    }

    /// Result limit: the `--limit` flag, else `general.default_limit`.
    pub fn limit(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.config.general.default_limit)
    }
}
