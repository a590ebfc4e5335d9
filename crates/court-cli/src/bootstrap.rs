use std::path::Path;

use anyhow::Context;
use court_config::CourtConfig;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CourtConfig> {
    load_dotenv()?;

    let extra = flags.config.as_deref().map(Path::new);
    if let Some(path) = extra {
        if !path.is_file() {
            anyhow::bail!("config file '{}' does not exist", path.display());
        }
    }

    CourtConfig::load_from(extra).context("failed to load courtside configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    }
    Ok(())
}
