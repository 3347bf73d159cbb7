use anyhow::{Context, Result, bail};
use clap::Args;
use console::style;

use crate::env::SolEnv;
use crate::release;

#[derive(Clone, Debug, Args)]
pub struct RemoveArg {
    #[arg(help = "Installed version to delete")]
    version: String,
}

impl RemoveArg {
    pub fn run(self, env: &SolEnv) -> Result<()> {
        let version = release::parse_version(&self.version)?;
        let store = env.store();
        let dir = store.version_dir(&version);

        if !dir.is_dir() {
            bail!("version v{version} is not installed");
        }

        // Drop the active link first if it points into this version.
        if store.active_target().is_some_and(|t| t.starts_with(&dir)) {
            std::fs::remove_file(store.bin())
                .context("failed to remove the active version link")?;
        }

        std::fs::remove_dir_all(&dir)
            .with_context(|| format!("failed to remove {}", dir.display()))?;

        println!("{} removed v{version}", style("✓").green());
        Ok(())
    }
}
