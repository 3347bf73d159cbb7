use anyhow::{Context, Result, bail};
use clap::Args;
use console::style;

use crate::env::SolEnv;
use crate::release;

#[derive(Clone, Debug, Args)]
pub struct UseArg {
    #[arg(help = "Installed version to activate")]
    version: String,
}

impl UseArg {
    pub fn run(self, env: &SolEnv) -> Result<()> {
        let version = release::parse_version(&self.version)?;
        let store = env.store();
        let dir = store.version_dir(&version);

        if !dir.is_dir() {
            bail!("version v{version} is not installed; run `sol install {version}` first");
        }

        sol_fs::atomic_symlink(dir.join("bin"), store.bin())
            .context("failed to update the active version link")?;

        println!("{} now using v{version}", style("✓").green());
        Ok(())
    }
}
