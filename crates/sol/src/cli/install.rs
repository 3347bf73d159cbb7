use anyhow::{Context, Result, bail};
use clap::Args;
use console::style;
use sol_archive::ExtractOptions;
use sol_fetch::{DownloadClient, ProgressReader};

use crate::env::SolEnv;
use crate::release;
use crate::tracker::{ProgressTracker, ProgressTrackerConfig, Tracker};

#[derive(Clone, Debug, Args)]
pub struct InstallArg {
    #[arg(help = "Version to install, e.g. 18.20.0 or v18.20.0")]
    version: String,
}

impl InstallArg {
    pub fn run(self, env: &SolEnv) -> Result<()> {
        let version = release::parse_version(&self.version)?;
        let store = env.store();

        if store.is_installed(&version) {
            bail!("version v{version} is already installed");
        }

        let url = release::release_url(&version);
        let client = DownloadClient::new()?;
        let download = client
            .get(&url)
            .with_context(|| format!("failed to download v{version}"))?;

        let tracker = ProgressTracker::new(ProgressTrackerConfig {
            len: download.content_length(),
        });
        let pb = tracker.pb.clone();
        let reader = ProgressReader::new(download, move |read| pb.set_position(read));

        // Extraction lands in a staging directory first, so a failed or
        // interrupted install never leaves a half-written version dir.
        let staging = tempfile::Builder::new()
            .prefix("install-")
            .tempdir_in(store.tmp())
            .context("failed to create staging directory")?;

        let options = ExtractOptions::default().strip_components(1);
        let report = sol_archive::extract(reader, staging.path(), &options)
            .with_context(|| format!("failed to unpack v{version}"))?;
        tracker.finish(None);

        let dest = store.version_dir(&version);
        sol_fs::replace_dir(staging.path(), &dest)
            .with_context(|| format!("failed to move v{version} into place"))?;

        sol_fs::atomic_symlink(dest.join("bin"), store.bin())
            .context("failed to update the active version link")?;

        println!(
            "{} installed v{version} ({} files)",
            style("✓").green(),
            report.files
        );
        Ok(())
    }
}
