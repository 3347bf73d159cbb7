use anyhow::{Context, Result};
use clap::Args;
use console::style;
use semver::Version;

use crate::env::SolEnv;

#[derive(Clone, Debug, Args)]
pub struct LsArg {}

impl LsArg {
    pub fn run(self, env: &SolEnv) -> Result<()> {
        let store = env.store();

        let mut versions: Vec<(Option<Version>, String)> = Vec::new();
        let entries = std::fs::read_dir(store.versions())
            .with_context(|| format!("failed to read {}", store.versions().display()))?;
        for entry in entries {
            let entry = entry.context("failed to read store entry")?;
            if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let parsed = Version::parse(name.trim_start_matches('v')).ok();
            versions.push((parsed, name));
        }

        if versions.is_empty() {
            println!("no versions installed");
            return Ok(());
        }

        versions.sort();
        let active = store.active_target();

        println!("installed versions:");
        for (_, name) in versions {
            let is_active = active
                .as_deref()
                .is_some_and(|t| t.starts_with(store.versions().join(&name)));
            if is_active {
                println!(
                    "  {} {}",
                    style(&name).green().bold(),
                    style("(current)").dim()
                );
            } else {
                println!("  {name}");
            }
        }

        Ok(())
    }
}
