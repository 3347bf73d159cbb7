use anyhow::{Context, Result, bail};
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use crate::cli::app::App;

#[derive(Args, Clone, Debug)]
pub struct SetupArg {
    #[arg(long, help = "Shell to generate completions for")]
    shell: Option<Shell>,
}

impl SetupArg {
    pub fn run(self) -> Result<()> {
        let shell = match self.shell {
            Some(shell) => shell,
            None => detect_shell()?,
        };

        let mut cmd = App::command();
        generate(shell, &mut cmd, "sol", &mut std::io::stdout());

        Ok(())
    }
}

fn detect_shell() -> Result<Shell> {
    let shell = query_shell::get_shell().context("failed to detect shell")?;

    let mapped = match shell {
        query_shell::Shell::Bash => Shell::Bash,
        query_shell::Shell::Elvish => Shell::Elvish,
        query_shell::Shell::Fish => Shell::Fish,
        query_shell::Shell::Powershell => Shell::PowerShell,
        query_shell::Shell::Zsh => Shell::Zsh,
        _ => bail!("completions are not available for this shell; pass --shell explicitly"),
    };

    Ok(mapped)
}
