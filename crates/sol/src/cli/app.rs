use clap::{Parser, Subcommand};

use crate::cli::install::InstallArg;
use crate::cli::ls::LsArg;
use crate::cli::remove::RemoveArg;
use crate::cli::setup::SetupArg;
use crate::cli::use_ver::UseArg;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "sol",
    version = env!("CARGO_PKG_VERSION"),
    about = "Install and switch between Node.js versions",
    propagate_version = true
)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "i", name = "install", about = "Download and install a version")]
    Install(InstallArg),
    #[command(alias = "rm", name = "remove", about = "Delete an installed version")]
    Remove(RemoveArg),
    #[command(alias = "u", name = "use", about = "Switch the active version")]
    Use(UseArg),
    #[command(alias = "list", name = "ls", about = "List installed versions")]
    Ls(LsArg),
    #[command(alias = "s", name = "setup", about = "Emit shell completions")]
    Setup(SetupArg),
}
