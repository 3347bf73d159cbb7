use anyhow::Result;
use clap::Parser;

mod cli;
mod env;
mod release;
mod tracker;

use cli::app::{App, Commands};
use env::SolEnv;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = App::parse();
    let env = SolEnv::new()?;
    env.ensure_layout()?;

    match app.cmd {
        Commands::Install(arg) => arg.run(&env),
        Commands::Remove(arg) => arg.run(&env),
        Commands::Use(arg) => arg.run(&env),
        Commands::Ls(arg) => arg.run(&env),
        Commands::Setup(arg) => arg.run(),
    }
}
