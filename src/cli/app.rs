//! Main CLI application structure

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::console::Console;
use super::output::Output;
use super::session::Session;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "farmtech")]
#[command(author, version, about = "Record plantings and the inputs and irrigation they need")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("FarmTech starting");

    let config = Config::load(cli.config.as_deref())?;
    output.verbose_ctx(
        "config",
        &format!(
            "export_path={}, clear_screen={}, pause_after_operation={}",
            config.export_path.display(),
            config.clear_screen,
            config.pause_after_operation
        ),
    );

    println!("Iniciando o sistema FarmTech Solutions...");

    let stdout = io::stdout();
    let clear_screen = config.clear_screen && stdout.is_terminal();
    let console = Console::new(io::stdin().lock(), stdout.lock(), clear_screen);

    let mut session = Session::new(console, config, output);
    session.run()?;

    output.verbose("Exited normally");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from(["farmtech", "-v", "--config", "farm.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("farm.toml")));
    }

    #[test]
    fn no_flags() {
        let cli = Cli::try_parse_from(["farmtech"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }
}
