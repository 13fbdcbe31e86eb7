use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "scoreboard-tui")]
#[command(about = "Terminal scoreboard for football matches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Commands {
    /// Open the scoreboard (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["scoreboard-tui"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn config_path_subcommand_parses() {
        let cli = Cli::try_parse_from(["scoreboard-tui", "config-path"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ConfigPath)));
    }
}
