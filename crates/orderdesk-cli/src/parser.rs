//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Order tracking from the terminal, with spoken accessibility announcements.
#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(about = "Sign in, browse orders and hear them read aloud")]
#[command(version)]
pub struct Cli {
    /// Directory holding the orderdesk database
    #[arg(long = "data-dir", global = true, env = "ORDERDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Skip the simulated sign-in delay and speech pacing
    #[arg(long = "no-latency", global = true)]
    pub no_latency: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AnnounceTarget;
    use clap::CommandFactory;
    use orderdesk_core::Page;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "orderdesk",
            "--verbose",
            "--data-dir",
            "/tmp/orderdesk",
            "status",
            "--json",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/orderdesk")));
        assert!(matches!(cli.command, Some(Commands::Status { json: true })));
    }

    #[test]
    fn test_speak_with_language() {
        let cli = Cli::parse_from(["orderdesk", "speak", "Bonjour", "--lang", "fr", "--no-latency"]);
        assert!(cli.no_latency);
        match cli.command {
            Some(Commands::Speak { text, lang }) => {
                assert_eq!(text, "Bonjour");
                assert_eq!(lang.as_deref(), Some("fr"));
            }
            _ => panic!("expected speak"),
        }
    }

    #[test]
    fn test_voices_command() {
        let cli = Cli::parse_from(["orderdesk", "voices"]);
        assert!(matches!(cli.command, Some(Commands::Voices)));
    }

    #[test]
    fn test_announce_targets() {
        let cli = Cli::parse_from(["orderdesk", "announce", "page", "order-details"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Announce {
                target: AnnounceTarget::Page {
                    page: Page::OrderDetails
                }
            })
        ));

        let cli = Cli::parse_from(["orderdesk", "announce", "status", "2"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Announce {
                target: AnnounceTarget::Status { .. }
            })
        ));

        assert!(Cli::try_parse_from(["orderdesk", "announce", "page", "settings"]).is_err());
    }
}
